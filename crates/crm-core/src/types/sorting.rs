//! Sort direction shared by the data table and list endpoints.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result in this direction.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reverses_for_desc() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
