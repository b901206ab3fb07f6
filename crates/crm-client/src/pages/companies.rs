//! Companies screen.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crm_entity::Company;
use crm_table::{CellValue, Column, PageSize};

use super::{Listing, or_empty, short_date};
use crate::gateway::CrmGateway;
use crate::modal::ModalCoordinator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total: usize,
    pub with_domain: usize,
    /// Distinct non-empty industries.
    pub industries: usize,
    pub total_employees: i64,
}

impl CompanyStats {
    pub fn compute(companies: &[Company]) -> Self {
        let industries: HashSet<&str> = companies
            .iter()
            .filter_map(|c| c.industry.as_deref())
            .filter(|i| !i.is_empty())
            .collect();

        Self {
            total: companies.len(),
            with_domain: companies.iter().filter(|c| c.has_domain()).count(),
            industries: industries.len(),
            total_employees: companies
                .iter()
                .map(|c| i64::from(c.employees.unwrap_or(0)))
                .sum(),
        }
    }
}

pub fn columns() -> Vec<Column<Company>> {
    vec![
        Column::new("name", "Company"),
        Column::new("industry", "Industry"),
        Column::new("website", "Website"),
        Column::new("location", "Location"),
        Column::new("employees", "Employees").render(|v, _| match v {
            CellValue::Number(n) => format!("{n}"),
            _ => "—".to_string(),
        }),
        Column::new("createdAt", "Created").render(|v, _| short_date(v, "")),
    ]
}

pub struct CompaniesPage {
    gateway: Arc<dyn CrmGateway>,
    listing: Listing<Company>,
}

impl CompaniesPage {
    pub fn new(gateway: Arc<dyn CrmGateway>, page_size: PageSize) -> Self {
        Self {
            gateway,
            listing: Listing::new(columns(), page_size, "companies"),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.listing.begin();
        let companies = or_empty("companies", self.gateway.list_companies().await);
        self.listing.finish(ticket, companies);
    }

    pub fn listing(&self) -> &Listing<Company> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<Company> {
        &mut self.listing
    }

    pub fn stats(&self) -> CompanyStats {
        CompanyStats::compute(self.listing.rows())
    }

    pub fn edit(&self, row_id: &str, modals: &mut ModalCoordinator) -> bool {
        match self.listing.find(row_id) {
            Some(company) => {
                modals.open(Some(company.clone()));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockGateway, company};

    #[test]
    fn test_stats() {
        let mut a = company("Acme");
        a.domain = Some("acme.com".into());
        a.industry = Some("Manufacturing".into());
        a.employees = Some(120);
        let mut b = company("Globex");
        b.industry = Some("Manufacturing".into());
        b.employees = Some(30);
        let c = company("Initech");

        let stats = CompanyStats::compute(&[a, b, c]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.with_domain, 1);
        assert_eq!(stats.industries, 1);
        assert_eq!(stats.total_employees, 150);
    }

    #[tokio::test]
    async fn test_search_narrows_loaded_rows() {
        let gateway = MockGateway {
            companies: vec![company("Acme"), company("Globex"), company("Acme Labs")],
            ..Default::default()
        };
        let mut page = CompaniesPage::new(Arc::new(gateway), PageSize::Ten);
        page.load().await;

        page.listing_mut().table_mut().search("acme");
        let view = page.listing().table().view();
        assert_eq!(view.total, 2);
        assert_eq!(view.range.to_string(), "Showing 1 to 2 of 2 results");
    }
}
