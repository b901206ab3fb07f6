//! Which edit dialog is open, and for which record.

use tracing::{info, warn};
use uuid::Uuid;

use crm_core::types::EntityKind;
use crm_core::{AppError, AppResult};
use crm_entity::{
    Company, CompanyInput, ContactDetail, ContactInput, DealDetail, DealInput, TaskDetail,
    TaskInput,
};

use crate::gateway::CrmGateway;

/// State of one dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalSlot<T> {
    Closed,
    /// Open with an empty form.
    Create,
    /// Open on an existing record.
    Edit(T),
}

impl<T> Default for ModalSlot<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ModalSlot<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The record being edited, if any.
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Edit(record) => Some(record),
            _ => None,
        }
    }
}

/// A record type with its own dialog.
pub trait Editable: Clone + Sized {
    /// The form payload sent on submit.
    type Input;

    const KIND: EntityKind;

    fn record_id(&self) -> Uuid;

    fn slot(modals: &ModalCoordinator) -> &ModalSlot<Self>;

    fn slot_mut(modals: &mut ModalCoordinator) -> &mut ModalSlot<Self>;

    async fn create(gateway: &dyn CrmGateway, input: &Self::Input) -> AppResult<Self>;

    async fn update(gateway: &dyn CrmGateway, id: Uuid, input: &Self::Input) -> AppResult<Self>;
}

/// One dialog slot per entity kind.
///
/// Slots are independent: opening the deal dialog leaves an open contact
/// dialog alone.
#[derive(Debug, Clone, Default)]
pub struct ModalCoordinator {
    contact: ModalSlot<ContactDetail>,
    company: ModalSlot<Company>,
    deal: ModalSlot<DealDetail>,
    task: ModalSlot<TaskDetail>,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for `T`, for editing `record` or creating when
    /// `None`. Replaces whatever the slot held before.
    pub fn open<T: Editable>(&mut self, record: Option<T>) {
        *T::slot_mut(self) = match record {
            Some(record) => ModalSlot::Edit(record),
            None => ModalSlot::Create,
        };
    }

    pub fn close<T: Editable>(&mut self) {
        *T::slot_mut(self) = ModalSlot::Closed;
    }

    pub fn slot<T: Editable>(&self) -> &ModalSlot<T> {
        T::slot(self)
    }

    pub fn is_open(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Contact => self.contact.is_open(),
            EntityKind::Company => self.company.is_open(),
            EntityKind::Deal => self.deal.is_open(),
            EntityKind::Task => self.task.is_open(),
        }
    }

    /// Kinds with an open dialog.
    pub fn open_kinds(&self) -> Vec<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .filter(|kind| self.is_open(*kind))
            .collect()
    }

    /// Save the form of the open `T` dialog.
    ///
    /// Creates when the dialog was opened empty, updates the attached record
    /// otherwise. The dialog closes only when the save succeeds.
    pub async fn submit<T: Editable>(
        &mut self,
        gateway: &dyn CrmGateway,
        input: &T::Input,
    ) -> AppResult<T> {
        let target = match T::slot(self) {
            ModalSlot::Closed => {
                return Err(AppError::validation(format!(
                    "No {} dialog is open",
                    T::KIND.label()
                )));
            }
            ModalSlot::Create => None,
            ModalSlot::Edit(record) => Some(record.record_id()),
        };

        let result = match target {
            None => T::create(gateway, input).await,
            Some(id) => T::update(gateway, id, input).await,
        };

        match result {
            Ok(saved) => {
                info!(kind = %T::KIND, id = %saved.record_id(), "Dialog saved");
                self.close::<T>();
                Ok(saved)
            }
            Err(e) => {
                warn!(kind = %T::KIND, error = %e, "Dialog save failed");
                Err(e)
            }
        }
    }
}

impl Editable for ContactDetail {
    type Input = ContactInput;
    const KIND: EntityKind = EntityKind::Contact;

    fn record_id(&self) -> Uuid {
        self.contact.id
    }

    fn slot(modals: &ModalCoordinator) -> &ModalSlot<Self> {
        &modals.contact
    }

    fn slot_mut(modals: &mut ModalCoordinator) -> &mut ModalSlot<Self> {
        &mut modals.contact
    }

    async fn create(gateway: &dyn CrmGateway, input: &ContactInput) -> AppResult<Self> {
        gateway.create_contact(input).await
    }

    async fn update(gateway: &dyn CrmGateway, id: Uuid, input: &ContactInput) -> AppResult<Self> {
        gateway.update_contact(id, input).await
    }
}

impl Editable for Company {
    type Input = CompanyInput;
    const KIND: EntityKind = EntityKind::Company;

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn slot(modals: &ModalCoordinator) -> &ModalSlot<Self> {
        &modals.company
    }

    fn slot_mut(modals: &mut ModalCoordinator) -> &mut ModalSlot<Self> {
        &mut modals.company
    }

    async fn create(gateway: &dyn CrmGateway, input: &CompanyInput) -> AppResult<Self> {
        gateway.create_company(input).await
    }

    async fn update(gateway: &dyn CrmGateway, id: Uuid, input: &CompanyInput) -> AppResult<Self> {
        gateway.update_company(id, input).await
    }
}

impl Editable for DealDetail {
    type Input = DealInput;
    const KIND: EntityKind = EntityKind::Deal;

    fn record_id(&self) -> Uuid {
        self.deal.id
    }

    fn slot(modals: &ModalCoordinator) -> &ModalSlot<Self> {
        &modals.deal
    }

    fn slot_mut(modals: &mut ModalCoordinator) -> &mut ModalSlot<Self> {
        &mut modals.deal
    }

    async fn create(gateway: &dyn CrmGateway, input: &DealInput) -> AppResult<Self> {
        gateway.create_deal(input).await
    }

    async fn update(gateway: &dyn CrmGateway, id: Uuid, input: &DealInput) -> AppResult<Self> {
        gateway.update_deal(id, input).await
    }
}

impl Editable for TaskDetail {
    type Input = TaskInput;
    const KIND: EntityKind = EntityKind::Task;

    fn record_id(&self) -> Uuid {
        self.task.id
    }

    fn slot(modals: &ModalCoordinator) -> &ModalSlot<Self> {
        &modals.task
    }

    fn slot_mut(modals: &mut ModalCoordinator) -> &mut ModalSlot<Self> {
        &mut modals.task
    }

    async fn create(gateway: &dyn CrmGateway, input: &TaskInput) -> AppResult<Self> {
        gateway.create_task(input).await
    }

    async fn update(gateway: &dyn CrmGateway, id: Uuid, input: &TaskInput) -> AppResult<Self> {
        gateway.update_task(id, input).await
    }
}
