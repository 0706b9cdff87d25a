//! Standalone create screen

use std::sync::Arc;

use airdesk_api::{FlightsService, ResourceService};

use crate::error::CoreResult;
use crate::form::FormDraft;
use crate::i18n::{texts, Language};
use crate::traits::{EditableFields, Validator};
use crate::types::{Notification, Operation};

/// Create screen reached directly rather than through a list.
///
/// Success queues a notification instead of patching a page.
pub struct CreatePage<S: ResourceService> {
    service: Arc<S>,
    form: FormDraft<S::Draft>,
    language: Language,
    created: Option<S::Record>,
    notifications: Vec<Notification>,
}

/// The `/flights/create` screen.
pub type CreateFlightPage = CreatePage<FlightsService>;

impl<S> CreatePage<S>
where
    S: ResourceService,
    S::Draft: EditableFields + Default,
{
    pub fn new(service: Arc<S>, language: Language) -> Self {
        Self {
            service,
            form: FormDraft::default().with_language(language),
            language,
            created: None,
            notifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator<S::Draft> + 'static) -> Self {
        self.form = self.form.with_validator(validator);
        self
    }

    pub fn form(&self) -> &FormDraft<S::Draft> {
        &self.form
    }

    pub fn on_field_change(&mut self, field: <S::Draft as EditableFields>::Field, value: impl Into<String>) {
        self.form.on_field_change(field, value);
    }

    pub fn on_field_change_by_name(&mut self, name: &str, value: impl Into<String>) -> CoreResult<()> {
        self.form.on_field_change_by_name(name, value)
    }

    pub fn on_focus(&mut self, field: <S::Draft as EditableFields>::Field) {
        self.form.on_focus(field);
    }

    /// Record returned by the last successful submission, if the server sent one.
    pub fn created(&self) -> Option<&S::Record> {
        self.created.as_ref()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Submit the draft. The draft is kept on failure for another attempt.
    pub async fn submit(&mut self) -> CoreResult<Option<S::Record>> {
        let resource = self.service.resource();
        let resource_texts = texts(self.language).resource(resource);
        let service = Arc::clone(&self.service);
        let notifications = &mut self.notifications;

        let result = self
            .form
            .submit_with(
                resource_texts.create_failed,
                |draft| async move { service.create(&draft).await },
                |_| notifications.push(Notification::success(Operation::Create, resource_texts)),
            )
            .await;

        match &result {
            Ok(created) => {
                log::info!("[{resource}] Created from standalone page");
                self.created.clone_from(created);
            }
            Err(e) => {
                log::warn!("[{resource}] Create refused: {e}");
                if matches!(e, crate::CoreError::Api(_)) {
                    self.notifications
                        .push(Notification::error(Operation::Create, resource_texts));
                }
            }
        }
        result
    }
}
