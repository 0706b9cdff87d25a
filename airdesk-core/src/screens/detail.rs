//! Single-record detail screen

use std::sync::Arc;

use airdesk_api::ResourceService;

use crate::error::CoreResult;
use crate::form::FormDraft;
use crate::i18n::{texts, Language};
use crate::traits::EditableFields;
use crate::types::{Notification, Operation};

/// Shows one record fetched by id (`/flights/:flightId`).
pub struct DetailScreen<S: ResourceService> {
    service: Arc<S>,
    language: Language,
    record: Option<S::Record>,
    notifications: Vec<Notification>,
}

impl<S: ResourceService> DetailScreen<S> {
    pub fn new(service: Arc<S>, language: Language) -> Self {
        Self {
            service,
            language,
            record: None,
            notifications: Vec::new(),
        }
    }

    /// Fetch the record. A failure keeps whatever was shown before.
    pub async fn load(&mut self, id: &str) -> CoreResult<&S::Record> {
        let resource = self.service.resource();
        match self.service.get(id).await {
            Ok(record) => {
                log::debug!("[{resource}] Loaded {id}");
                Ok(&*self.record.insert(record))
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{resource}] Load of {id} failed: {e}");
                } else {
                    log::error!("[{resource}] Load of {id} failed: {e}");
                }
                self.notifications.push(Notification::error(
                    Operation::Load,
                    texts(self.language).resource(resource),
                ));
                Err(e.into())
            }
        }
    }

    pub fn record(&self) -> Option<&S::Record> {
        self.record.as_ref()
    }

    /// Edit form seeded with the loaded record.
    pub fn edit_form(&self) -> Option<FormDraft<S::Record>>
    where
        S::Record: EditableFields,
    {
        self.record
            .clone()
            .map(|r| FormDraft::new(r).with_language(self.language))
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{three_flight_pages, MockOp};
    use crate::CoreError;
    use airdesk_api::ApiError;

    #[tokio::test]
    async fn loads_record_from_any_page() {
        let service = three_flight_pages();
        let mut screen = DetailScreen::new(service, Language::EnUs);

        let flight = screen.load("4").await.unwrap();
        assert_eq!(flight.flight_number, "D");
        assert_eq!(screen.record().map(|f| f.id.as_str()), Some("4"));

        let form = screen.edit_form().unwrap();
        assert_eq!(form.draft().id, "4");
        assert!(form.is_valid());
    }

    #[tokio::test]
    async fn missing_record_reports_load_failure() {
        let service = three_flight_pages();
        let mut screen = DetailScreen::new(service, Language::EnUs);

        let err = screen.load("404").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Api(ApiError::HttpStatus { status: 404, .. })
        ));
        assert!(screen.record().is_none());
        assert_eq!(screen.take_notifications()[0].title, "Failed to load flight!");
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_record() {
        let service = three_flight_pages();
        let mut screen = DetailScreen::new(Arc::clone(&service), Language::EnUs);
        screen.load("1").await.unwrap();

        service.fail(MockOp::Get).await;
        assert!(screen.load("2").await.is_err());
        assert_eq!(screen.record().map(|f| f.id.as_str()), Some("1"));
    }
}
