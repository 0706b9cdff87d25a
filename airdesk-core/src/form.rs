//! Create and edit form drafts
//!
//! A [`FormDraft`] holds the values being edited plus a validity flag. The
//! flag goes back to valid whenever a field regains focus and turns invalid
//! only after a refused or failed submission. Failed submissions never touch
//! the draft values.

use std::future::Future;
use std::sync::Arc;

use airdesk_api::Result as ApiResult;

use crate::error::{CoreError, CoreResult};
use crate::i18n::{texts, Language};
use crate::traits::{EditableFields, RequiredFields, Validator};

/// Draft values plus submit state.
pub struct FormDraft<D> {
    draft: D,
    valid: bool,
    error: Option<String>,
    language: Language,
    validators: Vec<Arc<dyn Validator<D>>>,
}

impl<D: std::fmt::Debug> std::fmt::Debug for FormDraft<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormDraft")
            .field("draft", &self.draft)
            .field("valid", &self.valid)
            .field("error", &self.error)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl<D: Clone> Clone for FormDraft<D> {
    fn clone(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            valid: self.valid,
            error: self.error.clone(),
            language: self.language,
            validators: self.validators.clone(),
        }
    }
}

impl<D: EditableFields + Default> Default for FormDraft<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: EditableFields> FormDraft<D> {
    /// Valid form over `draft`, messages in the default language.
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            valid: true,
            error: None,
            language: Language::default(),
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Add a check run after the required-field check.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator<D> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn into_draft(self) -> D {
        self.draft
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Localized message of the last refused or failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace exactly one field.
    pub fn on_field_change(&mut self, field: D::Field, value: impl Into<String>) {
        self.draft.set_value(field, value.into());
    }

    /// [`on_field_change`](Self::on_field_change) addressed by wire name.
    pub fn on_field_change_by_name(&mut self, name: &str, value: impl Into<String>) -> CoreResult<()> {
        let field = D::parse_field(name).ok_or_else(|| CoreError::UnknownField(name.to_string()))?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// A field regained focus: clear the invalid marker.
    pub fn on_focus(&mut self, _field: D::Field) {
        self.valid = true;
        self.error = None;
    }

    /// Run the required-field check and any added validators.
    pub fn check(&self) -> Result<(), String> {
        let form_texts = &texts(self.language).form;
        RequiredFields::new().validate(&self.draft, form_texts)?;
        self.validators
            .iter()
            .try_for_each(|v| v.validate(&self.draft, form_texts))
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.error = Some(message.into());
    }

    /// Gate a submission. Returns the copy of the draft to send.
    ///
    /// An invalid form is refused as is; a form failing its checks is marked
    /// invalid. Neither case reaches the network.
    pub fn begin_submit(&mut self) -> CoreResult<D> {
        if !self.valid {
            return Err(CoreError::FormInvalid);
        }
        if let Err(message) = self.check() {
            log::warn!("Form refused: {message}");
            self.mark_failed(message.clone());
            return Err(CoreError::Validation(message));
        }
        Ok(self.draft.clone())
    }

    /// Record the service outcome of a submission started with
    /// [`begin_submit`](Self::begin_submit).
    pub fn finish_submit<T>(&mut self, result: ApiResult<T>, failure_message: &str) -> CoreResult<T> {
        result.map_err(|e| {
            self.mark_failed(failure_message);
            CoreError::Api(e)
        })
    }

    /// Gate, send a copy of the draft through `action`, record the outcome.
    pub async fn submit<T, F, Fut>(&mut self, failure_message: &str, action: F) -> CoreResult<T>
    where
        F: FnOnce(D) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let draft = self.begin_submit()?;
        let result = action(draft).await;
        self.finish_submit(result, failure_message)
    }

    /// [`submit`](Self::submit), then hand the successful result to `on_success`.
    pub async fn submit_with<T, F, Fut, C>(
        &mut self,
        failure_message: &str,
        action: F,
        on_success: C,
    ) -> CoreResult<T>
    where
        F: FnOnce(D) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
        C: FnOnce(&T),
    {
        let value = self.submit(failure_message, action).await?;
        on_success(&value);
        Ok(value)
    }
}
