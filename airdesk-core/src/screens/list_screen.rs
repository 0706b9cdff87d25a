//! Paginated CRUD list screen
//!
//! [`ListState`] is the plain, serializable state of one list screen and
//! holds every transition. [`ListScreen`] drives it against a
//! [`ResourceService`]: it stamps fetches with the screen generation, calls
//! the service without holding the state lock and applies the outcome.
//!
//! Mutations patch the current page in place. The page count only changes on
//! the next fetch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use airdesk_api::{
    ApiError, PageRequest, PageResponse, Record, ResourceService,
    DEFAULT_PAGE_SIZE,
};

use crate::error::{CoreError, CoreResult};
use crate::form::FormDraft;
use crate::i18n::{texts, Language, ResourceTexts};
use crate::traits::EditableFields;
use crate::types::{Notification, Operation, PageWindow};

/// Fetch phase of a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not mounted, or mounted with no fetch started yet
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Proof that a fetch was started; carries the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: u32,
}

/// Serializable state of one list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState<R> {
    pub phase: Phase,
    pub window: PageWindow<R>,
    /// Creation surface visible
    pub create_open: bool,
    /// Record open in the edit surface
    pub selected: Option<R>,
    pub mounted: bool,
    /// Bumped on every mount and unmount
    pub generation: u64,
    /// Queued toasts, oldest first
    pub notifications: Vec<Notification>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            window: PageWindow::empty(),
            create_open: false,
            selected: None,
            mounted: false,
            generation: 0,
            notifications: Vec::new(),
        }
    }
}

impl<R: Record> ListState<R> {
    /// Fresh mounted state. Anything still in flight from before goes stale.
    pub fn mount(&mut self) -> u64 {
        *self = Self {
            mounted: true,
            generation: self.generation + 1,
            ..Self::default()
        };
        self.generation
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.phase = Phase::Idle;
        self.create_open = false;
        self.selected = None;
    }

    /// Whether a completion started under `generation` may still apply.
    pub fn is_current(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Enter Loading for `page`.
    pub fn begin_fetch(&mut self, page: u32) -> CoreResult<FetchTicket> {
        if !self.mounted {
            return Err(CoreError::NotMounted);
        }
        if self.is_loading() {
            return Err(CoreError::FetchInFlight);
        }
        if !self.window.accepts_page(page) {
            return Err(CoreError::PageOutOfRange {
                page,
                total_pages: self.window.total_pages,
            });
        }
        self.phase = Phase::Loading;
        Ok(FetchTicket {
            generation: self.generation,
            page,
        })
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale.
    ///
    /// On failure the previous window stays and a notification is queued.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: CoreResult<PageResponse<R>>,
        texts: &ResourceTexts,
    ) -> bool {
        if !self.is_current(ticket.generation) {
            log::debug!(
                "Dropping stale fetch of page {} (generation {} != {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.phase = Phase::Ready;
        match result {
            Ok(response) => self.window = PageWindow::from_response(response),
            Err(_) => self.notify(Notification::error(Operation::Fetch, texts)),
        }
        true
    }

    /// Created record goes to the end of the current page; the surface closes.
    pub fn apply_created(&mut self, record: Option<R>, texts: &ResourceTexts) {
        if let Some(record) = record {
            self.window.append(record);
        }
        self.create_open = false;
        self.notify(Notification::success(Operation::Create, texts));
    }

    pub fn apply_updated(&mut self, record: R, texts: &ResourceTexts) {
        let id = record.id().to_string();
        if !self.window.replace(record) {
            log::debug!("Updated record {id} is not on the current page");
        }
        self.selected = None;
        self.notify(Notification::success(Operation::Update, texts));
    }

    pub fn apply_deleted(&mut self, id: &str, texts: &ResourceTexts) {
        self.window.remove(id);
        if self.selected.as_ref().is_some_and(|r| r.id() == id) {
            self.selected = None;
        }
        self.notify(Notification::success(Operation::Delete, texts));
    }

    /// Failed mutation: items untouched, surfaces stay as they are.
    pub fn apply_failure(&mut self, operation: Operation, texts: &ResourceTexts) {
        self.notify(Notification::error(operation, texts));
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    /// Open the edit surface on the record with `id` from the current page.
    pub fn select(&mut self, id: &str) -> CoreResult<R> {
        let record = self
            .window
            .find(id)
            .cloned()
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        self.selected = Some(record.clone());
        Ok(record)
    }

    pub fn close_edit(&mut self) {
        self.selected = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

/// Page size, sort field and language of a list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenOptions {
    pub page_size: u32,
    pub sort: String,
    pub language: Language,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: "id".to_string(),
            language: Language::default(),
        }
    }
}

impl ScreenOptions {
    pub fn sorted_by(sort: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn request(&self, page: u32) -> PageRequest {
        PageRequest::new(page, self.page_size, self.sort.clone())
    }
}

fn log_failure(resource: &str, action: &str, err: &ApiError) {
    if err.is_expected() {
        log::warn!("[{resource}] {action} failed: {err}");
    } else {
        log::error!("[{resource}] {action} failed: {err}");
    }
}

/// One list screen bound to a resource service.
///
/// Cheap to clone; clones share the same state.
pub struct ListScreen<S: ResourceService> {
    service: Arc<S>,
    state: Arc<Mutex<ListState<S::Record>>>,
    options: ScreenOptions,
}

impl<S: ResourceService> Clone for ListScreen<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            options: self.options.clone(),
        }
    }
}

impl<S: ResourceService> ListScreen<S> {
    /// Unmounted screen.
    pub fn new(service: Arc<S>, options: ScreenOptions) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(ListState::default())),
            options,
        }
    }

    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    fn texts(&self) -> &'static ResourceTexts {
        texts(self.options.language).resource(self.service.resource())
    }

    /// Generation of the mounted screen, or `NotMounted`.
    async fn current_generation(&self) -> CoreResult<u64> {
        let state = self.state.lock().await;
        if !state.mounted {
            return Err(CoreError::NotMounted);
        }
        Ok(state.generation)
    }

    /// Mount and fetch the first page.
    pub async fn mount(&self) -> CoreResult<()> {
        self.mount_at(0).await
    }

    /// Mount and fetch `page`. The page count is unknown yet, so any page is accepted.
    pub async fn mount_at(&self, page: u32) -> CoreResult<()> {
        let generation = self.state.lock().await.mount();
        log::debug!("[{}] Mounted (generation {generation})", self.service.resource());
        self.change_page(page).await
    }

    /// Leave the screen. Completions still in flight become no-ops.
    pub async fn unmount(&self) {
        self.state.lock().await.unmount();
        log::debug!("[{}] Unmounted", self.service.resource());
    }

    /// Fetch `page` and show it.
    ///
    /// Rejected with `FetchInFlight` while another fetch runs, without calling
    /// the service. A server page past its own `totalPages` counts as a failed
    /// fetch.
    pub async fn change_page(&self, page: u32) -> CoreResult<()> {
        let ticket = self.state.lock().await.begin_fetch(page)?;
        let resource = self.service.resource();

        let result = self
            .service
            .list(&self.options.request(page))
            .await
            .map_err(CoreError::from)
            .and_then(|response| {
                if response.total_pages > 0 && response.number >= response.total_pages {
                    Err(CoreError::PageOutOfRange {
                        page,
                        total_pages: response.total_pages,
                    })
                } else {
                    Ok(response)
                }
            });
        let failure = result.as_ref().err().cloned();

        let applied = self
            .state
            .lock()
            .await
            .finish_fetch(ticket, result, self.texts());

        match failure {
            Some(e) => {
                if e.is_expected() {
                    log::warn!("[{resource}] Fetch of page {page} failed: {e}");
                } else {
                    log::error!("[{resource}] Fetch of page {page} failed: {e}");
                }
                Err(e)
            }
            None => {
                if applied {
                    log::info!("[{resource}] Showing page {page}");
                }
                Ok(())
            }
        }
    }

    /// Open the creation surface with an empty draft.
    pub async fn open_create(&self) -> FormDraft<S::Draft>
    where
        S::Draft: EditableFields + Default,
    {
        self.state.lock().await.open_create();
        FormDraft::default().with_language(self.options.language)
    }

    pub async fn close_create(&self) {
        self.state.lock().await.close_create();
    }

    /// Submit the creation form.
    ///
    /// A record echoed by the server is appended to the current page; an empty
    /// answer leaves the items as they are. The creation surface closes on
    /// success and stays open on failure.
    pub async fn submit_create(
        &self,
        form: &mut FormDraft<S::Draft>,
    ) -> CoreResult<Option<S::Record>>
    where
        S::Draft: EditableFields,
    {
        let generation = self.current_generation().await?;
        let draft = form.begin_submit()?;
        let resource = self.service.resource();
        let texts = self.texts();

        let result = self.service.create(&draft).await;

        let mut state = self.state.lock().await;
        if !state.is_current(generation) {
            log::debug!("[{resource}] Create finished after unmount, ignoring");
            drop(state);
            return form.finish_submit(result, texts.create_failed);
        }
        match &result {
            Ok(created) => {
                state.apply_created(created.clone(), texts);
                match created {
                    Some(r) => log::info!("[{resource}] Created {}", r.id()),
                    None => log::info!("[{resource}] Created (no record returned)"),
                }
            }
            Err(e) => {
                state.apply_failure(Operation::Create, texts);
                log_failure(resource, "Create", e);
            }
        }
        drop(state);
        form.finish_submit(result, texts.create_failed)
    }

    /// Open the edit surface on a record of the current page.
    pub async fn select_for_edit(&self, id: &str) -> CoreResult<FormDraft<S::Record>>
    where
        S::Record: EditableFields,
    {
        let record = self.state.lock().await.select(id)?;
        Ok(FormDraft::new(record).with_language(self.options.language))
    }

    /// Open the edit surface on a record that need not be on the current page.
    pub async fn select_record(&self, record: S::Record) -> FormDraft<S::Record>
    where
        S::Record: EditableFields,
    {
        self.state.lock().await.selected = Some(record.clone());
        FormDraft::new(record).with_language(self.options.language)
    }

    pub async fn close_edit(&self) {
        self.state.lock().await.close_edit();
    }

    /// Submit the edit form for the selected record.
    ///
    /// On success the page entry with the same id is replaced and the edit
    /// surface closes.
    pub async fn submit_update(&self, form: &mut FormDraft<S::Record>) -> CoreResult<S::Record>
    where
        S::Record: EditableFields,
    {
        let (generation, selected_id) = {
            let state = self.state.lock().await;
            if !state.mounted {
                return Err(CoreError::NotMounted);
            }
            let selected = state.selected.as_ref().ok_or(CoreError::NothingSelected)?;
            (state.generation, selected.id().to_string())
        };
        if form.draft().id() != selected_id {
            return Err(CoreError::Validation(format!(
                "form holds record {} but {selected_id} is selected",
                form.draft().id()
            )));
        }

        let record = form.begin_submit()?;
        let resource = self.service.resource();
        let texts = self.texts();

        let result = self.service.update(&record).await;

        let mut state = self.state.lock().await;
        if !state.is_current(generation) {
            log::debug!("[{resource}] Update finished after unmount, ignoring");
        } else if let Err(e) = &result {
            state.apply_failure(Operation::Update, texts);
            log_failure(resource, "Update", e);
        } else {
            state.apply_updated(record.clone(), texts);
            log::info!("[{resource}] Updated {selected_id}");
        }
        drop(state);
        form.finish_submit(result, texts.update_failed)
            .map(|()| record)
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        let generation = self.current_generation().await?;
        let resource = self.service.resource();
        let texts = self.texts();

        let result = self.service.delete(id).await;

        let mut state = self.state.lock().await;
        let current = state.is_current(generation);
        match result {
            Ok(()) => {
                if current {
                    state.apply_deleted(id, texts);
                }
                log::info!("[{resource}] Deleted {id}");
                Ok(())
            }
            Err(e) => {
                if current {
                    state.apply_failure(Operation::Delete, texts);
                }
                log_failure(resource, "Delete", &e);
                Err(e.into())
            }
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ListState<S::Record> {
        self.state.lock().await.clone()
    }

    pub async fn window(&self) -> PageWindow<S::Record> {
        self.state.lock().await.window.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.state.lock().await.take_notifications()
    }
}
