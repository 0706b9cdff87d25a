//! Client-side view of one server page

use serde::{Deserialize, Serialize};

use airdesk_api::{PageResponse, Record};

/// Records of the current page plus the server-reported pagination.
///
/// `page_index < total_pages` whenever `total_pages > 0`. Local edits
/// (append, replace, remove) never touch `total_pages`; the count is only
/// refreshed by the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow<R> {
    /// Records of the current page, in server order.
    pub items: Vec<R>,
    /// 0-based index of the page shown.
    pub page_index: u32,
    /// Server-reported page count as of the last fetch.
    pub total_pages: u32,
}

impl<R> Default for PageWindow<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> PageWindow<R> {
    /// Window shown before the first fetch completes.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            total_pages: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `page` may be requested given the last known page count.
    ///
    /// Before any page is known (`total_pages == 0`) every page is accepted.
    pub fn accepts_page(&self, page: u32) -> bool {
        self.total_pages == 0 || page < self.total_pages
    }
}

impl<R: Record> PageWindow<R> {
    /// Window taken from a server page.
    ///
    /// A reported `number` outside `[0, total_pages)` is clamped to the last page.
    pub fn from_response(response: PageResponse<R>) -> Self {
        let mut page_index = response.number;
        if response.total_pages > 0 && page_index >= response.total_pages {
            log::warn!(
                "Server reported page {} of {}, clamping",
                page_index,
                response.total_pages
            );
            page_index = response.total_pages - 1;
        }
        Self {
            items: response.content,
            page_index,
            total_pages: response.total_pages,
        }
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Add a created record at the end.
    ///
    /// A record whose id is already shown replaces that entry instead, so each
    /// id appears once.
    pub fn append(&mut self, record: R) {
        if !self.replace(record.clone()) {
            self.items.push(record);
        }
    }

    /// Replace the entry with the same id in place. Returns `false` when absent.
    pub fn replace(&mut self, record: R) -> bool {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Drop the entry with `id`. Returns `false` when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(Record::id).collect()
    }
}
