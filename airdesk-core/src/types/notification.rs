//! User-facing toast notifications

use serde::{Deserialize, Serialize};

use crate::i18n::ResourceTexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Operation a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Fetch,
    Load,
    Create,
    Update,
    Delete,
}

/// One toast.
///
/// Texts are static per operation; raw error details go to the log, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub operation: Operation,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    pub fn success(operation: Operation, texts: &ResourceTexts) -> Self {
        let title = match operation {
            Operation::Create => texts.created,
            Operation::Update => texts.updated,
            Operation::Delete => texts.deleted,
            Operation::Fetch | Operation::Load => texts.loaded,
        };
        Self {
            kind: NotificationKind::Success,
            operation,
            title: title.to_string(),
            description: None,
        }
    }

    pub fn error(operation: Operation, texts: &ResourceTexts) -> Self {
        let (title, description) = match operation {
            Operation::Fetch => (texts.fetch_failed, Some(texts.fetch_failed_description)),
            Operation::Load => (texts.load_failed, None),
            Operation::Create => (texts.create_failed, None),
            Operation::Update => (texts.update_failed, None),
            Operation::Delete => (texts.delete_failed, None),
        };
        Self {
            kind: NotificationKind::Error,
            operation,
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{texts, Language};

    #[test]
    fn fetch_error_carries_description() {
        let n = Notification::error(Operation::Fetch, &texts(Language::PtBr).users);
        assert!(n.is_error());
        assert_eq!(n.title, "Falha ao buscar usuários!");
        assert_eq!(
            n.description.as_deref(),
            Some("Ocorreu um erro ao buscar os usuários.")
        );
    }

    #[test]
    fn create_success_title() {
        let n = Notification::success(Operation::Create, &texts(Language::PtBr).flights);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.title, "Voo criado com sucesso!");
        assert!(n.description.is_none());
    }
}
