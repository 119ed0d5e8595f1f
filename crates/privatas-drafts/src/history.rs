use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use privatas_core::constants::SANITIZED_FILE_PREFIX;

use crate::document::DraftDocument;

/// A sent document, kept so the sanitized text can be downloaded later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub file_name: String,
    pub file_size: u64,
    pub sanitized_file_name: String,
    pub sanitized_content: String,
    pub original_file_type: String,
}

impl HistoryItem {
    /// Snapshot a draft's current display text at send time.
    pub fn from_draft(draft: DraftDocument, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            sanitized_file_name: draft.name.clone(),
            file_name: draft.name,
            file_size: draft.size,
            sanitized_content: draft.display_content,
            original_file_type: draft.media_type,
        }
    }

    /// `sanitized-<stem>.txt`, where the stem drops only the last extension.
    pub fn download_name(&self) -> String {
        let stem = self
            .file_name
            .rsplit_once('.')
            .map_or(self.file_name.as_str(), |(stem, _)| stem);
        format!("{SANITIZED_FILE_PREFIX}{stem}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> HistoryItem {
        HistoryItem {
            id: "h".to_string(),
            timestamp: Utc::now(),
            file_name: name.to_string(),
            file_size: 0,
            sanitized_file_name: name.to_string(),
            sanitized_content: String::new(),
            original_file_type: "text/plain".to_string(),
        }
    }

    #[test]
    fn download_name_drops_last_extension() {
        assert_eq!(item("report.pdf").download_name(), "sanitized-report.txt");
        assert_eq!(
            item("archive.tar.gz").download_name(),
            "sanitized-archive.tar.txt"
        );
    }

    #[test]
    fn download_name_without_extension_keeps_name() {
        assert_eq!(item("README").download_name(), "sanitized-README.txt");
    }
}
