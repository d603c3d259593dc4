use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Availability of a file record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Queued for a later run; not yet downloadable
    Scheduled,
    /// Ready to be downloaded
    Available,
}

impl FileStatus {
    /// Status text as shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Scheduled => "scheduled",
            FileStatus::Available => "available",
        }
    }
}

/// Wire shape of a dataset entry. The id is never supplied by the source;
/// it is assigned client-side during the load.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub device: String,
    pub path: String,
    pub status: FileStatus,
}

/// One row of the grid; immutable once loaded. The dataset is only ever
/// replaced wholesale, never patched in place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileRecord {
    /// Derived identifier, unique within one dataset load
    pub id: String,
    pub name: String,
    pub device: String,
    pub path: String,
    pub status: FileStatus,
}

/// Ids of every record currently downloadable.
pub fn available_ids(records: &[FileRecord]) -> HashSet<&str> {
    records
        .iter()
        .filter(|r| r.status == FileStatus::Available)
        .map(|r| r.id.as_str())
        .collect()
}

/// The download gate: true only when something is selected and every
/// selected id resolves to an available record.
pub fn download_enabled(records: &[FileRecord], selected: &[String]) -> bool {
    let available = available_ids(records);
    !selected.is_empty() && selected.iter().all(|id| available.contains(id.as_str()))
}

/// Resolves the selected ids against the live dataset, in dataset order.
pub fn selected_records<'a>(records: &'a [FileRecord], selected: &[String]) -> Vec<&'a FileRecord> {
    records
        .iter()
        .filter(|r| selected.iter().any(|id| id == &r.id))
        .collect()
}

/// JSON payload for the download acknowledgment dialog. Returns `None`
/// when the gate rejects the current selection, so invoking the action
/// while disabled serializes nothing.
pub fn download_payload(records: &[FileRecord], selected: &[String]) -> Option<String> {
    if !download_enabled(records, selected) {
        return None;
    }
    serde_json::to_string_pretty(&selected_records(records, selected)).ok()
}
