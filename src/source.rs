use rust_embed::RustEmbed;
use thiserror::Error;

use crate::ident::unique_id;
use crate::model::{FileRecord, RawRecord};

/// Static assets bundled into the binary: the sample dataset and UI icons.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

/// The one failure taxonomy of the app: a dataset load going wrong.
/// Transport, parse, and missing-asset causes are not distinguished by the
/// caller; all of them are logged and swallowed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("asset not found: {0}")]
    MissingAsset(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Capability for fetching the raw dataset, injected so the grid logic can
/// be exercised without a network or an embedded bundle.
pub trait DataSource {
    fn fetch(&self, resource: &str) -> Result<Vec<RawRecord>, LoadError>;
}

/// Production source: absolute `http(s)://` resources are fetched over the
/// network, anything else is looked up among the embedded assets.
pub struct StaticSource;

impl DataSource for StaticSource {
    fn fetch(&self, resource: &str) -> Result<Vec<RawRecord>, LoadError> {
        let bytes = if resource.starts_with("http://") || resource.starts_with("https://") {
            reqwest::blocking::get(resource)?
                .error_for_status()?
                .bytes()?
                .to_vec()
        } else {
            Asset::get(resource)
                .ok_or_else(|| LoadError::MissingAsset(resource.to_string()))?
                .data
                .into_owned()
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Fetches `resource` and turns each raw entry into a [`FileRecord`],
/// deriving the id from the entry's name and its positional index in the
/// fetched sequence.
pub fn load_records(source: &dyn DataSource, resource: &str) -> Result<Vec<FileRecord>, LoadError> {
    let raw = source.fetch(resource)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, item)| FileRecord {
            id: unique_id(&item.name, index),
            name: item.name,
            device: item.device,
            path: item.path,
            status: item.status,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileStatus;

    /// In-memory source backed by a fixed JSON body.
    struct FixedSource(&'static str);

    impl DataSource for FixedSource {
        fn fetch(&self, _resource: &str) -> Result<Vec<RawRecord>, LoadError> {
            Ok(serde_json::from_str(self.0)?)
        }
    }

    #[test]
    fn load_assigns_positional_ids_and_preserves_order() {
        let source = FixedSource(
            r#"[
                {"name":"smss.exe","device":"Mario","path":"p1","status":"scheduled"},
                {"name":"netsh.exe","device":"Luigi","path":"p2","status":"available"},
                {"name":"smss.exe","device":"Peach","path":"p3","status":"available"}
            ]"#,
        );
        let records = load_records(&source, "sample.json").unwrap();
        assert_eq!(records.len(), 3);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        // duplicate names stay unique thanks to the positional index
        assert_eq!(ids, ["smss.exe-0", "netsh.exe-1", "smss.exe-2"]);
        assert_eq!(records[1].status, FileStatus::Available);
        assert_eq!(records[1].device, "Luigi");
    }

    #[test]
    fn malformed_payloads_surface_as_a_load_error() {
        let source = FixedSource("not json at all");
        let err = load_records(&source, "sample.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn unknown_embedded_resources_are_a_missing_asset_error() {
        let err = load_records(&StaticSource, "no-such-file.json").unwrap_err();
        assert!(matches!(err, LoadError::MissingAsset(_)));
    }

    #[test]
    fn the_shipped_sample_dataset_loads() {
        let records = load_records(&StaticSource, "sample.json").unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].id, "smss.exe-0");
        assert_eq!(records[0].status, FileStatus::Scheduled);
        assert_eq!(records[2].status, FileStatus::Available);
    }
}
