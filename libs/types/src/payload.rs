//! Wire payload reported by a source
//!
//! The JSON document served for each source looks like
//! `{ "camera_id": 1, "images": [ { "file_size": 2048 }, ... ] }`.
//! Fields not listed here are ignored so sources can add metadata to the
//! document or to individual images without breaking older pollers.

use serde::{Deserialize, Serialize};

use crate::errors::{PayloadError, RecordError};
use crate::record::SourceRecord;

/// One entry of the `images` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Signed on the wire so a negative size is reported as an invalid
    /// record instead of an unparseable document.
    #[serde(rename = "file_size")]
    pub size: i64,
}

/// Full document retrieved for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayload {
    #[serde(rename = "camera_id")]
    pub source_id: i64,
    #[serde(rename = "images")]
    pub entries: Vec<RawEntry>,
}

impl RawPayload {
    pub fn new(source_id: i64, sizes: impl IntoIterator<Item = i64>) -> Self {
        Self {
            source_id,
            entries: sizes.into_iter().map(|size| RawEntry { size }).collect(),
        }
    }

    /// Parse a payload from raw response bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PayloadError> {
        serde_json::from_slice(bytes).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Validate every entry, failing on the first negative size.
    pub fn to_records(&self) -> Result<Vec<SourceRecord>, RecordError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| SourceRecord::new(idx + 1, entry.size))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_format() {
        let json = br#"{"camera_id": 3, "images": [{"file_size": 10}, {"file_size": 20}]}"#;
        let payload = RawPayload::from_json(json).unwrap();
        assert_eq!(payload.source_id, 3);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.entries[1].size, 20);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = br#"{
            "camera_id": 1,
            "location": "north gate",
            "images": [{"file_size": 5, "taken_at": "2019-04-01T10:00:00Z"}]
        }"#;
        let payload = RawPayload::from_json(json).unwrap();
        assert_eq!(payload.entries, vec![RawEntry { size: 5 }]);
    }

    #[test]
    fn test_missing_images_is_malformed() {
        let err = RawPayload::from_json(br#"{"camera_id": 1}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
    }

    #[test]
    fn test_non_integer_size_is_malformed() {
        let json = br#"{"camera_id": 1, "images": [{"file_size": "big"}]}"#;
        assert!(RawPayload::from_json(json).is_err());
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = RawPayload::from_json(b"<html>502</html>").unwrap_err();
        assert!(err.to_string().starts_with("Malformed payload"));
    }

    #[test]
    fn test_negative_size_parses_but_fails_validation() {
        let json = br#"{"camera_id": 1, "images": [{"file_size": 4}, {"file_size": -1}]}"#;
        let payload = RawPayload::from_json(json).unwrap();
        let err = payload.to_records().unwrap_err();
        assert_eq!(err, RecordError::NegativeSize { position: 2, size: -1 });
    }

    #[test]
    fn test_to_records() {
        let payload = RawPayload::new(0, [1, 2, 3]);
        let records = payload.to_records().unwrap();
        let sizes: Vec<u64> = records.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
    }
}
