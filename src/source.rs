//! Mapping loaders for the two inputs.
//!
//! Both inputs decode the same way: raw bytes, UTF-8 text, a JSON value,
//! then a top-level object check. The origin travels with every failure.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str;

use serde_json::Value;

use crate::error::{MergeError, MergeResult, Origin};

/// An insertion-ordered JSON object.
///
/// `serde_json`'s map preserves insertion order here (`preserve_order`),
/// so merged output keeps the base mapping's key positions.
pub type Mapping = serde_json::Map<String, Value>;

/// Read a mapping from a generic reader, draining it to EOF.
pub fn read_mapping<R: Read>(reader: &mut R, origin: Origin) -> MergeResult<Mapping> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|err| MergeError::Read {
        origin: origin.clone(),
        err,
    })?;
    parse_mapping(&bytes, origin)
}

/// Read a mapping from a file.
///
/// The file handle lives only inside the `fs::read` call; it is closed
/// before this function returns, whether the read succeeds or fails.
pub fn load_mapping(path: &Path) -> MergeResult<Mapping> {
    let origin = Origin::File(path.to_path_buf());
    let bytes = fs::read(path).map_err(|err| MergeError::Read {
        origin: origin.clone(),
        err,
    })?;
    parse_mapping(&bytes, origin)
}

/// Decode bytes into a mapping: UTF-8, then JSON, then the object check.
fn parse_mapping(bytes: &[u8], origin: Origin) -> MergeResult<Mapping> {
    let text = str::from_utf8(bytes).map_err(|err| MergeError::InvalidUtf8 {
        origin: origin.clone(),
        err,
    })?;

    let value: Value = serde_json::from_str(text).map_err(|err| MergeError::InvalidJson {
        origin: origin.clone(),
        err,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(MergeError::NotAnObject {
            origin,
            actual: json_type_name(&other),
        }),
    }
}

/// Name of a JSON value's type, for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_valid_object() {
        let mut input = &b"{\"a\": 1, \"b\": {\"nested\": true}}"[..];
        let map = read_mapping(&mut input, Origin::Stdin).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"]["nested"], true);
    }

    #[test]
    fn test_read_empty_object() {
        let mut input = &b"{}"[..];
        let map = read_mapping(&mut input, Origin::Stdin).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_reject_malformed_json() {
        let mut input = &b"not json"[..];
        let err = read_mapping(&mut input, Origin::Stdin).unwrap_err();
        assert!(matches!(err, MergeError::InvalidJson { .. }));
        assert!(err.to_string().contains("standard input"));
    }

    #[test]
    fn test_reject_trailing_garbage() {
        let mut input = &b"{\"a\": 1} trailing"[..];
        let err = read_mapping(&mut input, Origin::Stdin).unwrap_err();
        assert!(matches!(err, MergeError::InvalidJson { .. }));
    }

    #[test]
    fn test_reject_top_level_array() {
        let mut input = &b"[1, 2, 3]"[..];
        let err = read_mapping(&mut input, Origin::Stdin).unwrap_err();
        match err {
            MergeError::NotAnObject { actual, .. } => assert_eq!(actual, "array"),
            other => panic!("expected NotAnObject, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_top_level_scalar() {
        for doc in ["42", "\"text\"", "true", "null"] {
            let mut input = doc.as_bytes();
            let err = read_mapping(&mut input, Origin::Stdin).unwrap_err();
            assert!(
                matches!(err, MergeError::NotAnObject { .. }),
                "top-level {} must be rejected",
                doc
            );
        }
    }

    #[test]
    fn test_reject_invalid_utf8() {
        let mut input = &b"{\"a\": \"\xff\xfe\"}"[..];
        let err = read_mapping(&mut input, Origin::Stdin).unwrap_err();
        assert!(matches!(err, MergeError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        let err = load_mapping(&path).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
        assert!(err.to_string().contains("a.json"));
    }

    #[test]
    fn test_load_file_preserves_key_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, r#"{"z": 1, "m": 2, "a": 3}"#).unwrap();

        let map = load_mapping(&path).unwrap();
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }
}
