// crates/shared-kernel/src/value_objects/lossy_path.rs
//! Serde adapter writing a path as a string, replacing bytes that are not
//! valid UTF-8 with U+FFFD.
//!
//! Filenames on disk are arbitrary bytes, but the wire format is JSON, so a
//! listing must never fail just because one name does not decode.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S, P>(path: P, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    P: AsRef<Path>,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(PathBuf::from)
}
