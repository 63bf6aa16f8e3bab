// crates/shared-kernel/src/value_objects/nanos.rs
//! Serde adapter encoding a [`Duration`] as signed integer nanoseconds.
//!
//! Remote callers send staleness thresholds in this form. Negative values are
//! clamped to zero; values beyond `i64::MAX` nanoseconds saturate on output.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Request {
//!     #[serde(with = "remote_index_shared_kernel::nanos")]
//!     rescan: Duration,
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let nanos = i64::try_from(value.as_nanos()).unwrap_or(i64::MAX);
    serializer.serialize_i64(nanos)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let nanos = i64::deserialize(deserializer)?;
    Ok(from_signed_nanos(nanos))
}

/// Converts signed nanoseconds into a [`Duration`], clamping negatives to zero.
fn from_signed_nanos(nanos: i64) -> Duration {
    u64::try_from(nanos).map(Duration::from_nanos).unwrap_or(Duration::ZERO)
}
