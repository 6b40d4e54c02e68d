//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache configuration.
///
/// Serialized with the TTL as an integer number of milliseconds:
///
/// ```json
/// { "ttl_ms": 30000 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Default TTL for entries without an explicit expiry. Zero disables it.
    #[serde(rename = "ttl_ms", with = "duration_ms")]
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a configuration whose entries never expire by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns true if entries get a default expiration.
    pub fn expires(&self) -> bool {
        !self.ttl.is_zero()
    }
}

mod duration_ms {
    use std::fmt;
    use std::time::Duration;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    /// Rounds up to whole milliseconds so a non-zero TTL never encodes as zero.
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    /// Accepts the full `i64` and `u64` ranges. Negative values decode as zero,
    /// which disables expiration.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        deserializer.deserialize_i64(MillisVisitor)
    }

    struct MillisVisitor;

    impl<'de> Visitor<'de> for MillisVisitor {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer number of milliseconds")
        }

        fn visit_i64<E: de::Error>(self, millis: i64) -> Result<Duration, E> {
            Ok(u64::try_from(millis).map_or(Duration::ZERO, Duration::from_millis))
        }

        fn visit_u64<E: de::Error>(self, millis: u64) -> Result<Duration, E> {
            Ok(Duration::from_millis(millis))
        }
    }
}
