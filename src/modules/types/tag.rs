//! Ad hoc filter tag keys and values

use serde::{Deserialize, Serialize};

/// A tag key offered for ad hoc filtering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagKey(pub String);

/// A value available for one tag key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagValue(pub String);

impl TagKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TagValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
