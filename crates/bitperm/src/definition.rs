use std::borrow::Cow;

use bitperm_mask::Bitable;
use serde::{Deserialize, Serialize};

/// A named permission and the bits it occupies.
///
/// Values are expected to be a single bit, or zero for a bypass flag, but
/// nothing enforces it. See [`check_table`](crate::check_table).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionDefinition {
    pub value: u64,
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl PermissionDefinition {
    /// Create a definition from borrowed static strings.
    pub const fn new(
        value: u64,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
        }
    }

    /// Create a definition that owns its strings.
    pub fn owned(
        value: u64,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value,
            name: Cow::Owned(name.into()),
            description: Cow::Owned(description.into()),
        }
    }
}

impl Bitable for PermissionDefinition {
    #[inline]
    fn bits(&self) -> u64 {
        self.value
    }
}
