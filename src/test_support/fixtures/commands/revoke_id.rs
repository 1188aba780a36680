// Shared test fixture for the RevokeId command.

use crate::core::identity::command::RevokeId;

pub struct RevokeIdBuilder {
    inner: RevokeId,
}

impl Default for RevokeIdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RevokeIdBuilder {
    pub fn new() -> Self {
        Self {
            inner: RevokeId {
                id: "ID-KE-2024-000123".to_string(),
                revoked_at: 1_700_000_000_000,
                reason: Some("document reported stolen".to_string()),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn revoked_at(mut self, v: i64) -> Self {
        self.inner.revoked_at = v;
        self
    }

    pub fn reason(mut self, v: Option<String>) -> Self {
        self.inner.reason = v;
        self
    }

    pub fn build(self) -> RevokeId {
        self.inner
    }
}

#[cfg(test)]
mod revoke_id_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RevokeIdBuilder::new()
            .id("ID-42")
            .revoked_at(42)
            .reason(None)
            .build();
        assert_eq!(custom.id, "ID-42");
        assert_eq!(custom.revoked_at, 42);
        assert_eq!(custom.reason, None);
    }
}
