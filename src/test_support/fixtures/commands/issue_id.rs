// Shared test fixture for the IssueId command.
//
// The canonical values live in a JSON file so transport-shaped tests and
// command tests agree on one sample record.

use crate::core::identity::command::IssueId;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct IssueIdDto {
    pub id: String,
    pub hash: String,
}

pub struct IssueIdBuilder {
    inner: IssueId,
}

impl Default for IssueIdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IssueIdBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/issue_id.json").unwrap();
        let dto: IssueIdDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: IssueId {
                id: dto.id,
                hash: dto.hash,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn hash(mut self, v: impl Into<String>) -> Self {
        self.inner.hash = v.into();
        self
    }

    pub fn build(self) -> IssueId {
        self.inner
    }
}
