// Stored record: RevocationRecord.
//
// Purpose
// - Record the fact that an anchored identifier was revoked, with the
//   timestamp and an optional operator-supplied reason.
//
// Versioning and evolution
// - Prefer additive changes. For a breaking change, add RevocationV2 in a
//   new variant and keep deserializing historical records.
//
// Timestamps
// - All i64 values use epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RevocationRecord {
    RevocationV1(RevocationV1),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RevocationV1 {
    pub revoked_at: i64,
    pub reason: Option<String>,
}
