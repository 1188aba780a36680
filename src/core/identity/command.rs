// Command data types for the identity transaction functions.
//
// Purpose
// - Express the intent to anchor an identifier/hash pair, or to revoke a
//   previously anchored identifier.
//
// Responsibilities
// - Carry input data for the handlers.
// - Be independent of transport layer details (not tied to HTTP).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueId {
    pub id: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeId {
    pub id: String,
    pub revoked_at: i64,
    pub reason: Option<String>,
}
