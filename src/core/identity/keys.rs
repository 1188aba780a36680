// State-key namespacing.
//
// Issued records live under the caller-supplied id, verbatim. Internal
// records use a composite key with a U+0000 namespace prefix, which a
// caller-supplied id can never collide with.

pub const REVOCATION_NAMESPACE: &str = "revocation";

pub fn revocation_key(id: &str) -> String {
    format!("\u{0}{REVOCATION_NAMESPACE}\u{0}{id}")
}
