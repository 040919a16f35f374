/// External decision primitive: answers whether `actor` holds `key`.
///
/// The oracle is opaque to this crate - it may be backed by a database, an
/// in-memory grant table, or a remote service. The query is a single
/// synchronous boolean lookup; any `Err` it returns is caught by the
/// resolver and converted to a denial, never retried.
pub trait DecisionOracle<A> {
    /// Failure type surfaced by the oracle.
    type Error: std::fmt::Display;

    /// Whether `actor` holds the permission identified by `key`.
    fn check(&self, actor: &A, key: &str) -> Result<bool, Self::Error>;
}
