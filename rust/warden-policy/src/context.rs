/// Mutable state tracking which capability name the current check resolves.
///
/// A fresh context is created for each top-level check; proxy re-dispatch
/// re-enters the same context so the originally invoked name survives the
/// hop. Not thread-safe - one resolver instance serializes its checks.
#[derive(Debug, Clone, Default)]
pub(crate) struct CheckContext {
    /// The capability name as originally invoked (may be an alias). Set at
    /// top-level entry only.
    pub invoked_capability: Option<String>,
    /// The name used for key derivation when a proxy with `keep_base =
    /// false` overrode the invoked one. Cleared after each completed oracle
    /// query.
    pub resolved_capability: Option<String>,
    /// The alias name recorded when the invocation matched a proxy entry.
    pub invoked_proxy_alias: Option<String>,
}

impl CheckContext {
    /// Name the current check derives its permission key from.
    pub fn derivation_name(&self) -> Option<&str> {
        self.resolved_capability
            .as_deref()
            .or(self.invoked_capability.as_deref())
    }

    /// Name used when composing a proxied action: the overridden target if
    /// `keep_base` was false, otherwise the invoked alias.
    pub fn proxy_name(&self) -> Option<&str> {
        self.resolved_capability
            .as_deref()
            .or(self.invoked_proxy_alias.as_deref())
    }

    /// Clear all per-check state ahead of a top-level check.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
