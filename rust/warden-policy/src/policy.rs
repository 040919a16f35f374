use crate::entity::bare_type_name;
use crate::{Check, DecisionOracle, ProxyTable, Resource};

/// A policy type whose capability checks resolve into permission keys.
///
/// Every method has a default, so the minimal policy is an empty impl: its
/// type name (with a trailing `Policy` suffix stripped) seeds subject
/// derivation, it declares no proxies, and every capability falls through to
/// key derivation.
pub trait Policy<A> {
    /// Alias table consulted when an unresolved capability is dispatched.
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new()
    }

    /// Explicit permission-subject override. When set, subject derivation is
    /// skipped entirely and this value is used for every check.
    fn subject(&self) -> Option<String> {
        None
    }

    /// Bare name of this policy type, used to derive the subject when no
    /// resource is supplied. The resolver strips a trailing `Policy` suffix
    /// before derivation.
    fn policy_name(&self) -> &str {
        bare_type_name(std::any::type_name_of_val(self))
    }

    /// Explicitly defined capability handlers.
    ///
    /// Runs before proxy lookup at every dispatch level, so a handler
    /// defined for a proxy target is honored when an alias re-dispatches to
    /// it. Return `None` to fall through to key derivation.
    #[allow(unused_variables)]
    fn handle<O>(
        &self,
        check: &mut Check<'_, A, Self, O>,
        capability: &str,
        actor: &A,
        resource: Resource<'_>,
    ) -> Option<bool>
    where
        Self: Sized,
        O: DecisionOracle<A>,
    {
        None
    }
}

/// Strip the conventional `Policy` suffix from a policy type name.
///
/// A type named exactly `Policy` keeps its name rather than deriving an
/// empty subject.
pub(crate) fn strip_policy_suffix(name: &str) -> &str {
    match name.strip_suffix("Policy") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
