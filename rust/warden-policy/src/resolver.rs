use std::marker::PhantomData;

use warden_naming::{
    NamingRules, action_from_method_name, compose_key, proxied_action, subject_from_type_name,
};

use crate::context::CheckContext;
use crate::policy::strip_policy_suffix;
use crate::{
    DecisionOracle, Policy, Principal, ProxyTable, ProxyTarget, Resource, WardenPolicyError,
};

/// Upper bound on proxy re-dispatch depth. A cyclic alias table denies
/// instead of overflowing the stack.
const MAX_PROXY_HOPS: usize = 8;

/// Per-policy capability resolver.
///
/// One resolver corresponds to one policy type: it owns the policy, the
/// decision oracle, the naming rules, and the memoized permission subject.
/// [`check`](Resolver::check) is the single entry point the surrounding
/// framework routes unresolved capability names into.
///
/// Checks against one resolver must be serialized; the memoized subject and
/// the per-check context are not thread-safe shared state.
pub struct Resolver<A, P, O> {
    policy: P,
    oracle: O,
    rules: NamingRules,
    proxies: ProxyTable,
    subject: Option<String>,
    context: CheckContext,
    _actor: PhantomData<fn(&A)>,
}

impl<A, P, O> Resolver<A, P, O>
where
    A: Principal,
    P: Policy<A>,
    O: DecisionOracle<A>,
{
    /// Create a resolver for `policy`, querying `oracle` with keys derived
    /// under `rules`.
    ///
    /// The policy's proxy table and subject override are read once here and
    /// held for the resolver's lifetime.
    pub fn new(policy: P, oracle: O, rules: NamingRules) -> Self {
        let proxies = policy.proxies();
        let subject = policy.subject();

        Self {
            policy,
            oracle,
            rules,
            proxies,
            subject,
            context: CheckContext::default(),
            _actor: PhantomData,
        }
    }

    /// Resolve an unresolved capability name into a permission decision.
    ///
    /// The actor is validated first: an unauthenticated principal is a
    /// caller bug and propagates as
    /// [`WardenPolicyError::InvalidActor`]. Every failure past that point
    /// fails closed - the check returns `Ok(false)` rather than surfacing
    /// oracle or configuration defects.
    pub fn check(
        &mut self,
        capability: &str,
        actor: &A,
        resource: Resource<'_>,
    ) -> Result<bool, WardenPolicyError> {
        self.context.reset();

        let mut check = Check {
            policy: &self.policy,
            oracle: &self.oracle,
            rules: &self.rules,
            proxies: &self.proxies,
            subject: &mut self.subject,
            context: &mut self.context,
            depth: 0,
            _actor: PhantomData,
        };
        check.dispatch(capability, actor, resource)
    }

    /// The policy this resolver checks against.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The decision oracle queried by this resolver.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The naming rules governing key derivation.
    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }
}

/// A capability check in progress.
///
/// Handed to [`Policy::handle`] so custom handlers can delegate back into
/// the evaluation machinery via [`evaluate`](Check::evaluate) and
/// [`evaluate_proxied`](Check::evaluate_proxied).
pub struct Check<'c, A, P, O> {
    policy: &'c P,
    oracle: &'c O,
    rules: &'c NamingRules,
    proxies: &'c ProxyTable,
    subject: &'c mut Option<String>,
    context: &'c mut CheckContext,
    depth: usize,
    _actor: PhantomData<fn(&A)>,
}

impl<A, P, O> Check<'_, A, P, O>
where
    A: Principal,
    P: Policy<A>,
    O: DecisionOracle<A>,
{
    /// Dispatch one capability name: custom handler, then proxy re-dispatch,
    /// then key derivation.
    fn dispatch(
        &mut self,
        capability: &str,
        actor: &A,
        resource: Resource<'_>,
    ) -> Result<bool, WardenPolicyError> {
        if !actor.is_authenticated() {
            return Err(WardenPolicyError::InvalidActor);
        }

        // The originally invoked name survives proxy re-dispatch.
        if self.context.invoked_capability.is_none() {
            self.context.invoked_capability = Some(capability.to_string());
        }

        let policy = self.policy;
        if let Some(granted) = policy.handle(self, capability, actor, resource) {
            return Ok(granted);
        }

        if let Some(ProxyTarget { target, keep_base }) = self.proxies.resolve(capability).cloned() {
            if self.depth >= MAX_PROXY_HOPS {
                tracing::warn!(
                    capability,
                    limit = MAX_PROXY_HOPS,
                    "proxy chain exceeded the re-dispatch limit; denying"
                );
                return Ok(false);
            }

            if !keep_base {
                self.context.resolved_capability = Some(target.clone());
            }
            self.context.invoked_proxy_alias = Some(capability.to_string());
            self.depth += 1;

            // Logical re-entry: the target goes through the same machinery
            // so nested proxy chains and handlers defined for it apply.
            return self.dispatch(&target, actor, resource);
        }

        Ok(self.evaluate(actor, None, resource))
    }

    /// Evaluate a permission check, failing closed.
    ///
    /// When `action` is `None` it is re-derived from the capability name the
    /// context remembers for the current check. Any internal failure -
    /// subject resolution, a missing call context, the oracle - is logged
    /// and converted to a denial.
    pub fn evaluate(&mut self, actor: &A, action: Option<&str>, resource: Resource<'_>) -> bool {
        match self.try_evaluate(actor, action, resource) {
            Ok(granted) => granted,
            Err(error) => {
                tracing::debug!(%error, "permission check failed; denying");
                false
            }
        }
    }

    /// Evaluate a check whose action combines the proxy name with `action`.
    ///
    /// Requires that the current check was reached via proxy dispatch (or
    /// that the alias table overrode the derivation name); denies otherwise.
    pub fn evaluate_proxied(&mut self, actor: &A, action: &str, resource: Resource<'_>) -> bool {
        let Some(proxy_name) = self.context.proxy_name() else {
            tracing::debug!(action, "no proxy alias recorded for proxied check; denying");
            return false;
        };

        let combined = proxied_action(proxy_name, action, self.rules);
        self.evaluate(actor, Some(&combined), resource)
    }

    fn try_evaluate(
        &mut self,
        actor: &A,
        action: Option<&str>,
        resource: Resource<'_>,
    ) -> Result<bool, WardenPolicyError> {
        let action = match action {
            Some(action) => action.to_string(),
            None => {
                let name = self
                    .context
                    .derivation_name()
                    .ok_or(WardenPolicyError::MissingCallContext)?;
                action_from_method_name(name, self.rules)
            }
        };

        let subject = self.resolve_subject(resource)?;
        let key = compose_key(&subject, &action, self.rules);

        let granted = self
            .oracle
            .check(actor, &key)
            .map_err(|reason| WardenPolicyError::Oracle {
                key: key.clone(),
                reason: reason.to_string(),
            })?;

        // Supports re-entrant checks within the same resolver instance.
        self.context.resolved_capability = None;

        Ok(granted)
    }

    /// Resolve the permission subject for this check.
    ///
    /// An explicit [`Resource::Subject`] wins verbatim and is never cached.
    /// Otherwise the memoized subject (seeded by the policy's override, if
    /// any) is used; on first derivation the raw name comes from the entity
    /// or from the policy type name with its `Policy` suffix stripped.
    fn resolve_subject(&mut self, resource: Resource<'_>) -> Result<String, WardenPolicyError> {
        if let Resource::Subject(subject) = resource {
            return Ok(subject.to_string());
        }

        if let Some(cached) = self.subject.as_deref() {
            return Ok(cached.to_string());
        }

        let raw = match resource {
            Resource::Entity(entity) => entity.entity_name().to_string(),
            _ => strip_policy_suffix(self.policy.policy_name()).to_string(),
        };
        if raw.is_empty() {
            return Err(WardenPolicyError::InvalidSubject { value: raw });
        }

        let subject = subject_from_type_name(&raw, self.rules);
        *self.subject = Some(subject.clone());
        Ok(subject)
    }
}
