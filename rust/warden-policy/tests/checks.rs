use std::cell::RefCell;
use std::collections::HashSet;

use anyhow::Result;
use warden_naming::NamingRules;
use warden_policy::{
    Check, DecisionOracle, Entity, Policy, Principal, ProxyTable, Resolver, Resource,
    WardenPolicyError,
};

struct User {
    authenticated: bool,
}

impl Principal for User {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

fn user() -> User {
    User { authenticated: true }
}

/// Grant-table oracle recording every key it is queried with.
struct GrantTable {
    granted: HashSet<String>,
    seen: RefCell<Vec<String>>,
    failure: Option<String>,
}

impl GrantTable {
    fn granting<const N: usize>(keys: [&str; N]) -> Self {
        Self {
            granted: keys.iter().map(|key| key.to_string()).collect(),
            seen: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            granted: HashSet::new(),
            seen: RefCell::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl DecisionOracle<User> for GrantTable {
    type Error = String;

    fn check(&self, _actor: &User, key: &str) -> Result<bool, Self::Error> {
        self.seen.borrow_mut().push(key.to_string());
        match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(self.granted.contains(key)),
        }
    }
}

struct ArticlePolicy;
impl Policy<User> for ArticlePolicy {}

#[test]
fn view_any_articles_end_to_end() -> Result<()> {
    let oracle = GrantTable::granting(["view any articles"]);
    let mut resolver = Resolver::new(ArticlePolicy, oracle, NamingRules::default());

    let granted = resolver.check("viewAny", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["view any articles"]);
    Ok(())
}

struct BlogArticlePolicy;
impl Policy<User> for BlogArticlePolicy {}

#[test]
fn custom_pattern_and_delimiters_end_to_end() -> Result<()> {
    let rules = NamingRules {
        key_pattern: "{subject}.{action}".to_string(),
        delimiter_between_words: "-".to_string(),
        ..NamingRules::default()
    };
    let oracle = GrantTable::granting(["blog-articles.view-any"]);
    let mut resolver = Resolver::new(BlogArticlePolicy, oracle, rules);

    let granted = resolver.check("viewAny", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["blog-articles.view-any"]);
    Ok(())
}

#[test]
fn oracle_failure_is_a_denial_not_an_error() -> Result<()> {
    let oracle = GrantTable::failing("grant table unavailable");
    let mut resolver = Resolver::new(ArticlePolicy, oracle, NamingRules::default());

    let granted = resolver.check("viewAny", &user(), Resource::None)?;

    assert!(!granted);
    Ok(())
}

#[test]
fn unauthenticated_actor_propagates_and_never_reaches_the_oracle() {
    let oracle = GrantTable::granting(["view any articles"]);
    let mut resolver = Resolver::new(ArticlePolicy, oracle, NamingRules::default());

    let guest = User { authenticated: false };
    assert_eq!(
        resolver.check("viewAny", &guest, Resource::None),
        Err(WardenPolicyError::InvalidActor)
    );
    assert!(resolver.oracle().seen().is_empty());
}

#[test]
fn explicit_subject_string_wins_verbatim() -> Result<()> {
    let oracle = GrantTable::granting(["view any Reports"]);
    let mut resolver = Resolver::new(ArticlePolicy, oracle, NamingRules::default());

    let granted = resolver.check("viewAny", &user(), Resource::Subject("Reports"))?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["view any Reports"]);
    Ok(())
}

#[test]
fn entity_resource_seeds_subject_derivation() -> Result<()> {
    struct BlogComment;
    impl Entity for BlogComment {}

    let oracle = GrantTable::granting(["update blog comments"]);
    let mut resolver = Resolver::new(ArticlePolicy, oracle, NamingRules::default());

    let granted = resolver.check("update", &user(), Resource::Entity(&BlogComment))?;

    assert!(granted);
    Ok(())
}

/// Policy with a `manage` proxy standing in for `update` and `delete`.
struct PostPolicy;

impl Policy<User> for PostPolicy {
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new().aliases("manage", ["update", "delete"])
    }

    fn handle<O: DecisionOracle<User>>(
        &self,
        check: &mut Check<'_, User, Self, O>,
        capability: &str,
        actor: &User,
        resource: Resource<'_>,
    ) -> Option<bool> {
        match capability {
            "manage" => Some(check.evaluate_proxied(actor, "any", resource)),
            _ => None,
        }
    }
}

#[test]
fn alias_dispatches_through_the_target_handler() -> Result<()> {
    let oracle = GrantTable::granting(["update any posts"]);
    let mut resolver = Resolver::new(PostPolicy, oracle, NamingRules::default());

    // "update" is an alias of "manage"; the manage handler composes the
    // proxied action from the originally invoked alias.
    let granted = resolver.check("update", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["update any posts"]);
    Ok(())
}

#[test]
fn each_alias_keeps_its_own_name_in_the_key() -> Result<()> {
    let oracle = GrantTable::granting(["delete any posts"]);
    let mut resolver = Resolver::new(PostPolicy, oracle, NamingRules::default());

    let granted = resolver.check("delete", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["delete any posts"]);
    Ok(())
}

/// Same shape, but the target spec drops the base method name.
struct LockedPostPolicy;

impl Policy<User> for LockedPostPolicy {
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new().aliases("manage:false", ["update", "delete"])
    }

    fn handle<O: DecisionOracle<User>>(
        &self,
        check: &mut Check<'_, User, Self, O>,
        capability: &str,
        actor: &User,
        resource: Resource<'_>,
    ) -> Option<bool> {
        match capability {
            "manage" => Some(check.evaluate_proxied(actor, "any", resource)),
            _ => None,
        }
    }
}

#[test]
fn keep_base_false_derives_from_the_target_name() -> Result<()> {
    let oracle = GrantTable::granting(["manage any locked posts"]);
    let mut resolver = Resolver::new(LockedPostPolicy, oracle, NamingRules::default());

    let granted = resolver.check("update", &user(), Resource::None)?;

    assert!(granted);
    // The key names "manage", not the invoked "update".
    assert_eq!(resolver.oracle().seen(), vec!["manage any locked posts"]);
    Ok(())
}

/// Proxy targets without a custom handler fall through to key derivation.
struct ArchivePolicy;

impl Policy<User> for ArchivePolicy {
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new()
            .aliases("manage", ["restore"])
            .aliases("curate:false", ["reorder"])
    }
}

#[test]
fn fallthrough_proxy_preserves_the_invoked_alias() -> Result<()> {
    let oracle = GrantTable::granting(["restore archives"]);
    let mut resolver = Resolver::new(ArchivePolicy, oracle, NamingRules::default());

    // keep_base defaults to true: the key derives from "restore", the
    // originally invoked alias, even though dispatch went through "manage".
    let granted = resolver.check("restore", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["restore archives"]);
    Ok(())
}

#[test]
fn fallthrough_proxy_with_keep_base_false_uses_the_target() -> Result<()> {
    let oracle = GrantTable::granting(["curate archives"]);
    let mut resolver = Resolver::new(ArchivePolicy, oracle, NamingRules::default());

    let granted = resolver.check("reorder", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(resolver.oracle().seen(), vec!["curate archives"]);
    Ok(())
}

/// Handler issuing a nested check after its proxied one: the resolved
/// capability is cleared once the first oracle query completes.
struct AuditedPolicy;

impl Policy<User> for AuditedPolicy {
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new().aliases("manage:false", ["update"])
    }

    fn handle<O: DecisionOracle<User>>(
        &self,
        check: &mut Check<'_, User, Self, O>,
        capability: &str,
        actor: &User,
        resource: Resource<'_>,
    ) -> Option<bool> {
        match capability {
            "manage" => {
                let proxied = check.evaluate_proxied(actor, "any", resource);
                // Re-entrant check: derives from the invoked name again.
                let direct = check.evaluate(actor, None, resource);
                Some(proxied && direct)
            }
            _ => None,
        }
    }
}

#[test]
fn resolved_capability_is_cleared_between_nested_checks() -> Result<()> {
    let oracle = GrantTable::granting(["manage any auditeds", "update auditeds"]);
    let mut resolver = Resolver::new(AuditedPolicy, oracle, NamingRules::default());

    let granted = resolver.check("update", &user(), Resource::None)?;

    assert!(granted);
    assert_eq!(
        resolver.oracle().seen(),
        vec!["manage any auditeds", "update auditeds"]
    );
    Ok(())
}

#[test]
fn resolver_state_is_fresh_for_each_top_level_check() -> Result<()> {
    let oracle = GrantTable::granting(["update any posts", "view posts"]);
    let mut resolver = Resolver::new(PostPolicy, oracle, NamingRules::default());

    assert!(resolver.check("update", &user(), Resource::None)?);
    // A plain check afterwards carries no proxy state over.
    assert!(resolver.check("view", &user(), Resource::None)?);

    assert_eq!(
        resolver.oracle().seen(),
        vec!["update any posts", "view posts"]
    );
    Ok(())
}
