#![warn(missing_docs)]

//! Capability resolution over derived permission keys.
//!
//! This crate lets a thin policy layer answer "can this actor do X to this
//! resource" without per-capability boilerplate: an unresolved capability
//! name (`viewAny`, `update`, ...) is turned into a permission-key string by
//! [`warden_naming`] and looked up in an external [`DecisionOracle`].
//!
//! # Quick Example
//!
//! ```rust
//! use warden_naming::NamingRules;
//! use warden_policy::{DecisionOracle, Policy, Principal, Resolver, Resource};
//!
//! struct User;
//! impl Principal for User {
//!     fn is_authenticated(&self) -> bool {
//!         true
//!     }
//! }
//!
//! // The external decision primitive, opaque to this crate.
//! struct Grants;
//! impl DecisionOracle<User> for Grants {
//!     type Error = String;
//!     fn check(&self, _actor: &User, key: &str) -> Result<bool, Self::Error> {
//!         Ok(key == "view any articles")
//!     }
//! }
//!
//! // The minimal policy: its type name seeds subject derivation.
//! struct ArticlePolicy;
//! impl Policy<User> for ArticlePolicy {}
//!
//! let mut resolver = Resolver::new(ArticlePolicy, Grants, NamingRules::default());
//! assert_eq!(resolver.check("viewAny", &User, Resource::None), Ok(true));
//! assert_eq!(resolver.check("delete", &User, Resource::None), Ok(false));
//! ```
//!
//! # Core Concepts
//!
//! ## Dispatch
//!
//! [`Resolver::check`] is the single entry point the surrounding framework
//! routes unrecognized capability names into. Each dispatch runs three
//! stages: the policy's explicit [`Policy::handle`] hook, the
//! [`ProxyTable`] (aliases re-dispatch to their target through the same
//! machinery), and finally key derivation plus one oracle query.
//!
//! ## Proxies
//!
//! A proxy lets one capability stand in for several related checks:
//! aliasing `update` and `delete` to `manage` routes both through the
//! `manage` handler, which typically calls [`Check::evaluate_proxied`] to
//! compose a key that still names the original intent.
//!
//! ## Failing closed
//!
//! Only [`WardenPolicyError::InvalidActor`] escapes to the caller. Every
//! other failure inside the evaluation path - an unusable subject, a
//! missing call context, an oracle error - is logged via `tracing` and
//! converted to a denial.

pub use warden_naming::NamingRules;

mod error;
pub use error::*;

mod principal;
pub use principal::*;

mod oracle;
pub use oracle::*;

mod entity;
pub use entity::*;

mod proxy;
pub use proxy::*;

mod context;

mod policy;
pub use policy::*;

mod resolver;
pub use resolver::*;
