#![warn(missing_docs)]

//! Naming-convention engine for permission keys.
//!
//! This crate turns `(subject, action)` pairs into canonical permission-key
//! strings, and raw identifiers (a type name, a method name) into normalized
//! subject and action strings. All derivation is governed by a
//! [`NamingRules`] value - there is no hidden global configuration.
//!
//! # Quick Example
//!
//! ```rust
//! use warden_naming::{
//!     NamingRules, action_from_method_name, compose_key, subject_from_type_name,
//! };
//!
//! let rules = NamingRules::default();
//!
//! // Identifier normalization
//! assert_eq!(action_from_method_name("viewAny", &rules), "view any");
//! assert_eq!(subject_from_type_name("BlogArticle", &rules), "blog articles");
//!
//! // Key composition
//! assert_eq!(
//!     compose_key("blog articles", "view any", &rules),
//!     "view any blog articles"
//! );
//! ```
//!
//! # Core Concepts
//!
//! - **Subject**: the normalized name of the resource type a permission
//!   applies to (e.g. `"articles"`).
//! - **Action**: the normalized name of the operation being checked
//!   (e.g. `"view any"`).
//! - **Permission key**: the composed string identifying a subject+action
//!   pair, produced by substituting `{action}`, `{delimiter}` and
//!   `{subject}` into the configured key pattern.
//!
//! Every function in this crate is pure: same inputs and rules always
//! produce the same output.

mod rules;
pub use rules::*;

mod derive;
pub use derive::*;

mod plural;
pub use plural::*;
