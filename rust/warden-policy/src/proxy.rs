use std::collections::HashMap;

/// Resolved proxy target for an invoked alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    /// Capability name the alias re-dispatches to.
    pub target: String,
    /// Whether key derivation preserves the originally invoked alias name
    /// instead of the target's.
    pub keep_base: bool,
}

/// Table mapping alias capability names to the target they stand in for.
///
/// Entries are registered per target spec: `"manage"` aliases re-dispatch to
/// `manage` and preserve the invoked alias for key derivation, while
/// `"manage:false"` derives the key from `manage` itself.
///
/// ```rust
/// use warden_policy::ProxyTable;
///
/// let proxies = ProxyTable::new().aliases("manage", ["update", "delete"]);
/// assert_eq!(proxies.resolve("update").unwrap().target, "manage");
/// assert!(proxies.resolve("view").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProxyTable {
    aliases: HashMap<String, ProxyTarget>,
}

impl ProxyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register alias names for a target spec.
    ///
    /// The spec is `"target"` or `"target:flag"`, where a flag of `false`
    /// (or `0`) derives the key from the target rather than the invoked
    /// alias. A malformed flag falls back to the default of `true`.
    pub fn aliases<I, S>(mut self, target_spec: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = parse_target_spec(target_spec);
        for name in names {
            self.aliases.insert(name.into(), target.clone());
        }
        self
    }

    /// Look up the proxy target for an invoked capability name.
    pub fn resolve(&self, capability: &str) -> Option<&ProxyTarget> {
        self.aliases.get(capability)
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

impl<'a, I> FromIterator<(&'a str, I)> for ProxyTable
where
    I: IntoIterator<Item = &'a str>,
{
    fn from_iter<T: IntoIterator<Item = (&'a str, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |table, (spec, names)| table.aliases(spec, names))
    }
}

/// Parse a `"target"` or `"target:keep_base"` spec.
fn parse_target_spec(spec: &str) -> ProxyTarget {
    match spec.split_once(':') {
        Some((target, flag)) => ProxyTarget {
            target: target.to_string(),
            keep_base: !matches!(flag.trim().to_ascii_lowercase().as_str(), "false" | "0"),
        },
        None => ProxyTarget {
            target: spec.to_string(),
            keep_base: true,
        },
    }
}
