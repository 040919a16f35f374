use serde::{Deserialize, Serialize};

/// Naming rules governing permission-key derivation.
///
/// A `NamingRules` value is read-only after construction; resolvers and the
/// derivation functions take it by reference and never mutate it. Every field
/// has a default, so the value can be deserialized from a partial
/// configuration document:
///
/// ```rust
/// use warden_naming::NamingRules;
///
/// let rules: NamingRules = serde_json::from_str(r#"{"key_pattern": "{subject}.{action}"}"#)?;
/// assert_eq!(rules.key_pattern, "{subject}.{action}");
/// assert_eq!(rules.delimiter_between_words, " ");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Template for the composed key. May contain the `{action}`,
    /// `{delimiter}` and `{subject}` placeholders; a missing placeholder
    /// simply omits that segment.
    pub key_pattern: String,

    /// Delimiter joining the words of a multi-word subject or action.
    pub delimiter_between_words: String,

    /// Delimiter substituted for `{delimiter}` in the key pattern, between
    /// the subject and the action. Distinct from
    /// [`delimiter_between_words`](Self::delimiter_between_words).
    pub delimiter_between_subject_and_action: String,

    /// Split the subject identifier on case boundaries and lowercase it.
    pub subject_snake_case: bool,

    /// Lowercase the subject as-is. Only consulted when
    /// [`subject_snake_case`](Self::subject_snake_case) is disabled.
    pub subject_lower_case: bool,

    /// Pluralize the final word of the subject.
    pub subject_plural: bool,

    /// Split the action identifier on case boundaries and lowercase it.
    pub action_snake_case: bool,

    /// Lowercase the action as-is. Only consulted when
    /// [`action_snake_case`](Self::action_snake_case) is disabled.
    pub action_lower_case: bool,

    /// When composing a proxied action, paste the proxy's own name before
    /// the target action; when disabled the order is reversed.
    pub proxied_action_paste_after: bool,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            key_pattern: "{action}{delimiter}{subject}".to_string(),
            delimiter_between_words: " ".to_string(),
            delimiter_between_subject_and_action: " ".to_string(),
            subject_snake_case: true,
            subject_lower_case: true,
            subject_plural: true,
            action_snake_case: true,
            action_lower_case: true,
            proxied_action_paste_after: true,
        }
    }
}
