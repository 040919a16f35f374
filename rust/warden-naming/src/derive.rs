use convert_case::{Converter, Pattern};

use crate::{NamingRules, pluralize};

/// Placeholder substituted with the action.
const ACTION_TOKEN: &str = "{action}";
/// Placeholder substituted with the subject/action delimiter.
const DELIMITER_TOKEN: &str = "{delimiter}";
/// Placeholder substituted with the subject.
const SUBJECT_TOKEN: &str = "{subject}";

/// Compose a permission key from a normalized subject and action.
///
/// Each placeholder token in [`NamingRules::key_pattern`] is replaced
/// literally. The tokens are distinct and non-overlapping, so replacement
/// order does not matter; a pattern missing a placeholder simply omits that
/// segment.
pub fn compose_key(subject: &str, action: &str, rules: &NamingRules) -> String {
    rules
        .key_pattern
        .replace(ACTION_TOKEN, action)
        .replace(
            DELIMITER_TOKEN,
            &rules.delimiter_between_subject_and_action,
        )
        .replace(SUBJECT_TOKEN, subject)
}

/// Normalize a bare type identifier into a permission subject.
///
/// With [`NamingRules::subject_snake_case`] the identifier is split on case
/// boundaries and lowercased, its words joined by
/// [`NamingRules::delimiter_between_words`] (`"SuperUser"` becomes
/// `"super user"`). Otherwise [`NamingRules::subject_lower_case`] lowercases
/// the string as-is, without word splitting. When
/// [`NamingRules::subject_plural`] is set the final word is pluralized.
pub fn subject_from_type_name(raw: &str, rules: &NamingRules) -> String {
    let subject = if rules.subject_snake_case {
        delimited_lowercase(raw, &rules.delimiter_between_words)
    } else if rules.subject_lower_case {
        raw.to_lowercase()
    } else {
        raw.to_string()
    };

    if rules.subject_plural {
        pluralize_last_word(&subject, &rules.delimiter_between_words)
    } else {
        subject
    }
}

/// Normalize a method identifier into a permission action.
///
/// `"viewAny"` becomes `"view any"` under the default rules. Deterministic,
/// no failure path.
pub fn action_from_method_name(method: &str, rules: &NamingRules) -> String {
    if rules.action_snake_case {
        delimited_lowercase(method, &rules.delimiter_between_words)
    } else if rules.action_lower_case {
        method.to_lowercase()
    } else {
        method.to_string()
    }
}

/// Compose the combined action for a proxied check.
///
/// The proxy method name is normalized like any action, then concatenated
/// with `action` using [`NamingRules::delimiter_between_words`]. The proxy
/// name comes first when [`NamingRules::proxied_action_paste_after`] is set,
/// last otherwise.
pub fn proxied_action(proxy_method: &str, action: &str, rules: &NamingRules) -> String {
    let proxy = action_from_method_name(proxy_method, rules);
    let delimiter = &rules.delimiter_between_words;

    if rules.proxied_action_paste_after {
        format!("{proxy}{delimiter}{action}")
    } else {
        format!("{action}{delimiter}{proxy}")
    }
}

/// Split an identifier on case boundaries, joining the lowercased words with
/// the given delimiter.
fn delimited_lowercase(identifier: &str, delimiter: &str) -> String {
    Converter::new()
        .set_delim(delimiter)
        .set_pattern(Pattern::Lowercase)
        .convert(identifier)
}

/// Pluralize the final delimiter-separated word of a subject.
fn pluralize_last_word(subject: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return pluralize(subject);
    }

    match subject.rsplit_once(delimiter) {
        Some((head, last)) => format!("{head}{delimiter}{}", pluralize(last)),
        None => pluralize(subject),
    }
}
