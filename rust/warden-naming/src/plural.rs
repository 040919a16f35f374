/// Irregular singular/plural pairs that no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
];

/// Words whose plural form equals the singular.
const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "aircraft",
    "information",
    "equipment",
    "news",
    "money",
];

/// Words ending in `f`/`fe` that take a plain `s` instead of `ves`.
const PLAIN_F: &[&str] = &["roof", "belief", "chef", "chief", "proof", "safe", "cafe"];

/// Words ending in `o` that take `es` instead of `s`.
const ES_AFTER_O: &[&str] = &["hero", "potato", "tomato", "echo", "veto", "torpedo"];

/// Pluralize a single English word.
///
/// Intended for the final word of a normalized (lowercase) subject. The
/// rules are the usual ones: a small irregular table, uncountable nouns,
/// sibilant endings taking `es`, consonant+`y` turning into `ies`, `f`/`fe`
/// turning into `ves`, and a default appended `s`.
///
/// ```rust
/// use warden_naming::pluralize;
///
/// assert_eq!(pluralize("article"), "articles");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return (*plural).to_string();
    }

    if ends_with_sibilant(&lower) {
        return format!("{word}es");
    }

    if let Some(stem) = consonant_y_stem(word, &lower) {
        return format!("{stem}ies");
    }

    if !PLAIN_F.contains(&lower.as_str()) {
        if let Some(stem) = word.strip_suffix("fe") {
            return format!("{stem}ves");
        }
        if lower.ends_with('f') && !lower.ends_with("ff") {
            return format!("{}ves", &word[..word.len() - 1]);
        }
    }

    if lower.ends_with('o') && ES_AFTER_O.contains(&lower.as_str()) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Endings that take `es`: s, x, z, ch, sh.
fn ends_with_sibilant(lower: &str) -> bool {
    lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
}

/// For words ending in consonant+`y`, the stem without the `y`.
fn consonant_y_stem<'a>(word: &'a str, lower: &str) -> Option<&'a str> {
    if !lower.ends_with('y') {
        return None;
    }

    let mut chars = lower.chars().rev();
    chars.next();
    match chars.next() {
        Some(prior) if prior.is_ascii_alphabetic() && !"aeiou".contains(prior) => {
            Some(&word[..word.len() - 1])
        }
        _ => None,
    }
}
