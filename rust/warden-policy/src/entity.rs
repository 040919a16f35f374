use std::fmt;

/// A domain entity whose type name can seed subject derivation.
///
/// The default implementation derives the bare type name from
/// [`std::any::type_name_of_val`], with path and generic segments stripped,
/// so most types need an empty impl:
///
/// ```rust
/// use warden_policy::Entity;
///
/// struct BlogArticle;
/// impl Entity for BlogArticle {}
///
/// assert_eq!(BlogArticle.entity_name(), "BlogArticle");
/// ```
pub trait Entity {
    /// Bare type name used to derive the permission subject.
    fn entity_name(&self) -> &str {
        bare_type_name(std::any::type_name_of_val(self))
    }
}

/// The resource argument of a capability check.
///
/// An explicit [`Subject`](Resource::Subject) string always wins and is used
/// verbatim; an [`Entity`](Resource::Entity) derives the subject from its
/// type name; [`None`](Resource::None) derives it from the policy's own type
/// name.
#[derive(Clone, Copy, Default)]
pub enum Resource<'a> {
    /// No resource supplied.
    #[default]
    None,
    /// Explicit subject string, used verbatim without transformation.
    Subject(&'a str),
    /// A domain entity; the subject derives from its entity name.
    Entity(&'a dyn Entity),
}

impl fmt::Debug for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::None => f.write_str("None"),
            Resource::Subject(subject) => f.debug_tuple("Subject").field(subject).finish(),
            Resource::Entity(entity) => f.debug_tuple("Entity").field(&entity.entity_name()).finish(),
        }
    }
}

/// Strip path and generic segments from a fully qualified type name.
pub(crate) fn bare_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics.rsplit("::").next().unwrap_or(without_generics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_strips_path_segments() {
        assert_eq!(bare_type_name("crate::module::Article"), "Article");
        assert_eq!(bare_type_name("Article"), "Article");
    }

    #[test]
    fn it_strips_generic_arguments() {
        assert_eq!(bare_type_name("module::Wrapper<other::Inner>"), "Wrapper");
    }

    #[test]
    fn it_derives_entity_names_from_the_type() {
        struct SupportTicket;
        impl Entity for SupportTicket {}

        assert_eq!(SupportTicket.entity_name(), "SupportTicket");
    }

    #[test]
    fn it_debug_prints_resources() {
        struct Comment;
        impl Entity for Comment {}

        assert_eq!(format!("{:?}", Resource::None), "None");
        assert_eq!(format!("{:?}", Resource::Subject("articles")), "Subject(\"articles\")");
        assert_eq!(format!("{:?}", Resource::Entity(&Comment)), "Entity(\"Comment\")");
    }
}
