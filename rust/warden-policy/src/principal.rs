/// An actor on whose behalf permission checks run.
///
/// The resolver validates the principal before any resolution logic runs;
/// an unauthenticated value trips
/// [`WardenPolicyError::InvalidActor`](crate::WardenPolicyError::InvalidActor),
/// which propagates to the caller instead of being converted to a denial.
pub trait Principal {
    /// Whether this value represents an authenticated principal.
    fn is_authenticated(&self) -> bool;
}

impl<P: Principal + ?Sized> Principal for &P {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}
