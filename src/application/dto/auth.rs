use crate::domain::authorization::Subject;

/// The principal behind the current request, as resolved by the session layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    pub subject: Subject,
    pub handle: String,
}
