use serde::Serialize;

/// A dashboard user. Only the store knows about users; the password never
/// leaves the process in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
