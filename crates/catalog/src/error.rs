use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No department matched the lookup; carries the query string.
    NotFound(String),
    /// No school matched the lookup; carries the query string.
    SchoolNotFound(String),
    /// JSON parse / deserialization error.
    Json(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "no department named '{name}'"),
            Self::SchoolNotFound(name) => write!(f, "no school named '{name}'"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
