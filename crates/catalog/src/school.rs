use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// An academic department: long display name plus short subject code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Department {
    pub longname: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub departments: BTreeSet<Department>,
}

impl School {
    /// Find a department by long name or subject code, ignoring case.
    pub fn department(&self, name: &str) -> Result<&Department, CatalogError> {
        let query = name.to_lowercase();
        self.departments
            .iter()
            .find(|d| d.longname.to_lowercase() == query || d.name.to_lowercase() == query)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }
}

/// Find a school by name among `schools`, ignoring case.
pub fn find_school<'a>(schools: &'a [School], name: &str) -> Result<&'a School, CatalogError> {
    let query = name.to_lowercase();
    schools
        .iter()
        .find(|s| s.name.to_lowercase() == query)
        .ok_or_else(|| CatalogError::SchoolNotFound(name.to_string()))
}
