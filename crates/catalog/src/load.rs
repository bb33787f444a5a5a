use crate::course::Course;
use crate::error::CatalogError;
use crate::school::School;

/// Parse a JSON array of already-decoded course records.
pub fn load_courses(json: &str) -> Result<Vec<Course>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of schools with their departments.
pub fn load_schools(json: &str) -> Result<Vec<School>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
