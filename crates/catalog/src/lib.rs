//! `explorecourses-catalog`: Course catalog record model.
//!
//! Immutable value objects for already-decoded catalog records. No transport,
//! query or markup handling lives here.

pub mod course;
pub mod error;
pub mod load;
pub mod school;
pub mod section;

pub use course::{AdministrativeInformation, Attribute, Course, LearningObjective, Tag};
pub use error::CatalogError;
pub use load::{load_courses, load_schools};
pub use school::{find_school, Department, School};
pub use section::{Instructor, Schedule, Section};
