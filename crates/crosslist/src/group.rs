use std::collections::{BTreeMap, BTreeSet};

use explorecourses_catalog::Course;

use crate::model::GroupKey;

/// Partition listings by (year, course_id) in one pass.
///
/// Listings that compare equal by (year, course_code) collapse; the first one
/// seen is kept. Within a group, iteration yields the representative first.
pub fn partition<'a, I>(courses: I) -> BTreeMap<GroupKey, BTreeSet<&'a Course>>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut groups: BTreeMap<GroupKey, BTreeSet<&Course>> = BTreeMap::new();

    for course in courses {
        let key = GroupKey::of(course);
        let group = groups.entry(key).or_default();
        if !group.insert(course) {
            log::debug!(
                "duplicate listing {} {} collapsed",
                course.year,
                course.course_code()
            );
        }
    }

    groups
}
