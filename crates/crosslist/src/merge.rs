use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use explorecourses_catalog::Course;

use crate::error::MergeError;
use crate::group::partition;
use crate::model::{GroupKey, InconsistentGroup, MergeOutput, MergedCourse, SharedField};
use crate::title::strip_crosslist_suffix;

/// Merge cross-listings in a batch of courses.
///
/// Produces one [`MergedCourse`] per distinct (year, course_id). A group that
/// fails the consistency check is reported in `failures` and does not affect
/// the other groups.
pub fn merge<'a, I>(courses: I) -> Result<MergeOutput, MergeError>
where
    I: IntoIterator<Item = &'a Course>,
{
    let groups = partition(courses);
    if groups.is_empty() {
        return Err(MergeError::EmptyInput);
    }

    let mut output = MergeOutput::default();
    for (key, group) in groups {
        let listings: Vec<&Course> = group.into_iter().collect();
        match reconcile(key, &listings) {
            Ok(merged) => output.merged.push(merged),
            Err(failure) => output.failures.push(failure),
        }
    }

    Ok(output)
}

impl MergeOutput {
    /// All-or-nothing view: the first failed group becomes the error.
    pub fn into_result(self) -> Result<Vec<MergedCourse>, MergeError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(MergeError::InconsistentGroup(failure)),
            None => Ok(self.merged),
        }
    }
}

/// Reconcile a sorted, non-empty group that shares `key`.
fn reconcile(key: GroupKey, listings: &[&Course]) -> Result<MergedCourse, InconsistentGroup> {
    let base = listings[0];
    let rest = &listings[1..];
    debug_assert!(rest.iter().all(|c| GroupKey::of(c) == key));

    let title = strip_crosslist_suffix(&base.title);
    let fields = diverging_fields(base, title, rest);
    if !fields.is_empty() {
        return Err(InconsistentGroup {
            key,
            fields,
            course_codes: listings.iter().map(|c| c.course_code()).collect(),
        });
    }

    Ok(MergedCourse {
        year: base.year.clone(),
        title: title.to_string(),
        description: base.description.clone(),
        repeatable: base.repeatable,
        grading: base.grading.clone(),
        units_min: base.units_min,
        units_max: base.units_max,
        learning_objectives: base.learning_objectives.clone(),
        attributes: base.attributes.clone(),
        subject: listings.iter().map(|c| c.subject.clone()).collect(),
        code: listings.iter().map(|c| c.code.clone()).collect(),
        listing_titles: listings.iter().map(|c| c.title.clone()).collect(),
        gers: listings.iter().map(|c| c.gers.clone()).collect(),
        remote: listings.iter().map(|c| c.remote).collect(),
        sections: listings.iter().map(|c| c.sections.clone()).collect(),
        administrative_information: listings
            .iter()
            .map(|c| c.administrative_information.clone())
            .collect(),
        tags: listings.iter().map(|c| c.tags.clone()).collect(),
    })
}

/// Shared fields on which any listing in `rest` differs from `base`.
fn diverging_fields(base: &Course, title: &str, rest: &[&Course]) -> Vec<SharedField> {
    let differs = |agrees: fn(&Course, &Course) -> bool| rest.iter().any(|c| !agrees(base, c));
    let mut fields = Vec::new();

    if rest.iter().any(|c| c.title.get(..title.len()) != Some(title)) {
        fields.push(SharedField::Title);
    }
    if differs(|a, b| a.description == b.description) {
        fields.push(SharedField::Description);
    }
    if differs(|a, b| a.repeatable == b.repeatable) {
        fields.push(SharedField::Repeatable);
    }
    if differs(|a, b| a.grading == b.grading) {
        fields.push(SharedField::Grading);
    }
    if differs(|a, b| a.units_min == b.units_min) {
        fields.push(SharedField::UnitsMin);
    }
    if differs(|a, b| a.units_max == b.units_max) {
        fields.push(SharedField::UnitsMax);
    }
    if differs(|a, b| a.learning_objectives == b.learning_objectives) {
        fields.push(SharedField::LearningObjectives);
    }
    if differs(|a, b| a.attributes == b.attributes) {
        fields.push(SharedField::Attributes);
    }

    fields
}

// ---------------------------------------------------------------------------
// MergedCourse
// ---------------------------------------------------------------------------

impl MergedCourse {
    /// Merge an explicit group of listings of one course.
    ///
    /// Unlike [`merge`], every listing must already share the representative's
    /// (year, course_id).
    pub fn from_listings<'a, I>(listings: I) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = &'a Course>,
    {
        let listings: Vec<&Course> = listings
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let base = listings.first().ok_or(MergeError::EmptyInput)?;

        let expected = GroupKey::of(base);
        if let Some(stray) = listings.iter().find(|c| GroupKey::of(c) != expected) {
            return Err(MergeError::MixedGroup {
                found: GroupKey::of(stray),
                expected,
            });
        }

        Ok(reconcile(expected, &listings)?)
    }

    /// `"SUBJECT CODE"` for each listing, in listing order.
    pub fn course_codes(&self) -> Vec<String> {
        self.subject
            .iter()
            .zip(&self.code)
            .map(|(subject, code)| format!("{subject} {code}"))
            .collect()
    }

    /// The shared course id, read from the representative's slot.
    pub fn course_id(&self) -> Option<u32> {
        self.administrative_information.first().map(|a| a.course_id)
    }

    pub fn key(&self) -> Option<GroupKey> {
        Some(GroupKey {
            year: self.year.clone(),
            course_id: self.course_id()?,
        })
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.subject.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    /// Rebuild the listing at `index` as a standalone course.
    ///
    /// `None` when `index` is out of range for any per-listing field.
    pub fn listing(&self, index: usize) -> Option<Course> {
        Some(Course {
            year: self.year.clone(),
            subject: self.subject.get(index)?.clone(),
            code: self.code.get(index)?.clone(),
            title: self.listing_titles.get(index)?.clone(),
            description: self.description.clone(),
            gers: self.gers.get(index)?.clone(),
            repeatable: self.repeatable,
            grading: self.grading.clone(),
            units_min: self.units_min,
            units_max: self.units_max,
            remote: *self.remote.get(index)?,
            learning_objectives: self.learning_objectives.clone(),
            sections: self.sections.get(index)?.clone(),
            administrative_information: self.administrative_information.get(index)?.clone(),
            attributes: self.attributes.clone(),
            tags: self.tags.get(index)?.clone(),
        })
    }

    /// Flatten back into individual listings, representative first.
    ///
    /// Stops at the first slot missing from any per-listing field.
    pub fn listings(&self) -> Vec<Course> {
        (0..self.len()).map_while(|i| self.listing(i)).collect()
    }

    fn identity(&self) -> (&str, Vec<String>) {
        (&self.year, self.course_codes())
    }
}

impl PartialEq for MergedCourse {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for MergedCourse {}

impl Hash for MergedCourse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for MergedCourse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergedCourse {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::listing;
    use explorecourses_catalog::{LearningObjective, Tag};

    fn cs_educ() -> Vec<Course> {
        vec![
            listing("2023-2024", "CS", "106A", 12345),
            listing("2023-2024", "EDUC", "113", 12345),
        ]
    }

    #[test]
    fn crosslisted_pair_merges() {
        let output = merge(&cs_educ()).unwrap();
        assert!(output.failures.is_empty());
        assert_eq!(output.merged.len(), 1);

        let m = &output.merged[0];
        assert_eq!(m.subject, vec!["CS", "EDUC"]);
        assert_eq!(m.code, vec!["106A", "113"]);
        assert_eq!(m.title, "Programming Methodology");
        assert_eq!(m.course_id(), Some(12345));
        assert_eq!(m.course_codes(), vec!["CS 106A", "EDUC 113"]);
        assert_eq!(
            m.listing_titles,
            vec![
                "Programming Methodology (CS 106A)",
                "Programming Methodology (EDUC 113)"
            ]
        );
    }

    #[test]
    fn per_listing_fields_keep_their_slot() {
        let mut courses = cs_educ();
        courses[1].remote = Some(true);
        courses[1].gers.insert("WAY-SI".into());
        courses[1].tags.insert(Tag {
            organization: "EDUC".into(),
            name: "pedagogy".into(),
        });

        let m = merge(&courses).unwrap().into_result().unwrap().remove(0);
        assert_eq!(m.remote, vec![None, Some(true)]);
        assert!(m.gers[0].is_empty());
        assert!(m.gers[1].contains("WAY-SI"));
        assert!(m.tags[0].is_empty());
        assert_eq!(m.tags[1].len(), 1);
        assert_eq!(m.administrative_information[1].academic_organization, "EDUC");
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = cs_educ();
        let mut backward = cs_educ();
        backward.reverse();

        let a = merge(&forward).unwrap().into_result().unwrap();
        let b = merge(&backward).unwrap().into_result().unwrap();
        assert_eq!(a[0].subject, b[0].subject);
        assert_eq!(a[0].administrative_information, b[0].administrative_information);
    }

    #[test]
    fn singleton_passes_through() {
        let mut course = listing("2023-2024", "MATH", "51", 105750);
        course.title = "Linear Algebra".into();
        let m = MergedCourse::from_listings([&course]).unwrap();

        assert_eq!(m.len(), 1);
        assert_eq!(m.gers.len(), 1);
        assert_eq!(m.sections.len(), 1);
        assert_eq!(m.tags.len(), 1);
        assert_eq!(m.title, course.title);
        assert_eq!(m.description, course.description);
        assert_eq!(m.grading, course.grading);
        assert_eq!(m.units_min, course.units_min);
        assert_eq!(m.units_max, course.units_max);
        assert_eq!(m.listing(0).unwrap(), course);
        assert!(m.listing(1).is_none());
    }

    #[test]
    fn description_mismatch_is_reported() {
        let mut courses = cs_educ();
        courses[1].description = "A different blurb".into();

        let output = merge(&courses).unwrap();
        assert!(output.merged.is_empty());
        assert_eq!(output.failures.len(), 1);
        let failure = &output.failures[0];
        assert_eq!(failure.fields, vec![SharedField::Description]);
        assert_eq!(failure.key.course_id, 12345);
        assert_eq!(failure.course_codes, vec!["CS 106A", "EDUC 113"]);

        let err = output.into_result().unwrap_err();
        assert!(matches!(err, MergeError::InconsistentGroup(_)));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn every_diverging_field_is_named() {
        let mut courses = cs_educ();
        courses[1].grading = "Satisfactory/No Credit".into();
        courses[1].units_max = 4;
        courses[1].learning_objectives.insert(LearningObjective {
            requirement_code: "WAY-AQR".into(),
            description: "Applied Quantitative Reasoning".into(),
        });

        let err = MergedCourse::from_listings(&courses).unwrap_err();
        match err {
            MergeError::InconsistentGroup(group) => assert_eq!(
                group.fields,
                vec![
                    SharedField::Grading,
                    SharedField::UnitsMax,
                    SharedField::LearningObjectives
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn title_prefix_must_match() {
        let mut courses = cs_educ();
        courses[1].title = "Programming Abstractions (EDUC 113)".into();
        let err = MergedCourse::from_listings(&courses).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn shorter_listing_title_is_a_mismatch() {
        let mut courses = cs_educ();
        courses[1].title = "Programming".into();
        let output = merge(&courses).unwrap();
        assert_eq!(output.failures[0].fields, vec![SharedField::Title]);
    }

    #[test]
    fn bad_group_does_not_abort_batch() {
        let mut courses = cs_educ();
        courses[1].repeatable = true;
        courses.push(listing("2023-2024", "MATH", "51", 105750));

        let output = merge(&courses).unwrap();
        assert_eq!(output.merged.len(), 1);
        assert_eq!(output.merged[0].course_id(), Some(105750));
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].fields, vec![SharedField::Repeatable]);
    }

    #[test]
    fn empty_input_fails_fast() {
        let none: Vec<Course> = Vec::new();
        assert_eq!(merge(&none).unwrap_err(), MergeError::EmptyInput);
        assert_eq!(
            MergedCourse::from_listings(&none).unwrap_err(),
            MergeError::EmptyInput
        );
    }

    #[test]
    fn from_listings_rejects_mixed_group() {
        let courses = vec![
            listing("2023-2024", "CS", "106A", 12345),
            listing("2023-2024", "MATH", "51", 105750),
        ];
        let err = MergedCourse::from_listings(&courses).unwrap_err();
        assert!(matches!(err, MergeError::MixedGroup { .. }));
    }

    #[test]
    fn groups_never_span_years() {
        let courses = vec![
            listing("2022-2023", "CS", "106A", 12345),
            listing("2023-2024", "CS", "106A", 12345),
        ];
        let merged = merge(&courses).unwrap().into_result().unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|m| m.len() == 1));
    }

    #[test]
    fn merged_identity_is_year_and_codes() {
        let a = MergedCourse::from_listings(&cs_educ()).unwrap();
        let mut altered = cs_educ();
        for c in &mut altered {
            c.description = "Same codes, different text".into();
        }
        let b = MergedCourse::from_listings(&altered).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn flatten_and_remerge() {
        let m = MergedCourse::from_listings(&cs_educ()).unwrap();
        let listings = m.listings();
        assert_eq!(listings, cs_educ());

        let again = MergedCourse::from_listings(&listings).unwrap();
        assert_eq!(again, m);
        assert_eq!(again.title, m.title);
        assert_eq!(again.listing_titles, m.listing_titles);
    }

    #[test]
    fn misaligned_slots_do_not_panic() {
        let mut m = MergedCourse::from_listings(&cs_educ()).unwrap();
        m.administrative_information.clear();
        assert_eq!(m.course_id(), None);
        assert_eq!(m.key(), None);

        let mut m = MergedCourse::from_listings(&cs_educ()).unwrap();
        m.listing_titles.truncate(1);
        m.tags.clear();
        assert!(m.listing(0).is_none());
        assert!(m.listing(5).is_none());
        assert!(m.listings().is_empty());

        let mut m = MergedCourse::from_listings(&cs_educ()).unwrap();
        m.remote.truncate(1);
        let listings = m.listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].course_code(), "CS 106A");
    }
}
