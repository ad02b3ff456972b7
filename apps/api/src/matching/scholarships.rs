//! Scholarship eligibility filtering — binary inclusion in catalog order.

use crate::matching::text::overlaps_fold;
use crate::models::catalog::ScholarshipRow;

/// Sentinel entry in `eligible_courses` marking a scholarship open to any course.
pub const ALL_COURSES_SENTINEL: &str = "All Courses";

/// Scholarships eligible for at least one of the candidate course names.
///
/// A candidate matches an eligible-course entry by bidirectional substring, and
/// the sentinel is checked per candidate — an empty candidate list therefore
/// selects nothing, universal scholarships included.
pub fn match_scholarships(
    scholarships: &[ScholarshipRow],
    candidate_courses: &[String],
) -> Vec<ScholarshipRow> {
    scholarships
        .iter()
        .filter(|scholarship| {
            candidate_courses.iter().any(|candidate| {
                scholarship
                    .eligible_courses
                    .iter()
                    .any(|eligible| overlaps_fold(candidate, eligible))
                    || scholarship
                        .eligible_courses
                        .iter()
                        .any(|eligible| eligible == ALL_COURSES_SENTINEL)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scholarship(id: i64, name: &str, eligible: Vec<&str>) -> ScholarshipRow {
        ScholarshipRow {
            id,
            name: name.to_string(),
            provider: "Test Provider".to_string(),
            scholarship_type: "academic".to_string(),
            amount: "Full tuition".to_string(),
            requirements: vec!["Filipino citizen".to_string()],
            eligible_courses: eligible.into_iter().map(String::from).collect(),
            deadline: None,
            application_link: None,
            description: "A scholarship.".to_string(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> Vec<ScholarshipRow> {
        vec![
            make_scholarship(1, "DOST S&T Scholarship", vec![
                "Computer Science",
                "Information Technology",
                "Engineering",
            ]),
            make_scholarship(2, "CHED Scholarship Program", vec!["All Courses"]),
            make_scholarship(3, "Jollibee Group Foundation", vec![
                "Business Administration",
                "Culinary Arts",
            ]),
        ]
    }

    #[test]
    fn test_entry_contained_in_candidate_matches() {
        let candidates = strings(&["Bachelor of Science in Computer Science (BSCS)"]);
        let results = match_scholarships(&fixture(), &candidates);
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        assert!(ids.contains(&1), "eligible entry 'Computer Science' is a substring of the candidate");
        assert!(ids.contains(&2), "All Courses is eligible for any candidate");
        assert!(!ids.contains(&3));
    }

    #[test]
    fn test_candidate_contained_in_entry_matches() {
        let results = match_scholarships(&fixture(), &strings(&["Culinary"]));
        assert_eq!(results.len(), 2); // Jollibee + All Courses
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        // Sentinel check is per candidate, matching the quantifier order.
        let results = match_scholarships(&fixture(), &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sentinel_is_exact_not_substring() {
        let odd = vec![make_scholarship(9, "Odd", vec!["All Courses in STEM"])];
        let results = match_scholarships(&odd, &strings(&["Nursing"]));
        assert!(results.is_empty());
    }

    #[test]
    fn test_catalog_order_preserved() {
        let results = match_scholarships(&fixture(), &strings(&["Computer Science", "Culinary Arts"]));
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_unmatched_candidate_still_gets_universal_scholarship() {
        // No course-list scholarship covers Astrophysics, but the sentinel one
        // is eligible for any non-empty candidate list.
        let results = match_scholarships(&fixture(), &strings(&["Astrophysics"]));
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let targeted: Vec<ScholarshipRow> = fixture()
            .into_iter()
            .filter(|s| s.eligible_courses != vec![ALL_COURSES_SENTINEL])
            .collect();
        let results = match_scholarships(&targeted, &strings(&["Astrophysics"]));
        assert!(results.is_empty());
    }
}
