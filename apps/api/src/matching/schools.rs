//! School filtering — binary inclusion, no scoring.
//!
//! Region lookup is an exact-match index query and lives in `catalog`; this
//! module holds the substring search over offered courses.

use crate::matching::text::contains_fold;
use crate::models::catalog::SchoolRow;

/// Schools offering a course whose name contains `course_name` (case-insensitive).
///
/// When `location` is given, a school must additionally carry it as a substring
/// of its city-level location OR its region. Results keep catalog order.
pub fn schools_by_course(
    schools: &[SchoolRow],
    course_name: &str,
    location: Option<&str>,
) -> Vec<SchoolRow> {
    schools
        .iter()
        .filter(|school| {
            school
                .courses
                .iter()
                .any(|offered| contains_fold(offered, course_name))
        })
        .filter(|school| {
            location.map_or(true, |loc| {
                contains_fold(&school.location, loc) || contains_fold(&school.region, loc)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_school(id: i64, name: &str, location: &str, region: &str, courses: Vec<&str>) -> SchoolRow {
        SchoolRow {
            id,
            name: name.to_string(),
            school_type: "university".to_string(),
            location: location.to_string(),
            region: region.to_string(),
            courses: courses.into_iter().map(String::from).collect(),
            website: None,
            contact_info: None,
            tuition_range: None,
            accreditation: vec!["CHED".to_string()],
        }
    }

    fn fixture() -> Vec<SchoolRow> {
        vec![
            make_school(
                1,
                "University of the Philippines Diliman",
                "Quezon City",
                "Metro Manila",
                vec!["Computer Science", "Fine Arts", "Business Administration"],
            ),
            make_school(
                2,
                "University of the Cordilleras",
                "Baguio City",
                "Cordillera Administrative Region",
                vec!["Information Technology", "Computer Science"],
            ),
            make_school(
                3,
                "TESDA National Capital Region",
                "Manila",
                "Metro Manila",
                vec!["Computer Programming", "Culinary Arts"],
            ),
        ]
    }

    #[test]
    fn test_course_substring_is_case_insensitive() {
        let results = schools_by_course(&fixture(), "computer science", None);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_fragment_matches_offered_course() {
        // "Computer" hits both "Computer Science" and "Computer Programming".
        let results = schools_by_course(&fixture(), "Computer", None);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_location_restricts_by_city_or_region() {
        let by_city = schools_by_course(&fixture(), "Computer", Some("Baguio"));
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].id, 2);

        let by_region = schools_by_course(&fixture(), "Computer", Some("Metro Manila"));
        assert_eq!(by_region.len(), 2);
    }

    #[test]
    fn test_no_offering_means_excluded() {
        let results = schools_by_course(&fixture(), "Nursing", None);
        assert!(results.is_empty());
    }

    #[test]
    fn test_catalog_order_preserved() {
        let results = schools_by_course(&fixture(), "Computer", None);
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
