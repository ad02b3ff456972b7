use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Whether a course is a degree program or a TESDA vocational course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseType {
    College,
    Tesda,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::College => "college",
            CourseType::Tesda => "tesda",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolType {
    University,
    College,
    Tesda,
}

impl SchoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolType::University => "university",
            SchoolType::College => "college",
            SchoolType::Tesda => "tesda",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScholarshipType {
    Academic,
    NeedBased,
    Sports,
    Talent,
}

impl ScholarshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScholarshipType::Academic => "academic",
            ScholarshipType::NeedBased => "need-based",
            ScholarshipType::Sports => "sports",
            ScholarshipType::Talent => "talent",
        }
    }
}

/// A course record. Immutable after seeding; `id` preserves catalog insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub name: String,
    pub course_type: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub requirements: Vec<String>,
    pub career_paths: Vec<String>,
    /// Free-text skill tags matched against profile skills by substring.
    pub skills: Vec<String>,
    pub average_salary: Option<String>,
}

/// A school record. `courses` holds course-name fragments, not foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub school_type: String,
    pub location: String,
    pub region: String,
    pub courses: Vec<String>,
    pub website: Option<String>,
    pub contact_info: Option<String>,
    pub tuition_range: Option<String>,
    pub accreditation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScholarshipRow {
    pub id: i64,
    pub name: String,
    pub provider: String,
    pub scholarship_type: String,
    pub amount: String,
    pub requirements: Vec<String>,
    /// Course-name fragments, or the literal "All Courses" for universal eligibility.
    pub eligible_courses: Vec<String>,
    pub deadline: Option<String>,
    pub application_link: Option<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_type_kebab_case_round_trip() {
        let t: CourseType = serde_json::from_str("\"tesda\"").unwrap();
        assert_eq!(t, CourseType::Tesda);
        assert_eq!(serde_json::to_string(&CourseType::College).unwrap(), "\"college\"");
    }

    #[test]
    fn test_scholarship_type_need_based_spelling() {
        let t: ScholarshipType = serde_json::from_str("\"need-based\"").unwrap();
        assert_eq!(t, ScholarshipType::NeedBased);
        assert_eq!(t.as_str(), "need-based");
    }
}
