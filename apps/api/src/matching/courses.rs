//! Course scoring — ranks the course catalog against a profile's skills and
//! interests.
//!
//! Scoring policy (fixed product constants, do not tune casually):
//! - +2 for every (user skill, course skill tag) pair that matches by
//!   bidirectional substring. Pairs count independently — one user skill hitting
//!   three tags adds 6.
//! - +1 per user interest found in the course's category, name, or description.
//!   The three fields form one OR-condition, so an interest adds at most 1.
//!
//! Courses scoring 0 are dropped; the rest are sorted by score descending with
//! catalog order breaking ties (stable sort), truncated to `MAX_COURSE_MATCHES`.

use serde::Serialize;

use crate::matching::text::{contains_fold, overlaps_fold};
use crate::models::catalog::CourseRow;

pub const MAX_COURSE_MATCHES: usize = 10;

const SKILL_WEIGHT: i32 = 2;
const INTEREST_WEIGHT: i32 = 1;

/// A course paired with its relevance score for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: CourseRow,
    pub match_score: i32,
}

/// Ranks `courses` against the given skills and interests.
///
/// `preferred_type` of "college" or "tesda" restricts the candidate set first;
/// "both" (or `None`) disables the filter. Empty skills and interests yield an
/// empty result — every course scores 0.
pub fn match_courses(
    courses: &[CourseRow],
    skills: &[String],
    interests: &[String],
    preferred_type: Option<&str>,
) -> Vec<ScoredCourse> {
    let type_filter = preferred_type.filter(|t| *t != "both");

    let mut scored: Vec<ScoredCourse> = courses
        .iter()
        .filter(|course| type_filter.map_or(true, |t| course.course_type == t))
        .map(|course| ScoredCourse {
            match_score: score_course(course, skills, interests),
            course: course.clone(),
        })
        .filter(|sc| sc.match_score > 0)
        .collect();

    // Stable sort keeps catalog order for equal scores.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_COURSE_MATCHES);
    scored
}

fn score_course(course: &CourseRow, skills: &[String], interests: &[String]) -> i32 {
    let mut score = 0;

    for skill in skills {
        for tag in &course.skills {
            if overlaps_fold(skill, tag) {
                score += SKILL_WEIGHT;
            }
        }
    }

    for interest in interests {
        if contains_fold(&course.category, interest)
            || contains_fold(&course.name, interest)
            || contains_fold(&course.description, interest)
        {
            score += INTEREST_WEIGHT;
        }
    }

    score
}
