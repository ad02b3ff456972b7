//! Matching engine — pure functions over catalog snapshots.
//!
//! No I/O here: callers fetch a catalog snapshot (or a test fixture) and pass
//! slices in. All comparisons go through the shared fold helpers in `text`.

pub mod courses;
pub mod scholarships;
pub mod schools;
pub mod text;

pub use courses::{match_courses, ScoredCourse, MAX_COURSE_MATCHES};
pub use scholarships::{match_scholarships, ALL_COURSES_SENTINEL};
pub use schools::schools_by_course;
