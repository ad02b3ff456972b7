//! Prompt constants and builders for the guidance counselor persona.

use crate::matching::ScoredCourse;
use crate::models::catalog::{ScholarshipRow, SchoolRow};
use crate::models::profile::ProfileRow;
use crate::recommend::ChatContext;

/// How many entries of each result set are excerpted into the prompt.
pub const PROMPT_EXCERPT: usize = 3;

pub const COUNSELOR_SYSTEM: &str = "You are Gabay, a friendly and knowledgeable AI career \
    guidance counselor specializing in the Philippine education system. You help students \
    make informed decisions about their academic and career paths.";

pub const CHAT_SYSTEM_BASE: &str = "You are Gabay, a friendly AI career guidance counselor \
    for Filipino students. You help with:\n\
    - Course and career recommendations\n\
    - School selection advice\n\
    - Scholarship guidance\n\
    - Study tips and motivation\n\
    - Philippine education system information\n\n\
    Keep responses helpful, encouraging, and specific to the Philippine context.";

/// Static substitute used when the generator runs in offline mode. No
/// interpolation — the text is fixed regardless of the profile.
pub const OFFLINE_ADVICE: &str = "\
Gabay's Insights (Offline Mode):

1. Based on your skills and interests, consider focusing on practical short courses to build experience.
2. Research local schools in your area — many offer affordable programs.
3. Explore TESDA or CHED-accredited programs for quality education.
4. Apply for government scholarships (CHED, DOST, or LGU-based).
5. Stay consistent with your learning journey — you're on the right track!";

pub const OFFLINE_CHAT_REPLY: &str = "\
Gabay (Offline Mode): Thank you for your message! \
I'm currently offline and can't process AI chat right now, but keep pursuing your goals with confidence. \
Check back soon for personalized advice.";

/// Fallback when the live generator returns empty advice content.
pub const ADVICE_EMPTY_FALLBACK: &str = "Unable to generate insights at this time.";

/// Fallback when the live generator returns an empty chat reply.
pub const CHAT_EMPTY_FALLBACK: &str =
    "I'm sorry, I couldn't process your message right now. Please try again.";

/// Builds the recommendation analysis prompt from the profile and the top-3
/// excerpt of each deterministic result set.
pub fn build_recommendation_prompt(
    profile: &ProfileRow,
    courses: &[ScoredCourse],
    schools: &[SchoolRow],
    scholarships: &[ScholarshipRow],
) -> String {
    let course_lines: Vec<String> = courses
        .iter()
        .take(PROMPT_EXCERPT)
        .map(|c| {
            format!(
                "- {} ({}): {}",
                c.course.name, c.course.course_type, c.course.description
            )
        })
        .collect();

    let school_lines: Vec<String> = schools
        .iter()
        .take(PROMPT_EXCERPT)
        .map(|s| format!("- {} ({})", s.name, s.location))
        .collect();

    let scholarship_lines: Vec<String> = scholarships
        .iter()
        .take(PROMPT_EXCERPT)
        .map(|s| format!("- {}: {}", s.name, s.amount))
        .collect();

    format!(
        "As Gabay, an AI career guidance counselor for Filipino students, analyze this \
         student profile and provide personalized recommendations:\n\n\
         Student Profile:\n\
         - Skills: {skills}\n\
         - Interests: {interests}\n\
         - Location: {location}\n\
         - Education Level: {education_level}\n\
         - Preferred Type: {preferred_type}\n\n\
         Top Course Matches:\n{courses}\n\n\
         Available Schools:\n{schools}\n\n\
         Scholarship Opportunities:\n{scholarships}\n\n\
         Provide a comprehensive analysis including:\n\
         1. Why these courses match the student's profile\n\
         2. Career outlook and salary expectations\n\
         3. Recommended learning path\n\
         4. Tips for scholarship applications\n\
         5. Next steps to take\n\n\
         Keep the response encouraging, practical, and specific to the Philippine \
         education system.",
        skills = profile.skills.join(", "),
        interests = profile.interests.join(", "),
        location = profile.location,
        education_level = profile.education_level,
        preferred_type = profile.preferred_type,
        courses = course_lines.join("\n"),
        schools = school_lines.join("\n"),
        scholarships = scholarship_lines.join("\n"),
    )
}

/// Builds the chat system instruction, appending the student's context when the
/// client supplies one.
pub fn build_chat_system(context: Option<&ChatContext>) -> String {
    match context {
        None => CHAT_SYSTEM_BASE.to_string(),
        Some(ctx) => format!(
            "{CHAT_SYSTEM_BASE}\n\n\
             Student context:\n\
             - Skills: {}\n\
             - Interests: {}\n\
             - Location: {}",
            ctx.skills.join(", "),
            ctx.interests.join(", "),
            ctx.location,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_profile() -> ProfileRow {
        ProfileRow {
            id: 1,
            user_id: Uuid::new_v4(),
            skills: vec!["programming".to_string(), "logic".to_string()],
            interests: vec!["Technology".to_string()],
            location: "Metro Manila".to_string(),
            education_level: "high-school".to_string(),
            preferred_type: "college".to_string(),
            budget: Some("low".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_recommendation_prompt_embeds_profile_fields() {
        let prompt = build_recommendation_prompt(&make_profile(), &[], &[], &[]);
        assert!(prompt.contains("programming, logic"));
        assert!(prompt.contains("Metro Manila"));
        assert!(prompt.contains("high-school"));
        assert!(prompt.contains("Top Course Matches:"));
    }

    #[test]
    fn test_chat_system_without_context_is_base() {
        assert_eq!(build_chat_system(None), CHAT_SYSTEM_BASE);
    }

    #[test]
    fn test_chat_system_with_context_appends_block() {
        let ctx = ChatContext {
            skills: vec!["drawing".to_string()],
            interests: vec!["art".to_string()],
            location: "Central Visayas".to_string(),
        };
        let system = build_chat_system(Some(&ctx));
        assert!(system.starts_with(CHAT_SYSTEM_BASE));
        assert!(system.contains("Student context:"));
        assert!(system.contains("drawing"));
        assert!(system.contains("Central Visayas"));
    }

    #[test]
    fn test_offline_templates_are_static() {
        assert!(OFFLINE_ADVICE.contains("Offline Mode"));
        assert!(OFFLINE_CHAT_REPLY.contains("Offline Mode"));
    }
}
