use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The 17 administrative regions of the Philippines. Profile location and school
/// region are restricted to this vocabulary.
pub const REGIONS: [&str; 17] = [
    "Metro Manila",
    "Cordillera Administrative Region",
    "Ilocos Region",
    "Cagayan Valley",
    "Central Luzon",
    "Calabarzon",
    "Mimaropa",
    "Bicol Region",
    "Western Visayas",
    "Central Visayas",
    "Eastern Visayas",
    "Zamboanga Peninsula",
    "Northern Mindanao",
    "Davao Region",
    "Soccsksargen",
    "Caraga",
    "BARMM",
];

/// Exact match against the region list — region is an index field, not free text.
pub fn is_known_region(region: &str) -> bool {
    REGIONS.contains(&region)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    College,
    Graduate,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high-school",
            EducationLevel::College => "college",
            EducationLevel::Graduate => "graduate",
        }
    }
}

/// Which catalog segment the student wants matched. `Both` disables the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredType {
    College,
    Tesda,
    Both,
}

impl PreferredType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredType::College => "college",
            PreferredType::Tesda => "tesda",
            PreferredType::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

/// One profile per user (UNIQUE on user_id). Mutable only through full-replace upsert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
    pub education_level: String,
    pub preferred_type: String,
    pub budget: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
