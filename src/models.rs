use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PERSONALITY_TYPES: [&str; 16] = [
    "INTJ", "INTP", "ENTJ", "ENTP", "INFJ", "INFP", "ENFJ", "ENFP", "ISTJ", "ISFJ", "ESTJ", "ESFJ",
    "ISTP", "ISFP", "ESTP", "ESFP",
];

/// One stored survey answer as the aggregator sees it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurveyRecord {
    pub personality_type: String,
    pub college: Option<String>,
    pub major_fits: Option<bool>,
    pub would_switch: Option<bool>,
    pub enrolled: bool,
}

impl SurveyRecord {
    /// Enrolled, has a college, and answered as `personality_type`.
    pub fn is_eligible_for(&self, personality_type: &str) -> bool {
        self.enrolled && self.college.is_some() && self.personality_type == personality_type
    }
}

#[derive(Debug, Clone)]
pub struct NewResponse {
    pub school: String,
    pub enrolled: bool,
    pub personality_type: String,
    pub college: Option<String>,
    pub major_fits: Option<bool>,
    pub would_switch: Option<bool>,
    pub switch_college: Option<String>,
    pub source_key: String,
    pub submitted_at: DateTime<Utc>,
}

impl NewResponse {
    /// Respondents who are not enrolled are filed under `Other` with no answers.
    pub fn not_enrolled(school: &str, personality_type: &str) -> Self {
        Self {
            school: school.to_string(),
            enrolled: false,
            personality_type: personality_type.to_string(),
            college: Some("Other".to_string()),
            major_fits: None,
            would_switch: None,
            switch_college: None,
            source_key: format!("submit-{}", Uuid::new_v4()),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollegeStats {
    pub college: String,
    pub total_responses: usize,
    pub fit_rate: f64,
    pub switch_rate: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub recommended: Option<CollegeStats>,
    pub alternatives: Vec<CollegeStats>,
    pub total_data_points: usize,
    pub has_enough_data: bool,
    pub all_colleges: Vec<CollegeStats>,
}

impl RecommendationResult {
    pub fn empty(total_data_points: usize) -> Self {
        Self {
            recommended: None,
            alternatives: Vec::new(),
            total_data_points,
            has_enough_data: false,
            all_colleges: Vec::new(),
        }
    }
}
