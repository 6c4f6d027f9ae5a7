use crate::activity::Activity;
use crate::comment::Comment;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
pub enum TimeRange {
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
    #[default]
    #[serde(rename = "7days")]
    #[strum(serialize = "7days")]
    SevenDays,
    #[serde(rename = "30days")]
    #[strum(serialize = "30days")]
    ThirtyDays,
}

#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserStats {
    pub username: String,
    pub materials_viewed: u64,
    pub videos_watched: u64,
    pub quizzes_taken: u64,
    pub last_active: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSummary {
    pub total_users: u64,
    pub active_users_today: u64,
    pub total_page_views: u64,
    pub total_quiz_attempts: u64,
    pub total_material_views: u64,
    pub total_video_views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Analytics {
    pub range: TimeRange,
    pub summary: AnalyticsSummary,
    pub users: Vec<UserStats>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardCounts {
    pub materials: u64,
    pub posters: u64,
    pub leaflets: u64,
    pub videos: u64,
    pub users: u64,
    pub comments: u64,
    pub total_views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    pub counts: DashboardCounts,
    pub recent_comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_names() {
        assert_eq!(TimeRange::ThirtyDays, serde_json::from_str(r#""30days""#).unwrap());
        assert_eq!(r#""all""#, serde_json::to_string(&TimeRange::All).unwrap());
        assert_eq!("7days", TimeRange::SevenDays.to_string());
    }
}
