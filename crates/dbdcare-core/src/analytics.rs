//! Aggregation of activity logs into the admin analytics view.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use dbdcare_model::activity::{Action, Activity};
use dbdcare_model::analytics::{Analytics, AnalyticsSummary, TimeRange, UserStats};
use indexmap::IndexMap;
use std::collections::HashSet;

pub const RECENT_ACTIVITY_LIMIT: usize = 50;

/// Oldest timestamp inside `range`, `None` for the whole history.
#[must_use]
pub fn range_start(range: TimeRange, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match range {
        TimeRange::All => None,
        TimeRange::SevenDays => Some(now - Duration::days(7)),
        TimeRange::ThirtyDays => Some(now - Duration::days(30)),
    }
}

fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// `activities` must already be limited to `range`. Users are ordered by their last activity.
#[must_use]
pub fn aggregate(range: TimeRange, mut activities: Vec<Activity>, total_users: u64, now: NaiveDateTime) -> Analytics {
    activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let today = start_of_day(now);
    let mut summary = AnalyticsSummary {
        total_users,
        ..Default::default()
    };
    let mut active_today = HashSet::new();
    let mut users: IndexMap<&str, UserStats> = IndexMap::new();

    for activity in &activities {
        let stats = users.entry(activity.username.as_str()).or_insert_with(|| UserStats {
            username: activity.username.clone(),
            materials_viewed: 0,
            videos_watched: 0,
            quizzes_taken: 0,
            last_active: activity.created_at,
        });
        match activity.action {
            Action::PageVisit => summary.total_page_views += 1,
            Action::MaterialView => {
                summary.total_material_views += 1;
                stats.materials_viewed += 1;
            }
            Action::VideoPlay => {
                summary.total_video_views += 1;
                stats.videos_watched += 1;
            }
            Action::QuizComplete => {
                summary.total_quiz_attempts += 1;
                stats.quizzes_taken += 1;
            }
            Action::PosterDownload | Action::QuizStart => {}
        }
        if activity.created_at >= today {
            active_today.insert(activity.username.as_str());
        }
    }
    summary.active_users_today = active_today.len() as u64;

    let users = users.into_values().collect();
    activities.truncate(RECENT_ACTIVITY_LIMIT);
    Analytics {
        range,
        summary,
        users,
        recent_activity: activities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 10)
            .and_then(|date| date.and_hms_opt(15, 0, 0))
            .unwrap()
    }

    fn activity(username: &str, action: Action, hours_ago: i64) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            action,
            target: "test".to_owned(),
            target_id: None,
            metadata: None,
            created_at: now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn test_range_start() {
        assert_eq!(range_start(TimeRange::All, now()), None);
        assert_eq!(range_start(TimeRange::SevenDays, now()), Some(now() - Duration::days(7)));
        assert_eq!(range_start(TimeRange::ThirtyDays, now()), Some(now() - Duration::days(30)));
    }

    #[test]
    fn test_aggregate() {
        let activities = vec![
            activity("budi", Action::MaterialView, 30),
            activity("siti", Action::QuizComplete, 1),
            activity("budi", Action::VideoPlay, 2),
            activity("budi", Action::PageVisit, 20),
            activity("siti", Action::MaterialView, 40),
        ];
        let analytics = aggregate(TimeRange::SevenDays, activities, 5, now());

        assert_eq!(analytics.summary.total_users, 5);
        assert_eq!(analytics.summary.active_users_today, 2);
        assert_eq!(analytics.summary.total_page_views, 1);
        assert_eq!(analytics.summary.total_quiz_attempts, 1);
        assert_eq!(analytics.summary.total_material_views, 2);
        assert_eq!(analytics.summary.total_video_views, 1);

        assert_eq!(analytics.users.len(), 2);
        let siti = &analytics.users[0];
        assert_eq!(siti.username, "siti");
        assert_eq!(siti.quizzes_taken, 1);
        assert_eq!(siti.materials_viewed, 1);
        assert_eq!(siti.last_active, now() - Duration::hours(1));
        let budi = &analytics.users[1];
        assert_eq!(budi.materials_viewed, 1);
        assert_eq!(budi.videos_watched, 1);

        assert_eq!(analytics.recent_activity[0].username, "siti");
        assert_eq!(analytics.recent_activity.len(), 5);
    }

    #[test]
    fn test_active_today_starts_at_midnight() {
        let activities = vec![activity("budi", Action::PageVisit, 16)];
        let analytics = aggregate(TimeRange::All, activities, 1, now());
        assert_eq!(analytics.summary.active_users_today, 0);
    }

    #[test]
    fn test_recent_activity_limit() {
        let activities = (0..60).map(|hours| activity("budi", Action::PageVisit, hours)).collect();
        let analytics = aggregate(TimeRange::All, activities, 1, now());
        assert_eq!(analytics.recent_activity.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(analytics.summary.total_page_views, 60);
    }

    #[test]
    fn test_empty() {
        let analytics = aggregate(TimeRange::All, Vec::new(), 0, now());
        assert_eq!(analytics.summary, AnalyticsSummary::default());
        assert!(analytics.users.is_empty());
    }
}
