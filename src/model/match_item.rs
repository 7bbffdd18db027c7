use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Lifecycle of a fixture as reported by the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Finished,
    Canceled,
    Postponed,
}

impl MatchStatus {
    /// Map an upstream status string onto the known set.
    ///
    /// Providers occasionally emit statuses we do not track (suspended,
    /// interrupted); those are treated as not started so the fixture
    /// stays visible until the next sync settles it.
    pub fn from_upstream(kind: &str) -> Self {
        kind.parse().unwrap_or(MatchStatus::NotStarted)
    }
}

/// A single fixture as stored in the repository.
///
/// The listing page consumes the projection {match_time, country,
/// tournament, home, away}; the remaining fields drive repository
/// ordering and sync bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: u32,
    pub match_time: DateTime<Utc>,
    pub country: String,
    pub tournament: String,
    pub home: String,
    pub away: String,
    pub user_count: u32,
    pub status: MatchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_upstream_statuses() {
        assert_eq!(MatchStatus::from_upstream("notstarted"), MatchStatus::NotStarted);
        assert_eq!(MatchStatus::from_upstream("inprogress"), MatchStatus::InProgress);
        assert_eq!(MatchStatus::from_upstream("finished"), MatchStatus::Finished);
        assert_eq!(MatchStatus::from_upstream("canceled"), MatchStatus::Canceled);
        assert_eq!(MatchStatus::from_upstream("postponed"), MatchStatus::Postponed);
    }

    #[test]
    fn unknown_statuses_fall_back_to_not_started() {
        assert_eq!(MatchStatus::from_upstream("suspended"), MatchStatus::NotStarted);
        assert_eq!(MatchStatus::from_upstream(""), MatchStatus::NotStarted);
    }
}
