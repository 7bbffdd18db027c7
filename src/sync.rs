use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument, warn};

use crate::client::UpstreamClient;
use crate::error::Result;
use crate::model::{Match, MatchStatus, UpstreamFixture};
use crate::repo::MemoryMatchStore;

/// Fixtures starting beyond this horizon are left for a later run.
const SYNC_HORIZON_DAYS: i64 = 20;

/// One (tournament, season) pair tracked by the sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRef {
    pub tournament_id: u32,
    pub season_id: u32,
}

/// Counters reported by one sync run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub inserted: usize,
    pub updated: usize,
    pub pruned: usize,
}

/// Refresh the store from the upstream feed.
///
/// Each tracked season is fetched independently; a failed fetch is
/// logged and the run continues with the remaining seasons. After all
/// seasons are applied, obsolete matches are pruned.
#[instrument(skip_all, fields(seasons = seasons.len()))]
pub async fn sync_fixtures(
    client: &UpstreamClient,
    store: &MemoryMatchStore,
    seasons: &[SeasonRef],
    now: DateTime<Utc>,
) -> Result<SyncOutcome> {
    let mut outcome = SyncOutcome::default();
    for season in seasons {
        match client
            .fetch_fixtures(season.tournament_id, season.season_id)
            .await
        {
            Ok(fixtures) => apply_fixtures(store, &fixtures, now, &mut outcome)?,
            Err(err) => warn!(
                tournament_id = season.tournament_id,
                season_id = season.season_id,
                %err,
                "skipping season, fixtures fetch failed"
            ),
        }
    }
    outcome.pruned = store.prune(now)?;
    info!(
        inserted = outcome.inserted,
        updated = outcome.updated,
        pruned = outcome.pruned,
        "fixtures sync finished"
    );
    Ok(outcome)
}

/// Fold fetched fixtures into the store: insert unseen ones, rewrite
/// ones whose kickoff or status changed, ignore the rest.
fn apply_fixtures(
    store: &MemoryMatchStore,
    fixtures: &[UpstreamFixture],
    now: DateTime<Utc>,
    outcome: &mut SyncOutcome,
) -> Result<()> {
    let horizon = now + Duration::days(SYNC_HORIZON_DAYS);
    for fixture in fixtures {
        let Some(match_time) = DateTime::from_timestamp(fixture.start_timestamp, 0) else {
            warn!(id = fixture.id, timestamp = fixture.start_timestamp, "fixture has out-of-range kickoff, skipping");
            continue;
        };
        if match_time >= horizon {
            continue;
        }
        let incoming = to_match(fixture, match_time);
        match store.get(incoming.id)? {
            None => {
                store.upsert(incoming)?;
                outcome.inserted += 1;
            }
            Some(existing) => {
                if existing.match_time != incoming.match_time || existing.status != incoming.status {
                    store.upsert(incoming)?;
                    outcome.updated += 1;
                }
            }
        }
    }
    Ok(())
}

fn to_match(fixture: &UpstreamFixture, match_time: DateTime<Utc>) -> Match {
    Match {
        id: fixture.id,
        match_time,
        country: fixture.tournament.category.name.clone(),
        tournament: fixture.tournament.name.clone(),
        home: fixture.home_team.name.clone(),
        away: fixture.away_team.name.clone(),
        user_count: fixture.user_count,
        status: MatchStatus::from_upstream(&fixture.status.kind),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::*;
    use crate::model::{UpstreamCategory, UpstreamStatus, UpstreamTeam, UpstreamTournament};

    fn store() -> MemoryMatchStore {
        MemoryMatchStore::new(FixedOffset::east_opt(0).unwrap())
    }

    fn upstream(id: u32, start: DateTime<Utc>, status: &str) -> UpstreamFixture {
        UpstreamFixture {
            id,
            start_timestamp: start.timestamp(),
            home_team: UpstreamTeam {
                name: "Arsenal".to_owned(),
            },
            away_team: UpstreamTeam {
                name: "Chelsea".to_owned(),
            },
            tournament: UpstreamTournament {
                name: "Premier League".to_owned(),
                category: UpstreamCategory {
                    name: "England".to_owned(),
                },
            },
            status: UpstreamStatus {
                kind: status.to_owned(),
            },
            user_count: 100,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn inserts_unseen_fixtures_within_the_horizon() {
        let store = store();
        let mut outcome = SyncOutcome::default();
        let fixtures = vec![
            upstream(1, now() + Duration::days(1), "notstarted"),
            upstream(2, now() + Duration::days(19), "notstarted"),
        ];

        apply_fixtures(&store, &fixtures, now(), &mut outcome).unwrap();
        assert_eq!(outcome.inserted, 2);
        assert_eq!(store.len(), 2);

        let stored = store.get(1).unwrap().unwrap();
        assert_eq!(stored.country, "England");
        assert_eq!(stored.tournament, "Premier League");
        assert_eq!(stored.home, "Arsenal");
        assert_eq!(stored.away, "Chelsea");
        assert_eq!(stored.user_count, 100);
    }

    #[test]
    fn skips_fixtures_beyond_the_horizon() {
        let store = store();
        let mut outcome = SyncOutcome::default();
        let fixtures = vec![upstream(1, now() + Duration::days(25), "notstarted")];

        apply_fixtures(&store, &fixtures, now(), &mut outcome).unwrap();
        assert_eq!(outcome.inserted, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn rewrites_fixtures_whose_time_or_status_changed() {
        let store = store();
        let mut outcome = SyncOutcome::default();
        let original = upstream(1, now() + Duration::days(1), "notstarted");
        apply_fixtures(&store, &[original.clone()], now(), &mut outcome).unwrap();

        // Unchanged fixture is not rewritten.
        apply_fixtures(&store, &[original], now(), &mut outcome).unwrap();
        assert_eq!(outcome.updated, 0);

        let moved = upstream(1, now() + Duration::days(2), "notstarted");
        apply_fixtures(&store, &[moved], now(), &mut outcome).unwrap();
        assert_eq!(outcome.updated, 1);

        let started = upstream(1, now() + Duration::days(2), "inprogress");
        apply_fixtures(&store, &[started], now(), &mut outcome).unwrap();
        assert_eq!(outcome.updated, 2);
        assert_eq!(
            store.get(1).unwrap().unwrap().status,
            MatchStatus::InProgress
        );
    }

    #[tokio::test]
    async fn sync_continues_past_failing_seasons() {
        use axum::extract::Path;
        use axum::http::StatusCode;
        use axum::response::IntoResponse;
        use axum::routing::get;
        use axum::{Json, Router};

        use crate::client::UpstreamClient;

        let kickoff = (now() + Duration::days(1)).timestamp();
        let app = Router::new().route(
            "/unique-tournament/{tournament}/season/{season}/events/next/0",
            get(move |Path((tournament, _season)): Path<(u32, u32)>| async move {
                match tournament {
                    // Healthy season with a single upcoming fixture.
                    17 => Json(serde_json::json!({
                        "events": [{
                            "id": 1,
                            "startTimestamp": kickoff,
                            "homeTeam": {"name": "Arsenal"},
                            "awayTeam": {"name": "Chelsea"},
                            "tournament": {
                                "name": "Premier League",
                                "category": {"name": "England"}
                            },
                            "status": {"type": "notstarted"},
                            "userCount": 100
                        }]
                    }))
                    .into_response(),
                    // Season whose payload is not valid JSON.
                    23 => "upstream had a bad day".into_response(),
                    _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = UpstreamClient::new(format!("http://{addr}"));
        let store = store();
        let seasons = [
            SeasonRef {
                tournament_id: 99,
                season_id: 1,
            },
            SeasonRef {
                tournament_id: 23,
                season_id: 62408,
            },
            SeasonRef {
                tournament_id: 17,
                season_id: 61627,
            },
        ];

        let outcome = sync_fixtures(&client, &store, &seasons, now()).await.unwrap();
        assert_eq!(
            outcome,
            SyncOutcome {
                inserted: 1,
                updated: 0,
                pruned: 0
            }
        );
        assert_eq!(store.get(1).unwrap().unwrap().home, "Arsenal");
    }

    #[test]
    fn skips_fixtures_with_out_of_range_kickoff() {
        let store = store();
        let mut outcome = SyncOutcome::default();
        let mut broken = upstream(1, now(), "notstarted");
        broken.start_timestamp = i64::MAX;

        apply_fixtures(&store, &[broken], now(), &mut outcome).unwrap();
        assert_eq!(outcome, SyncOutcome::default());
        assert!(store.is_empty());
    }
}
