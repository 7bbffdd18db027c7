use std::str::FromStr;

use chrono::FixedOffset;

use crate::error::{MatchdayError, Result};
use crate::sync::SeasonRef;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_URL: &str = "https://www.sofascore.com/api/v1";
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 3600;

/// Runtime configuration, read from the environment (a `.env` file is
/// honored if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub upstream_base_url: String,
    /// Reference timezone for day bucketing and kickoff display.
    pub offset: FixedOffset,
    /// Seasons the sync keeps fresh, `tournament:season` pairs.
    pub seasons: Vec<SeasonRef>,
    pub sync_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env_or("MATCHDAY_BIND_ADDR", DEFAULT_BIND_ADDR);
        let upstream_base_url = env_or("MATCHDAY_UPSTREAM_URL", DEFAULT_UPSTREAM_URL);
        let offset_hours: i32 = parse_env("MATCHDAY_UTC_OFFSET_HOURS", 0)?;
        let offset = offset_from_hours(offset_hours)?;
        let seasons = parse_seasons(&env_or("MATCHDAY_SEASONS", ""))?;
        let sync_interval_secs =
            parse_env("MATCHDAY_SYNC_INTERVAL_SECS", DEFAULT_SYNC_INTERVAL_SECS)?;

        Ok(Self {
            bind_addr,
            upstream_base_url,
            offset,
            seasons,
            sync_interval_secs,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| MatchdayError::Config {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or(MatchdayError::Config {
            name: "MATCHDAY_UTC_OFFSET_HOURS",
            reason: format!("{hours} is outside the valid offset range"),
        })
}

/// Parse a comma-separated list of `tournament:season` id pairs.
fn parse_seasons(raw: &str) -> Result<Vec<SeasonRef>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (tournament, season) = pair.split_once(':').ok_or(MatchdayError::Config {
                name: "MATCHDAY_SEASONS",
                reason: format!("expected tournament:season, got {pair:?}"),
            })?;
            Ok(SeasonRef {
                tournament_id: parse_id(tournament)?,
                season_id: parse_id(season)?,
            })
        })
        .collect()
}

fn parse_id(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| MatchdayError::Config {
        name: "MATCHDAY_SEASONS",
        reason: format!("{raw:?} is not a numeric id"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_season_pairs() {
        let seasons = parse_seasons("17:61627, 8:61643").unwrap();
        assert_eq!(
            seasons,
            vec![
                SeasonRef {
                    tournament_id: 17,
                    season_id: 61627
                },
                SeasonRef {
                    tournament_id: 8,
                    season_id: 61643
                },
            ]
        );
    }

    #[test]
    fn empty_season_list_is_fine() {
        assert!(parse_seasons("").unwrap().is_empty());
        assert!(parse_seasons(" , ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_season_pairs() {
        for raw in ["17", "17:abc", "x:61627"] {
            let err = parse_seasons(raw).unwrap_err();
            assert!(matches!(err, MatchdayError::Config { .. }), "{raw:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        assert!(offset_from_hours(2).is_ok());
        assert!(offset_from_hours(-5).is_ok());
        assert!(offset_from_hours(30).is_err());
    }

    #[test]
    fn huge_offsets_error_instead_of_overflowing() {
        assert!(offset_from_hours(1_000_000).is_err());
        assert!(offset_from_hours(i32::MAX).is_err());
        assert!(offset_from_hours(i32::MIN).is_err());
    }
}
