use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use tracing::debug;

use crate::error::{MatchdayError, Result};
use crate::model::{Match, MatchStatus};

/// Maximum rows a day listing returns, mirroring the backing query limit.
const LISTING_LIMIT: usize = 50;

/// Unfinished matches older than this are dropped at prune time.
const STALE_AFTER_DAYS: i64 = 3;

/// Read side of the match storage, as consumed by the listing page.
///
/// Ordering is the repository's concern: the page renders rows exactly
/// in the order returned here.
pub trait MatchRepository: Send + Sync {
    /// All matches whose kickoff falls on `date` in the repository's
    /// reference timezone, most-followed first, capped at the listing limit.
    fn matches_on(&self, date: NaiveDate) -> Result<Vec<Match>>;
}

/// Thread-safe in-memory match store.
///
/// Stands in for the database behind the original service: the sync
/// component owns all mutation, the page only ever reads through
/// [`MatchRepository`].
pub struct MemoryMatchStore {
    offset: FixedOffset,
    matches: RwLock<HashMap<u32, Match>>,
}

impl MemoryMatchStore {
    /// Create an empty store bucketing days in the given UTC offset.
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            matches: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a match, replacing any existing record with the same id.
    pub fn upsert(&self, m: Match) -> Result<()> {
        let mut guard = self.write()?;
        guard.insert(m.id, m);
        Ok(())
    }

    /// Look up a match by id.
    pub fn get(&self, id: u32) -> Result<Option<Match>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Drop canceled and postponed matches, plus unfinished matches
    /// whose kickoff is more than three days in the past. Returns the
    /// number of records removed.
    pub fn prune(&self, now: DateTime<Utc>) -> Result<usize> {
        let cutoff = now - Duration::days(STALE_AFTER_DAYS);
        let mut guard = self.write()?;
        let before = guard.len();
        guard.retain(|_, m| {
            !matches!(m.status, MatchStatus::Canceled | MatchStatus::Postponed)
                && !(m.match_time < cutoff && m.status != MatchStatus::Finished)
        });
        let removed = before - guard.len();
        if removed > 0 {
            debug!(removed, "pruned obsolete matches");
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<u32, Match>>> {
        self.matches
            .read()
            .map_err(|_| MatchdayError::Repository("match store lock poisoned".to_owned()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<u32, Match>>> {
        self.matches
            .write()
            .map_err(|_| MatchdayError::Repository("match store lock poisoned".to_owned()))
    }
}

impl MatchRepository for MemoryMatchStore {
    fn matches_on(&self, date: NaiveDate) -> Result<Vec<Match>> {
        let guard = self.read()?;
        let mut rows: Vec<Match> = guard
            .values()
            .filter(|m| m.match_time.with_timezone(&self.offset).date_naive() == date)
            .cloned()
            .collect();
        // Tie-break on kickoff then id so the listing is stable across syncs.
        rows.sort_by(|a, b| {
            b.user_count
                .cmp(&a.user_count)
                .then_with(|| a.match_time.cmp(&b.match_time))
                .then_with(|| a.id.cmp(&b.id))
        });
        rows.truncate(LISTING_LIMIT);
        Ok(rows)
    }
}
