use chrono::{Days, NaiveDate};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{MatchdayError, Result};

/// Symbolic day selector used by the listing page navigation.
///
/// The page only ever emits these three literal tokens, so anything
/// else is rejected rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Day {
    Yesterday,
    #[default]
    Today,
    Tomorrow,
}

impl Day {
    /// Parse a day token from a request path segment.
    pub fn parse(token: &str) -> Result<Self> {
        token
            .parse()
            .map_err(|_| MatchdayError::InvalidDayToken {
                token: token.to_owned(),
            })
    }

    /// Map the token to a concrete calendar date relative to `today`.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Day::Yesterday => today - Days::new(1),
            Day::Today => today,
            Day::Tomorrow => today + Days::new(1),
        }
    }
}
