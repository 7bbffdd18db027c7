pub use client::UpstreamClient;
pub use config::Config;
pub use day::Day;
pub use error::{MatchdayError, Result};
pub use repo::{MatchRepository, MemoryMatchStore};
pub use sync::{sync_fixtures, SeasonRef, SyncOutcome};

pub mod client;
pub mod config;
pub mod day;
pub mod error;
pub mod http;
pub mod model;
pub mod page;
pub mod repo;
pub mod sync;
