use serde::Deserialize;

/// One page of the upstream fixtures feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FixturesPage {
    #[serde(default)]
    pub events: Vec<UpstreamFixture>,
}

/// A fixture as delivered by the upstream API, before it is folded
/// into the repository shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamFixture {
    pub id: u32,
    /// Unix timestamp (seconds, UTC) of kickoff.
    pub start_timestamp: i64,
    pub home_team: UpstreamTeam,
    pub away_team: UpstreamTeam,
    pub tournament: UpstreamTournament,
    pub status: UpstreamStatus,
    #[serde(default)]
    pub user_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTeam {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTournament {
    pub name: String,
    pub category: UpstreamCategory,
}

/// Grouping bucket the provider nests tournaments under; its name is
/// the country (or region) shown in the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCategory {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamStatus {
    #[serde(rename = "type")]
    pub kind: String,
}
