use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, error};

use crate::day::Day;
use crate::page;
use crate::repo::MatchRepository;

/// Shared handler state.
///
/// The clock is injectable so tests can pin "now"; production wires in
/// [`Utc::now`].
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn MatchRepository>,
    pub offset: FixedOffset,
    pub clock: fn() -> DateTime<Utc>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/matches/{day}", get(matches_by_day_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

async fn home_handler(State(state): State<AppState>) -> Response {
    render_day(&state, Day::default())
}

async fn matches_by_day_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Response {
    match Day::parse(&token) {
        Ok(day) => render_day(&state, day),
        Err(err) => {
            debug!(%err, "rejecting day listing request");
            (StatusCode::NOT_FOUND, Html(page::render_not_found(&token))).into_response()
        }
    }
}

async fn healthz_handler() -> &'static str {
    "ok"
}

fn render_day(state: &AppState, day: Day) -> Response {
    let today = (state.clock)().with_timezone(&state.offset).date_naive();
    let date = day.resolve(today);
    match state.repo.matches_on(date) {
        Ok(matches) => {
            debug!(%day, %date, matches = matches.len(), "rendering day listing");
            Html(page::render_page(day, state.offset, &matches)).into_response()
        }
        Err(err) => {
            error!(%day, %date, %err, "match repository query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page::render_error())).into_response()
        }
    }
}
