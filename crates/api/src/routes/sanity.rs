use axum::routing::get;
use axum::Router;

use crate::response::Envelope;
use crate::state::AppState;

/// Fixed message returned by the liveness probe.
pub const SANITY_MESSAGE: &str = "This is JSON from the backend!";

/// GET /api/sanity -- always answers with a success envelope.
async fn sanity() -> Envelope<()> {
    Envelope::message(SANITY_MESSAGE)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/sanity", get(sanity))
}
