pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/score", post(handlers::score_text))
        .route("/leads/score", post(handlers::score_lead))
}
