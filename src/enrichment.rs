use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::{config::ProviderConfig, error::EnrichError, session::SessionState, AppState};

pub fn make_router() -> Router<AppState> {
    Router::new()
        .route("/session", post(enrich_session))
        .route("/provider", get(provider_info))
}

/// Take a session from the proxy, fill in its identity from the provider
/// and hand it back.
pub async fn enrich_session(
    State(app_state): State<AppState>,
    Json(mut session): Json<SessionState>,
) -> Result<Json<SessionState>, EnrichError> {
    app_state.provider.enrich_session(&mut session).await?;
    tracing::debug!(
        "enriched session for {} via {}",
        session.email,
        app_state.provider.data().name
    );

    Ok(Json(session))
}

pub async fn provider_info(State(app_state): State<AppState>) -> Json<ProviderConfig> {
    Json(app_state.provider.data().clone())
}
