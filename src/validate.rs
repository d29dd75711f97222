use axum::http::{header, StatusCode};
use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use openidconnect::AccessToken;

use crate::{session::SessionState, AppState};

fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(AccessToken::new(token.to_string()))
}

/// Read the bearer token from the request
/// and ask the provider who it belongs to.
/// If the provider knows, return the identity as headers,
/// else return 401 so the proxy denies the request.
pub async fn check_token(State(app_state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        tracing::debug!("no bearer token in request");
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            "missing bearer token",
        )
            .into_response();
    };

    let mut session = SessionState::new(token);
    if let Err(why) = app_state.provider.enrich_session(&mut session).await {
        tracing::info!("rejecting request: {}", why);
        return why.into_response();
    }

    let mut response_headers = HeaderMap::new();
    match HeaderValue::from_str(&session.email) {
        Ok(value) => {
            response_headers.insert(app_state.email_header.clone(), value);
        }
        Err(e) => {
            tracing::warn!("email {:?} is not a valid header value: {}", session.email, e);
            return (StatusCode::BAD_GATEWAY, "provider returned an unusable email")
                .into_response();
        }
    }
    if !session.groups.is_empty() {
        match HeaderValue::from_str(&session.groups.join(",")) {
            Ok(value) => {
                response_headers.insert(app_state.groups_header.clone(), value);
            }
            Err(e) => {
                tracing::warn!("groups are not a valid header value: {}", e);
                return (StatusCode::BAD_GATEWAY, "provider returned unusable groups")
                    .into_response();
            }
        }
    }

    (StatusCode::OK, response_headers).into_response()
}
