use std::{str::FromStr, sync::Arc, time::Duration};

use axum::{http::HeaderName, routing::any, Router};
use clap::Parser;
use providers::Provider;
use tokio::net::TcpListener;

mod args;
mod config;
mod enrichment;
mod error;
mod providers;
mod session;
mod validate;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn Provider>,

    pub email_header: HeaderName,
    pub groups_header: HeaderName,
}

impl AppState {
    #[cfg(test)]
    pub fn test_value(server: &httpmock::MockServer) -> Self {
        use openidconnect::UserInfoUrl;

        let overrides = config::ProviderOverrides {
            profile_url: Some(UserInfoUrl::new(server.url("/api/settings")).unwrap()),
            ..Default::default()
        };
        AppState {
            provider: providers::ProviderKind::System76.build(overrides, reqwest::Client::new()),
            email_header: HeaderName::from_static("x-auth-request-email"),
            groups_header: HeaderName::from_static("x-auth-request-groups"),
        }
    }
}

pub fn make_app(app_state: AppState, api_path: &str) -> Router {
    axum::Router::new()
        .nest(api_path, enrichment::make_router())
        .fallback(any(validate::check_token))
        .with_state(app_state)
        // add logging
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                tower_http::trace::DefaultMakeSpan::default().level(tracing::Level::DEBUG),
            ),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = args::Args::parse();

    let overrides = args
        .provider_overrides()
        .expect("invalid provider URL override");

    let email_header =
        HeaderName::from_str(&args.email_header).expect("invalid email header name");
    let groups_header =
        HeaderName::from_str(&args.groups_header).expect("invalid groups header name");

    let http_client = {
        let builder = reqwest::Client::builder();

        // Following redirects opens the client up to SSRF vulnerabilities.
        let builder = builder.redirect(reqwest::redirect::Policy::none());
        let builder = builder.timeout(Duration::from_secs(args.timeout_secs));

        builder.build().expect("failed to build http client")
    };

    let provider = args.provider.build(overrides, http_client);
    {
        let data = provider.data();
        tracing::info!("provider: {}", data.name);
        tracing::info!("login URL: {}", data.login_url.as_str());
        tracing::info!("redeem URL: {}", data.redeem_url.as_str());
        tracing::info!("profile URL: {}", data.profile_url.as_str());
        match &data.validate_url {
            Some(url) => tracing::info!("validate URL: {}", url.as_str()),
            None => tracing::info!("no validate URL"),
        }
        tracing::info!("scope: {}", data.scope.as_str());
    }

    let app_state = AppState {
        provider,
        email_header,
        groups_header,
    };

    let app = make_app(app_state, &args.api_path);

    tracing::info!("listening on {}", args.http_listen);
    axum::serve(
        TcpListener::bind(&args.http_listen)
            .await
            .expect("failed to bind to listen port"),
        app.into_make_service(),
    )
    .await
    .expect("failed to serve HTTP");
}
