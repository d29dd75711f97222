use openidconnect::{AuthUrl, IntrospectionUrl, Scope, TokenUrl, UserInfoUrl};

use crate::{config::ProviderOverrides, providers::ProviderKind};

#[derive(clap::Parser, Debug, Clone)]
pub struct Args {
    /// Identity provider to enrich sessions from
    #[clap(long = "provider", short = 'p', value_enum, default_value = "system76")]
    pub provider: ProviderKind,

    /// Display name of the provider, overrides the built-in name
    #[clap(long = "provider-name")]
    pub provider_name: Option<String>,

    /// OAuth authorization endpoint, overrides the provider default
    #[clap(long = "login-url")]
    pub login_url: Option<String>,

    /// OAuth token endpoint, overrides the provider default
    #[clap(long = "redeem-url")]
    pub redeem_url: Option<String>,

    /// Endpoint queried with the access token to enrich sessions
    #[clap(long = "profile-url")]
    pub profile_url: Option<String>,

    /// Token validation endpoint, if the provider has one
    #[clap(long = "validate-url")]
    pub validate_url: Option<String>,

    /// OAuth scope to request, overrides the provider default
    #[clap(long = "scope")]
    pub scope: Option<String>,

    /// Socket address to listen on
    #[clap(long = "listen", short = 'l', default_value = "0.0.0.0:8080")]
    pub http_listen: String,

    /// Path for the enrichment API
    #[clap(long = "api-path", short = 'a', default_value = "/_enrich")]
    pub api_path: String,

    /// Response header carrying the user's email on successful forward-auth
    #[clap(long = "email-header", default_value = "X-Auth-Request-Email")]
    pub email_header: String,

    /// Response header carrying the user's groups, comma separated
    #[clap(long = "groups-header", default_value = "X-Auth-Request-Groups")]
    pub groups_header: String,

    /// Timeout in seconds for requests to the provider
    #[clap(long = "timeout", short = 't', default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Args {
    /// Parse the provider overrides given on the command line.
    pub fn provider_overrides(&self) -> Result<ProviderOverrides, url::ParseError> {
        Ok(ProviderOverrides {
            name: self.provider_name.clone(),
            login_url: self.login_url.clone().map(AuthUrl::new).transpose()?,
            redeem_url: self.redeem_url.clone().map(TokenUrl::new).transpose()?,
            profile_url: self.profile_url.clone().map(UserInfoUrl::new).transpose()?,
            validate_url: self
                .validate_url
                .clone()
                .map(IntrospectionUrl::new)
                .transpose()?,
            scope: self.scope.clone().map(Scope::new),
        })
    }
}
