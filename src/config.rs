use openidconnect::{AuthUrl, IntrospectionUrl, Scope, TokenUrl, UserInfoUrl};
use serde::Serialize;

/// Well-known endpoints and scope for one provider, as static strings.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDefaults {
    pub name: &'static str,
    pub login_url: &'static str,
    pub redeem_url: &'static str,
    pub profile_url: &'static str,
    pub validate_url: Option<&'static str>,
    pub scope: &'static str,
}

/// Fully resolved provider configuration. Never changes after startup.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderConfig {
    pub name: String,
    pub login_url: AuthUrl,
    pub redeem_url: TokenUrl,
    pub profile_url: UserInfoUrl,
    pub validate_url: Option<IntrospectionUrl>,
    pub scope: Scope,
}

/// Deployment-supplied values; anything left `None` falls back to the provider default.
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub name: Option<String>,
    pub login_url: Option<AuthUrl>,
    pub redeem_url: Option<TokenUrl>,
    pub profile_url: Option<UserInfoUrl>,
    pub validate_url: Option<IntrospectionUrl>,
    pub scope: Option<Scope>,
}

// The defaults are compile-time constants, covered by the tests of each provider.
fn parse_default<T>(parse: impl FnOnce(String) -> Result<T, url::ParseError>, raw: &str) -> T {
    parse(raw.to_string()).unwrap_or_else(|e| panic!("invalid default URL {raw}: {e}"))
}

impl ProviderOverrides {
    pub fn with_defaults(self, defaults: &ProviderDefaults) -> ProviderConfig {
        ProviderConfig {
            name: self.name.unwrap_or_else(|| defaults.name.to_string()),
            login_url: self
                .login_url
                .unwrap_or_else(|| parse_default(AuthUrl::new, defaults.login_url)),
            redeem_url: self
                .redeem_url
                .unwrap_or_else(|| parse_default(TokenUrl::new, defaults.redeem_url)),
            profile_url: self
                .profile_url
                .unwrap_or_else(|| parse_default(UserInfoUrl::new, defaults.profile_url)),
            validate_url: self.validate_url.or_else(|| {
                defaults
                    .validate_url
                    .map(|raw| parse_default(IntrospectionUrl::new, raw))
            }),
            scope: self
                .scope
                .unwrap_or_else(|| Scope::new(defaults.scope.to_string())),
        }
    }
}
