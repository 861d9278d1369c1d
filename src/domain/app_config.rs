//! App configuration domain models.
//!
//! Most of the CLI `build` section is left out on purpose since the CLI is not used to run dev.
//! See <https://shopify.dev/docs/apps/tools/cli/configuration>.

use serde::Serialize;

use crate::domain::{ApiVersion, AppError, AppProxyPrefix, AppUrl};

pub const ENV_APP_URL: &str = "SHOPIFY_APP_URL";
pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_APP_HANDLE: &str = "APP_HANDLE";
pub const ENV_API_KEY: &str = "SHOPIFY_API_KEY";
pub const ENV_API_SCOPES: &str = "SHOPIFY_API_SCOPES";
pub const ENV_API_VERSION: &str = "SHOPIFY_API_VERSION";
pub const ENV_APP_PROXY_PREFIX: &str = "APP_PROXY_PREFIX";
pub const ENV_APP_PROXY_SUBPATH: &str = "APP_PROXY_SUBPATH";
pub const ENV_POS_EMBEDDED: &str = "POS_EMBEDDED";

/// Raw environment values, read once before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvInputs {
    pub app_url: Option<String>,
    pub app_name: Option<String>,
    pub app_handle: Option<String>,
    pub api_key: Option<String>,
    pub api_scopes: Option<String>,
    pub api_version: Option<String>,
    pub app_proxy_prefix: Option<String>,
    pub app_proxy_subpath: Option<String>,
    pub pos_embedded: Option<String>,
}

impl EnvInputs {
    /// Collect every recognized variable through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app_url: lookup(ENV_APP_URL),
            app_name: lookup(ENV_APP_NAME),
            app_handle: lookup(ENV_APP_HANDLE),
            api_key: lookup(ENV_API_KEY),
            api_scopes: lookup(ENV_API_SCOPES),
            api_version: lookup(ENV_API_VERSION),
            app_proxy_prefix: lookup(ENV_APP_PROXY_PREFIX),
            app_proxy_subpath: lookup(ENV_APP_PROXY_SUBPATH),
            pos_embedded: lookup(ENV_POS_EMBEDDED),
        }
    }
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Configuration for the Shopify app, built in one step from validated inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
    pub handle: String,
    pub client_id: String,
    pub application_url: AppUrl,
    pub embedded: bool,
    pub auth: AuthConfig,
    pub access_scopes: AccessScopes,
    pub webhooks: WebhooksConfig,
    pub app_proxy: Option<AppProxyConfig>,
    pub pos: Option<PosConfig>,
    pub build: BuildConfig,
}

/// Authentication configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    pub redirect_urls: Vec<String>,
}

/// Access scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessScopes {
    pub scopes: String,
    pub use_legacy_install_flow: bool,
}

/// Webhook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhooksConfig {
    pub api_version: ApiVersion,
    pub privacy_compliance: PrivacyComplianceConfig,
}

/// GDPR mandatory webhook endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivacyComplianceConfig {
    pub customer_data_request_url: String,
    pub customer_deletion_url: String,
    pub shop_deletion_url: String,
}

/// App proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppProxyConfig {
    pub url: String,
    pub prefix: String,
    pub subpath: String,
}

/// Point of Sale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosConfig {
    pub embedded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub include_config_on_deploy: bool,
}

impl AppConfig {
    /// Validate `inputs` and assemble the whole configuration.
    ///
    /// Fails with [`AppError::InvalidApiVersion`] when `SHOPIFY_API_VERSION` is missing or
    /// not one of the supported versions.
    pub fn from_inputs(inputs: &EnvInputs) -> Result<Self, AppError> {
        let app_url = AppUrl::normalize(inputs.app_url.as_deref().unwrap_or_default());
        let api_version: ApiVersion = inputs.api_version.as_deref().unwrap_or_default().parse()?;

        Ok(Self {
            name: or_empty(&inputs.app_name),
            handle: or_empty(&inputs.app_handle),
            client_id: or_empty(&inputs.api_key),
            embedded: true,
            auth: AuthConfig {
                redirect_urls: vec![
                    app_url.join("/api/auth/tokens"),
                    app_url.join("/api/auth/callback"),
                ],
            },
            access_scopes: AccessScopes {
                scopes: or_empty(&inputs.api_scopes),
                use_legacy_install_flow: false,
            },
            webhooks: WebhooksConfig {
                api_version,
                privacy_compliance: PrivacyComplianceConfig {
                    customer_data_request_url: app_url.join("/api/gdpr/customers_data_request"),
                    customer_deletion_url: app_url.join("/api/gdpr/customers_redact"),
                    shop_deletion_url: app_url.join("/api/gdpr/shop_redact"),
                },
            },
            app_proxy: app_proxy_from(inputs, &app_url),
            pos: pos_from(inputs),
            build: BuildConfig { include_config_on_deploy: true },
            application_url: app_url,
        })
    }
}

fn app_proxy_from(inputs: &EnvInputs, app_url: &AppUrl) -> Option<AppProxyConfig> {
    let prefix = non_empty(&inputs.app_proxy_prefix)?;
    let subpath = non_empty(&inputs.app_proxy_subpath)?;

    if !AppProxyPrefix::is_known(prefix) {
        tracing::warn!(prefix, "APP_PROXY_PREFIX is not one of apps, a, community, tools");
    }

    Some(AppProxyConfig {
        url: app_url.join("/api/proxy_route"),
        prefix: prefix.to_string(),
        subpath: subpath.to_string(),
    })
}

fn pos_from(inputs: &EnvInputs) -> Option<PosConfig> {
    let raw = inputs.pos_embedded.as_deref().filter(|v| v.chars().count() > 1)?;
    Some(PosConfig { embedded: raw == "true" })
}
