//! Rendering `shopify.app.toml` documents.

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::app_config::{
    AccessScopes, AppConfig, AppProxyConfig, AuthConfig, BuildConfig, PosConfig, WebhooksConfig,
};

/// File name written into every target directory.
pub const APP_TOML_FILE: &str = "shopify.app.toml";

/// Advisory line prepended to every generated file.
pub const ADVISORY_COMMENT: &str = "# Avoid writing to toml directly. Use your .env file instead";

/// Where a rendered document is going to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// App root, next to the `.env` file.
    Primary,
    /// Sibling `extension` project.
    Extension,
}

impl RenderTarget {
    /// Extension discovery globs, relative to the target directory.
    pub fn extension_directories(&self) -> &'static [&'static str] {
        match self {
            RenderTarget::Primary => &["../extension/extensions/*"],
            RenderTarget::Extension => &["./extensions/*"],
        }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    name: &'a str,
    handle: &'a str,
    client_id: &'a str,
    application_url: Vec<&'a str>,
    embedded: bool,
    extension_directories: &'a [&'a str],
    auth: &'a AuthConfig,
    access_scopes: &'a AccessScopes,
    webhooks: &'a WebhooksConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_proxy: Option<&'a AppProxyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos: Option<&'a PosConfig>,
    build: &'a BuildConfig,
}

impl<'a> Document<'a> {
    fn new(config: &'a AppConfig, target: RenderTarget) -> Self {
        Self {
            name: &config.name,
            handle: &config.handle,
            client_id: &config.client_id,
            application_url: vec![config.application_url.as_str()],
            embedded: config.embedded,
            extension_directories: target.extension_directories(),
            auth: &config.auth,
            access_scopes: &config.access_scopes,
            webhooks: &config.webhooks,
            app_proxy: config.app_proxy.as_ref(),
            pos: config.pos.as_ref(),
            build: &config.build,
        }
    }
}

/// Render `config` for `target`: advisory comment, blank line, then the TOML body.
pub fn render_for_target(config: &AppConfig, target: RenderTarget) -> Result<String, AppError> {
    let body = toml::to_string(&Document::new(config, target))?;
    Ok(format!("{ADVISORY_COMMENT}\n\n{body}"))
}
