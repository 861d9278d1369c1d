pub mod api_version;
pub mod app_config;
pub mod app_proxy;
pub mod app_url;
pub mod error;
pub mod render;

pub use api_version::ApiVersion;
pub use app_config::{AppConfig, EnvInputs};
pub use app_proxy::AppProxyPrefix;
pub use app_url::AppUrl;
pub use error::AppError;
pub use render::{ADVISORY_COMMENT, APP_TOML_FILE, RenderTarget, render_for_target};
