//! Generate `shopify.app.toml` for the app and, when present, its extension project.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{APP_TOML_FILE, AppConfig, AppError, EnvInputs, RenderTarget, render_for_target};
use crate::ports::{ConfigFileStore, EnvSource, EnvVerifier};

/// Default extension project location, relative to the output directory.
pub const DEFAULT_EXTENSION_DIR: &str = "../extension";

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the primary `shopify.app.toml`.
    pub output_dir: PathBuf,
    /// Extension project directory; the second file is only written when it exists.
    pub extension_dir: PathBuf,
    /// Render without writing anything.
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Options rooted at `output_dir` with the extension project as its `../extension` sibling.
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let extension_dir = output_dir.join(DEFAULT_EXTENSION_DIR);
        Self { output_dir, extension_dir, dry_run: false }
    }
}

/// A rendered document and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub target: RenderTarget,
    pub path: PathBuf,
    pub content: String,
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub files: Vec<RenderedFile>,
    pub dry_run: bool,
}

impl GenerateOutcome {
    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|file| file.path.as_path()).collect()
    }
}

/// Execute the generate command.
///
/// The configuration is fully built and validated before the first write. Writes are
/// sequential with no rollback: if the extension write fails the primary file stays.
pub fn execute<E, V, S>(
    ctx: &AppContext<E, V, S>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    E: EnvSource,
    V: EnvVerifier,
    S: ConfigFileStore,
{
    ctx.verifier().verify()?;

    let inputs = EnvInputs::from_lookup(|key| ctx.env().var(key));
    let config = AppConfig::from_inputs(&inputs)?;
    tracing::debug!(
        application_url = config.application_url.as_str(),
        api_version = %config.webhooks.api_version,
        app_proxy = config.app_proxy.is_some(),
        pos = config.pos.is_some(),
        "built app configuration"
    );

    let mut files = Vec::with_capacity(2);
    files.push(emit(ctx, options, &config, RenderTarget::Primary, &options.output_dir)?);

    if ctx.store().dir_exists(&options.extension_dir) {
        files.push(emit(ctx, options, &config, RenderTarget::Extension, &options.extension_dir)?);
    } else {
        tracing::debug!(
            extension_dir = %options.extension_dir.display(),
            "extension directory not found, skipping"
        );
    }

    Ok(GenerateOutcome { files, dry_run: options.dry_run })
}

fn emit<E, V, S>(
    ctx: &AppContext<E, V, S>,
    options: &GenerateOptions,
    config: &AppConfig,
    target: RenderTarget,
    dir: &Path,
) -> Result<RenderedFile, AppError>
where
    E: EnvSource,
    V: EnvVerifier,
    S: ConfigFileStore,
{
    let content = render_for_target(config, target)?;
    let path = dir.join(APP_TOML_FILE);

    if !options.dry_run {
        ctx.store().write_file(&path, &content)?;
        tracing::info!(path = %path.display(), ?target, "wrote app config");
    }

    Ok(RenderedFile { target, path, content })
}
