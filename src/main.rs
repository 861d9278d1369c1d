use std::path::PathBuf;

use clap::Parser;
use shopify_app_toml::{AppError, DEFAULT_EXTENSION_DIR, EnvFile, GenerateOptions, GenerateOutcome};

const SUCCESS_MESSAGE: &str = "TOML files written successfully";
const FAILURE_BANNER: &str = "---> An error occurred while writing TOML files";

#[derive(Parser)]
#[command(name = "shopify-app-toml")]
#[command(version)]
#[command(
    about = "Write shopify.app.toml from environment variables",
    long_about = "Reads SHOPIFY_APP_URL, SHOPIFY_API_VERSION and related variables (optionally \
                  from a .env file) and writes shopify.app.toml to the app directory and, when \
                  it exists, to the sibling extension directory."
)]
struct Cli {
    /// Dotenv file to load before reading variables (missing default file is ignored)
    #[arg(long, value_name = "PATH", conflicts_with = "no_env_file")]
    env_file: Option<PathBuf>,
    /// Read the process environment only
    #[arg(long)]
    no_env_file: bool,
    /// Directory receiving shopify.app.toml
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Extension project directory [default: <OUTPUT_DIR>/../extension]
    #[arg(short, long, value_name = "DIR")]
    extension_dir: Option<PathBuf>,
    /// Print the rendered files instead of writing them
    #[arg(long)]
    dry_run: bool,
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    shopify_app_toml::observability::init_tracing(cli.verbose);

    let env_file = match (cli.no_env_file, cli.env_file) {
        (true, _) => EnvFile::Disabled,
        (false, Some(path)) => EnvFile::Required(path),
        (false, None) => EnvFile::default(),
    };
    let options = GenerateOptions {
        extension_dir: cli
            .extension_dir
            .unwrap_or_else(|| cli.output_dir.join(DEFAULT_EXTENSION_DIR)),
        output_dir: cli.output_dir,
        dry_run: cli.dry_run,
    };

    let result: Result<GenerateOutcome, AppError> =
        shopify_app_toml::generate(&options, &env_file);

    // Errors are reported but never turned into a failing exit status.
    match result {
        Ok(outcome) if outcome.dry_run => {
            for file in &outcome.files {
                println!("==> {}", file.path.display());
                print!("{}", file.content);
            }
        }
        Ok(_) => println!("{}", SUCCESS_MESSAGE),
        Err(e) => {
            eprintln!("{}", FAILURE_BANNER);
            eprintln!("{}", e);
        }
    }
}
