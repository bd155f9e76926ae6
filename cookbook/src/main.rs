mod app;
mod config;
mod error;
mod options;
mod style;
mod term;
mod toml_parser;
mod util;
mod weather;

use app::App;
use error::AppError;
use options::Options;
use config::Config;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_app() -> Result<(), AppError> {
    let options = Options::load(std::env::args())?;
    let config: Config = options.try_into()?;

    App::new(config)?.run().await
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
