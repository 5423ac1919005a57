use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliosort::{Book, Catalog, DomainError, config, import, report, seed};

fn load_books(config: &config::Config) -> Result<Vec<Book>, DomainError> {
    match &config.catalog_csv {
        Some(path) => import::load_catalog_csv(path),
        None => {
            tracing::info!("No catalog CSV configured, using demo catalog");
            seed::demo_books()
        }
    }
}

/// Path following `--csv`, if the flag is present
fn csv_arg(args: &[String]) -> Result<Option<PathBuf>, String> {
    let Some(pos) = args.iter().position(|arg| arg == "--csv") else {
        return Ok(None);
    };
    match args.get(pos + 1) {
        Some(path) if !path.starts_with("--") => Ok(Some(PathBuf::from(path))),
        _ => Err("--csv requires a path".to_string()),
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibliosort=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::from_env();

    // --csv overrides CATALOG_CSV
    match csv_arg(&args) {
        Ok(Some(path)) => config.catalog_csv = Some(path),
        Ok(None) => {}
        Err(msg) => {
            tracing::error!("{}", msg);
            return ExitCode::FAILURE;
        }
    }
    let json = args.iter().any(|arg| arg == "--json");

    let books = match load_books(&config) {
        Ok(books) => books,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let catalog = Catalog::with_policy(books, config.policy());
    let summary = report::build_summary(&catalog, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if json {
        report::write_json_report(&summary, &mut out)
    } else {
        report::write_text_report(&summary, &mut out)
    };

    if let Err(e) = written.and_then(|()| out.flush()) {
        tracing::error!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
