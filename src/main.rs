//! GraphQL server bootstrap — entry point.
//!
//! Startup sequence:
//!   1. Parse CLI flags
//!   2. Load .env (or the file given with `--env-file`)
//!   3. Resolve settings from the environment
//!   4. Init logger (CLI `-v` flags > RUST_LOG > LOG_LEVEL)
//!   5. Report the GraphQL listener address, or that it is disabled

use std::path::PathBuf;

use gql_bootstrap::{
    config::{GRAPHQL_PATH, Settings},
    environment::{Environment, Overlay, ProcessEnv, Source, read_env_file},
    error::AppError,
    logger,
};
use tracing::info;

struct CliArgs {
    log_level: Option<&'static str>,
    env_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_cli_args();

    let source: Box<dyn Source> = match &args.env_file {
        // Process variables still win over the file's entries.
        Some(path) => Box::new(Overlay::new(ProcessEnv, read_env_file(path)?)),
        None => {
            // Load .env if present — ignore errors (file is optional).
            let _ = dotenvy::dotenv();
            Box::new(ProcessEnv)
        }
    };
    let env = Environment::new(source);

    // Nothing is logged before this point; failures go straight to stderr.
    let settings = Settings::load(&env)?;

    let effective_log_level = args.log_level.unwrap_or(settings.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        stage = %settings.stage,
        listen = settings.listen,
        host = %settings.host,
        port = settings.port,
        log_level = %settings.log_level,
        "settings resolved"
    );

    if settings.listen {
        let addr = settings.listen_addr();
        info!(%addr, path = GRAPHQL_PATH, "graphql listener enabled");
        println!("✓ GraphQL server configured: http://{addr}{GRAPHQL_PATH}");
    } else {
        info!(stage = %settings.stage, "graphql listener disabled outside production");
        println!("✓ Settings resolved: stage={} (listener disabled)", settings.stage);
    }

    Ok(())
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut env_file = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: gql-bootstrap [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -e, --env-file <PATH>      Read variables from a dotenv file (process env wins)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-e" | "--env-file" => {
                if let Some(path) = iter.next() {
                    env_file = Some(PathBuf::from(path));
                } else {
                    eprintln!("error: -e/--env-file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    CliArgs { log_level: logger::level_for_verbosity(verbosity), env_file }
}
