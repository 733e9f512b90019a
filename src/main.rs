mod service;

use envbind::{Bindable, EnvSource, ProcessEnv};
use service::ServiceConfig;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Prints the variables `ServiceConfig` reads, with their defaults.
fn print_variables() {
    println!("{:<28} {:<10} {}", "VARIABLE", "TYPE", "DEFAULT");
    for field in ServiceConfig::schema().fields() {
        if field.env_key.is_empty() {
            continue;
        }
        println!("{:<28} {:<10} {}", field.env_key, field.kind.to_string(), field.default);
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if env::args().any(|arg| arg == "--list") {
        print_variables();
        return ExitCode::SUCCESS;
    }

    init_tracing(ProcessEnv.lookup("LOG_LEVEL").as_deref());

    let mut config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    config.instance_id = format!("{}-{}", config.name, std::process::id());

    info!(
        instance_id = %config.instance_id,
        name = %config.name,
        listen_addr = %config.listen_addr,
        port = config.port,
        debug = config.debug,
        sample_rate = config.sample_rate,
        request_timeout = ?config.request_timeout,
        shutdown_grace = ?config.shutdown_grace,
        "Configuration loaded"
    );

    ExitCode::SUCCESS
}
