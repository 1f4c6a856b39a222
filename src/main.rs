#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;

use trailguard::app::artifact::write_graph_artifact;
use trailguard::app::aws_services::AwsServices;
use trailguard::app::config::RunConfig;
use trailguard::app::risk_catalogue::{render_discovery_summary, render_risk_report};
use trailguard::TrailWalker;

/// Default directives, overridable through RUST_LOG
const DEFAULT_LOG_FILTER: &str = "trailguard=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "trailguard")
        .map(|proj_dirs| proj_dirs.data_dir().join("logs"))
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir).ok()?;
    let log_path = log_dir.join("trailguard.log");

    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .ok()?;

    // Owner read/write only: the log carries account IDs and ARNs
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
            }
        }
    }

    Some((log_path, file))
}

/// Logs go to a file so stdout carries only the report. Without a usable
/// data directory they fall back to stderr.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = match open_log_file() {
        Some((log_path, file)) => {
            let result = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false), // No ANSI colors in file
                )
                .try_init();
            tracing::info!("Logging initialized to: {:?}", log_path);
            result
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "trailguard crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
        );

        eprintln!("\n{}", crash_msg);

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

async fn run(config: &RunConfig) -> anyhow::Result<()> {
    let services = AwsServices::from_env().await;
    let walker = TrailWalker::new(
        &services.cloudtrail,
        &services.logs,
        &services.s3,
        config.graph_name.as_str(),
    );

    let outcome = walker.walk().await.context("Trail walk aborted")?;

    write_graph_artifact(&outcome.graph, &config.graph_path)
        .context("Could not persist the topology graph")?;

    print!("{}", render_discovery_summary(&outcome.trails));
    let report = render_risk_report(&outcome.services);
    if !report.is_empty() {
        println!();
        print!("{}", report);
    }

    tracing::info!(
        "Run complete: {} trail(s), graph written to {}",
        outcome.trails.len(),
        config.graph_path.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Set up panic handler BEFORE anything else to catch early crashes
    setup_panic_handler();
    init_logging();

    let config = RunConfig::from_env();
    tracing::info!("trailguard {} starting with {:?}", env!("CARGO_PKG_VERSION"), config);

    // The walk is strictly sequential, a current-thread runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let result = runtime.block_on(run(&config));
    if let Err(err) = &result {
        trailguard::trace_error!("trailguard failed: {:#}", err);
    }
    result
}
