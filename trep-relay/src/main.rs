//! TREP Relay - Trinary Echo Relay Protocol session driver.

mod config;
mod session;

pub use config::{RelayConfig, DEMO_PAYLOAD};
pub use session::{RelayReport, RelaySession};

use std::process::ExitCode;

use trep_core::WorkParams;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = std::env::args().skip(1).collect();
    let emit_json = args.iter().any(|arg| arg == "--json");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let defaults = WorkParams::default();
    let force: f64 = positional
        .next()
        .map(|arg| arg.parse().expect("Invalid force"))
        .unwrap_or(defaults.force_newtons);
    let distance: f64 = positional
        .next()
        .map(|arg| arg.parse().expect("Invalid distance"))
        .unwrap_or(defaults.distance_meters);

    let config = RelayConfig::default().with_work(WorkParams::new(force, distance));
    tracing::info!(
        "Starting TREP relay (force {} N, distance {} m)",
        force,
        distance
    );

    let mut session = RelaySession::new(config);
    match session.run() {
        Ok(report) => {
            if emit_json {
                let json =
                    serde_json::to_string_pretty(&report).expect("Failed to render report");
                println!("{}", json);
            } else {
                print!("{}", report);
            }

            if report.verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            tracing::error!("Relay session failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
