//! kemono-manifest - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kemono_manifest::{
    cli::Args,
    config::{validate_config, Config, RunMode},
    download::run_creator,
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match args.config_path() {
        Some(path) => {
            print_info(&format!("Loading configuration from {}", path.display()));
            Config::load(&path)?
        }
        None => {
            print_warning("No configuration file found, using defaults with CLI arguments");
            Config::default()
        }
    };

    let input_url = args.input.clone();
    let run_mode = args.run_mode();

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        &input_url,
        &run_mode.to_string(),
        &config.output.formats,
        &config.output.out_path,
    );

    let state = run_creator(&config, &input_url, run_mode).await?;

    print_run_stats(&state);

    match run_mode {
        RunMode::ListFormats => print_success("Listed formats, nothing written"),
        RunMode::Manifest => {
            for manifest in &state.manifests {
                print_success(&format!(
                    "{}: aria2c -i {}",
                    manifest.extension.to_uppercase(),
                    manifest.path.display()
                ));
            }
        }
    }

    Ok(())
}
