use clap::Parser;
use loghunter::{
    Cli, LoggingConfig, TimestampPolicy, init_tracing, run_pipeline,
    utils::{print_alerts, render_alerts, write_alerts},
};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn run(cli: &Cli) -> Result<(), loghunter::LogHunterError> {
    let policy = TimestampPolicy::from_env();
    let alerts = run_pipeline(&cli.logs, &cli.rules, policy)?;

    let document = render_alerts(&alerts)?;
    write_alerts(&cli.out, &document)?;
    print_alerts(&document)?;

    info!(alerts = alerts.len(), "Detection run complete");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(&LoggingConfig::from_env()) {
        eprintln!("loghunter: failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        commit = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_time = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "Starting loghunter"
    );

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Detection run failed");
            eprintln!("loghunter: {err}");
            ExitCode::FAILURE
        }
    }
}
