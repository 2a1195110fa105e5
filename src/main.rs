mod cli;

use clap::Parser;
use dealformat::{AppError, Hand};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the rendered hand
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealformat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Args::parse();
    debug!(?args, "Parsed arguments");

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to format hand");
            eprintln!("dealformat: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<String, AppError> {
    let hand = Hand::new(&args.spades, &args.hearts, &args.diamonds, &args.clubs)?;

    if args.json {
        return Ok(serde_json::to_string(&hand)?);
    }
    if args.debug_repr {
        return Ok(format!("{hand:?}"));
    }
    Ok(hand.format(args.format))
}
