use anyhow::Result;
use clap::Parser;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwa_icons::{icon_gen, ResizeError};

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icons",
    version,
    about = "Resize an image into the 192x192 and 512x512 icons of a web app"
)]
struct Args {
    /// Path to the source image. It is stretched to a square, so start from a square one.
    #[clap(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Enable verbose output.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(input) = args.input else {
        println!("Usage: pwa-icons <input-image>");
        println!("Example: pwa-icons icon.png");
        return ExitCode::FAILURE;
    };

    if let Err(err) = run(&input) {
        report(&err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pwa_icons={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(input: &Path) -> Result<()> {
    let written = icon_gen::resize_icon(input)?;

    let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    println!("\n🎉 PWA icons created!");
    println!("   Saved to: {}", paths.join(" and "));
    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("Error: {err}");
    tracing::debug!("{err:?}");

    if let Some(hint) = err.downcast_ref::<ResizeError>().and_then(ResizeError::hint) {
        eprintln!("\n{hint}");
    }
}
