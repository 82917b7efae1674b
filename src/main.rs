//! placehold - placeholder image URLs and downloads.

use std::process;

use clap::Parser;

use placehold::cli::{Cli, Command};
use placehold::config::{self, Config};
use placehold::context::ServiceContext;
use placehold::logging::init_logging;
use placehold::{DownloadOutcome, ImageError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ImageError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ImageError::Config)?;
    tracing::debug!("config: {}", config_path.display());

    match cli.command {
        Command::Url(args) => {
            let request = args.to_request(&config.defaults);
            let placeholder = ServiceContext::offline().into_placeholder(&config);
            println!("{}", placeholder.image_url(&request)?);
        }
        Command::Download { image, dir, file_name_only } => {
            let request = image.to_request(&config.defaults);
            let (ctx, recording_session) = ServiceContext::from_env(&config)?;
            let placeholder = ctx.into_placeholder(&config);

            let outcome = placeholder.image(&request, dir.as_deref(), !file_name_only).await;
            // Drop the generator so the recorder is no longer shared.
            drop(placeholder);

            if let Some(session) = recording_session {
                match session.finish() {
                    Ok(path) => eprintln!("Cassette saved: {}", path.display()),
                    Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
                }
            }

            match outcome? {
                DownloadOutcome::Saved(path) => println!("{}", path.display()),
                DownloadOutcome::Failed(reason) => {
                    eprintln!("Download failed: {reason}");
                    process::exit(2);
                }
            }
        }
    }

    Ok(())
}
