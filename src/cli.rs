//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DefaultsConfig;
use crate::generator::ImageRequest;

/// Placeholder image URLs and downloads from placehold.co.
#[derive(Parser, Debug)]
#[command(name = "placehold", version, about)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a placeholder image URL.
    Url(ImageArgs),
    /// Download a placeholder image and print where it was saved.
    Download {
        /// Image parameters.
        #[command(flatten)]
        image: ImageArgs,

        /// Target directory (system temp directory if omitted).
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print only the file name instead of the full path.
        #[arg(long)]
        file_name_only: bool,
    },
}

/// Parameters shared by every subcommand.
#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Width in pixels (config default, else 640).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Height in pixels (config default, else 480).
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Overlay text.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Do not add a random word when no text is given.
    #[arg(long)]
    pub no_random: bool,

    /// Gray background instead of a random color.
    #[arg(short, long)]
    pub gray: bool,

    /// Format: jpg, jpeg, png, webp, gif (config default, else jpg).
    #[arg(short, long)]
    pub format: Option<String>,
}

impl ImageArgs {
    /// Build a request, filling unset values from the config defaults.
    #[must_use]
    pub fn to_request(&self, defaults: &DefaultsConfig) -> ImageRequest {
        ImageRequest {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            randomize: !self.no_random,
            word: self.text.clone(),
            grayscale: self.gray || defaults.grayscale,
            format: self.format.clone().unwrap_or_else(|| defaults.format.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ImageFormat;

    fn image_args(cli: &Cli) -> &ImageArgs {
        match &cli.command {
            Command::Url(args) | Command::Download { image: args, .. } => args,
        }
    }

    #[test]
    fn url_defaults() {
        let cli = Cli::parse_from(["placehold", "url"]);
        let request = image_args(&cli).to_request(&DefaultsConfig::default());
        assert_eq!(request, ImageRequest::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "placehold", "url", "-w", "300", "-H", "200", "-t", "hello", "--no-random", "-g",
            "-f", "PNG", "-v",
        ]);
        let request = image_args(&cli).to_request(&DefaultsConfig::default());
        assert_eq!(request.width, 300);
        assert_eq!(request.height, 200);
        assert_eq!(request.word.as_deref(), Some("hello"));
        assert!(!request.randomize);
        assert!(request.grayscale);
        assert_eq!(request.format, "PNG");
        assert!(cli.verbose);
    }

    #[test]
    fn config_defaults_fill_gaps() {
        let cli = Cli::parse_from(["placehold", "url", "-w", "50"]);
        let defaults =
            DefaultsConfig { width: 10, height: 20, format: ImageFormat::Webp, grayscale: true };
        let request = image_args(&cli).to_request(&defaults);
        assert_eq!(request.width, 50);
        assert_eq!(request.height, 20);
        assert_eq!(request.format, "webp");
        assert!(request.grayscale);
    }

    #[test]
    fn download_options() {
        let cli = Cli::parse_from([
            "placehold", "download", "--dir", "/tmp/x", "--file-name-only", "--config", "c.toml",
        ]);
        match cli.command {
            Command::Download { dir, file_name_only, .. } => {
                assert_eq!(dir, Some(PathBuf::from("/tmp/x")));
                assert!(file_name_only);
            }
            Command::Url(_) => panic!("expected download"),
        }
        assert_eq!(cli.config.as_deref(), Some("c.toml"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["placehold"]).is_err());
    }
}
