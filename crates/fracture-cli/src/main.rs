//! imagefracture - shatter an image into rotated column fragments.
//!
//! # Usage
//!
//! ```bash
//! imagefracture -i photo.jpg -o shattered.png
//! ```
//!
//! The input format is detected from the file contents; the output format
//! from the output file's extension (`.jpg`, `.jpeg`, `.png` or `.gif`).
//! Every run draws fresh angles, so repeated runs give different results.
//! Set `RUST_LOG=debug` to see each angle re-draw.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fracture_core::pipeline;
use fracture_core::RandomAngles;
use log::{error, info};

/// Fracture an image into rotated column fragments
#[derive(Parser, Debug)]
#[command(name = "imagefracture", version, about)]
struct Args {
    /// Image to fracture (JPEG, PNG or GIF)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Output file; its extension selects the format
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let angles = RandomAngles::from_entropy();
    let summary = pipeline::run(&args.input, &args.output, angles).with_context(|| {
        format!(
            "cannot fracture {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    info!(
        "fractured {}x{} image into {} ({})",
        summary.width,
        summary.height,
        args.output.display(),
        summary.format
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["imagefracture", "-i", "in.jpg", "-o", "out.png"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.jpg"));
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_long_flags() {
        let args =
            Args::try_parse_from(["imagefracture", "--output", "o.gif", "--input", "i.png"])
                .unwrap();
        assert_eq!(args.input, PathBuf::from("i.png"));
        assert_eq!(args.output, PathBuf::from("o.gif"));
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let err = Args::try_parse_from(["imagefracture", "-i", "in.jpg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let err = Args::try_parse_from(["imagefracture", "-o", "out.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_run_reports_unsupported_output() {
        let args = Args {
            input: PathBuf::from("missing-input.png"),
            output: PathBuf::from("out.tiff"),
        };
        let err = run(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot fracture missing-input.png into out.tiff"
        );

        let chain = format!("{:#}", err);
        assert!(chain.contains(": unsupported output format for out.tiff"), "{}", chain);

        let stage = err.downcast_ref::<pipeline::PipelineError>().map(|e| e.stage());
        assert_eq!(stage, Some("format"));
    }

    #[test]
    fn test_clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
