//! File-to-file fracture pipeline: read, decode, fracture, encode, write.
//!
//! Each stage fails with its own [`PipelineError`] variant and stops the
//! run. The output format is resolved from the output path before any file
//! is opened, and the output file is only created once the encoded bytes are
//! ready. A write that fails part way removes the file again, so a failed run
//! leaves no partial output behind.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::decode::{decode, DecodeError};
use crate::encode::{encode, EncodeError, OutputFormat};
use crate::fracture::{fracture_grid_with, AngleSource, FractureConfig};
use crate::grid::PixelGrid;

/// A failed pipeline stage and its cause.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot open input {}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot decode input {}", .path.display())]
    Decode { path: PathBuf, source: DecodeError },

    #[error("unsupported output format for {} (expected .jpg, .jpeg, .png or .gif)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("cannot create output {}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("cannot encode output {}", .path.display())]
    Encode { path: PathBuf, source: EncodeError },
}

impl PipelineError {
    /// Short name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Open { .. } => "open",
            PipelineError::Decode { .. } => "decode",
            PipelineError::UnsupportedFormat { .. } => "format",
            PipelineError::Create { .. } => "create",
            PipelineError::Encode { .. } => "encode",
        }
    }
}

/// What a successful [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub format: OutputFormat,
    /// Size of the written file.
    pub bytes: usize,
}

/// Read and decode an image file.
pub fn load(path: &Path) -> Result<PixelGrid, PipelineError> {
    let bytes = read_all(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    decode(&bytes).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a grid and write it to `path`. Returns the number of bytes written.
pub fn save(path: &Path, grid: &PixelGrid, format: OutputFormat) -> Result<usize, PipelineError> {
    let bytes = encode(grid, format).map_err(|source| PipelineError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    write_all(path, &bytes).map_err(|source| PipelineError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());

    Ok(bytes.len())
}

/// Fracture `input` into `output` with the default configuration.
pub fn run<A: AngleSource>(
    input: &Path,
    output: &Path,
    angles: A,
) -> Result<RunSummary, PipelineError> {
    run_with(&FractureConfig::default(), input, output, angles)
}

/// Fracture `input` into `output`.
///
/// # Arguments
///
/// * `config` - Angle interpretation passed to the sampler
/// * `input` - Image to read (JPEG, PNG or GIF, detected from its contents)
/// * `output` - Destination; its extension selects the output format
/// * `angles` - Source of rotation angles
///
/// # Errors
///
/// Returns the [`PipelineError`] of the first stage that fails. The output
/// extension is checked before the input is read.
pub fn run_with<A: AngleSource>(
    config: &FractureConfig,
    input: &Path,
    output: &Path,
    angles: A,
) -> Result<RunSummary, PipelineError> {
    let format = OutputFormat::from_path(output).ok_or_else(|| PipelineError::UnsupportedFormat {
        path: output.to_path_buf(),
    })?;

    let source = load(input)?;
    info!(
        "decoded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let fractured = fracture_grid_with(config, &source, angles);

    let bytes = save(output, &fractured, format)?;
    info!("wrote {} as {} ({} bytes)", output.display(), format, bytes);

    Ok(RunSummary {
        width: fractured.width(),
        height: fractured.height(),
        format,
        bytes,
    })
}

fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn write_all(path: &Path, bytes: &[u8]) -> io::Result<()> {
    write_or_remove(path, |file| {
        file.write_all(bytes)?;
        file.flush()
    })
}

/// Create `path` and fill it with `write`. A failed write removes the file
/// again so no truncated output is left behind.
fn write_or_remove<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = File::create(path)?;
    let result = write(&mut file);
    drop(file);

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("cannot remove partial output {}: {}", path.display(), cleanup);
        }
        return Err(err);
    }
    Ok(())
}
