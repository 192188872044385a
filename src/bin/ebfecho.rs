//! ebfecho — validate an EBF file and write a normalized copy.
//!
//! Usage:
//!   ebfecho [OPTIONS] <INPUT> <OUTPUT>
//!
//! Exit status identifies the failure kind; see [`Status`].

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use zenebf::{DecodeRequest, EbfError, Grid, Limits, Unstoppable};

#[derive(Debug, Parser)]
#[command(version, about = "Validate an EBF file and write a normalized copy")]
struct Cli {
    /// EBF file to read
    input: PathBuf,

    /// Destination for the re-encoded file (created or overwritten)
    output: PathBuf,

    /// Reject grids taller than this many rows
    #[arg(long)]
    max_height: Option<u32>,

    /// Reject grids wider than this many values
    #[arg(long)]
    max_width: Option<u32>,

    /// Reject grids with more than this many values
    #[arg(long)]
    max_pixels: Option<u64>,

    /// Reject grids whose buffer would exceed this many bytes
    #[arg(long)]
    max_memory: Option<u64>,

    /// Log decode progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Process exit status, one per failure kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
enum Status {
    Success = 0,
    BadArguments = 1,
    BadFile = 2,
    BadMagicNumber = 3,
    BadDimensions = 4,
    AllocationFailure = 5,
    BadData = 6,
    BadOutput = 7,
}

impl From<Status> for ExitCode {
    fn from(s: Status) -> Self {
        ExitCode::from(s as u8)
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Bad Arguments")]
    BadArguments,

    #[error("Bad File Name ({})", .path.display())]
    BadFile { path: PathBuf, source: io::Error },

    #[error("{} ({})", decode_label(.source), .path.display())]
    Decode { path: PathBuf, source: EbfError },

    #[error("Bad Output ({})", .path.display())]
    BadOutput { path: PathBuf, source: io::Error },
}

fn decode_label(e: &EbfError) -> &'static str {
    match e {
        EbfError::BadMagicNumber => "Bad Magic Number",
        EbfError::BadDimensions(_) => "Bad Dimensions",
        EbfError::AllocationFailure { .. } => "Malloc Failed",
        EbfError::LimitExceeded(_) => "Limit Exceeded",
        _ => "Bad Data",
    }
}

fn decode_status(e: &EbfError) -> Status {
    match e {
        EbfError::BadMagicNumber => Status::BadMagicNumber,
        EbfError::BadDimensions(_) => Status::BadDimensions,
        EbfError::AllocationFailure { .. } | EbfError::LimitExceeded(_) => {
            Status::AllocationFailure
        }
        _ => Status::BadData,
    }
}

impl CliError {
    fn status(&self) -> Status {
        match self {
            CliError::BadArguments => Status::BadArguments,
            CliError::BadFile { .. } => Status::BadFile,
            CliError::Decode { source, .. } => decode_status(source),
            CliError::BadOutput { .. } => Status::BadOutput,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_error(err),
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => {
            println!("ECHOED");
            Status::Success.into()
        }
        Err(err) => {
            if let Some(source) = std::error::Error::source(&err) {
                log::warn!("{source}");
            }
            println!("ERROR: {err}");
            err.status().into()
        }
    }
}

fn argument_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            Status::Success.into()
        }
        _ => {
            if std::env::args_os().len() < 2 {
                println!("Usage: ebfecho file1 file2");
            } else {
                println!("ERROR: {}", CliError::BadArguments);
            }
            CliError::BadArguments.status().into()
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let data = fs::read(&cli.input).map_err(|source| CliError::BadFile {
        path: cli.input.clone(),
        source,
    })?;

    let limits = Limits {
        max_height: cli.max_height,
        max_width: cli.max_width,
        max_pixels: cli.max_pixels,
        max_memory_bytes: cli.max_memory,
    };
    let grid = DecodeRequest::new(&data)
        .with_limits(&limits)
        .decode(Unstoppable)
        .map_err(|source| CliError::Decode {
            path: cli.input.clone(),
            source,
        })?;
    drop(data);
    log::debug!(
        "{}: {}x{} grid validated",
        cli.input.display(),
        grid.height(),
        grid.width()
    );

    write_output(&cli.output, &grid)
}

/// Write the encoded grid. A failed write removes the partial file.
fn write_output(path: &Path, grid: &Grid) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::BadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);
    let written = zenebf::write_to(grid, &mut w).and_then(|()| w.flush());
    drop(w);

    if let Err(source) = written {
        // Device nodes such as /dev/full are left alone.
        let regular = fs::metadata(path).is_ok_and(|m| m.is_file());
        if regular {
            if let Err(e) = fs::remove_file(path) {
                log::warn!("could not remove partial output {}: {e}", path.display());
            }
        }
        return Err(CliError::BadOutput {
            path: path.to_path_buf(),
            source,
        });
    }
    log::debug!("{}: written", path.display());
    Ok(())
}
