//! Lists the chunks of PNG files, decoding the ones that carry metadata.

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use pngchunks::{dump::ArtifactSink, png::*, PngError};
use thiserror::Error;

mod render;
use render::{RenderOptions, Renderer, SEPARATOR};

#[derive(Parser, Debug)]
#[command(
  name = "pngchunks",
  version,
  about = "PNG file parser. Lists, checks, and decodes chunks."
)]
struct Args {
  /// PNG files to parse.
  #[arg(value_name = "FILENAME", required = true)]
  filenames: Vec<PathBuf>,
  /// more verbose output
  #[arg(long)]
  verbose: bool,
  /// colorize output
  #[arg(long)]
  color: bool,
  /// Some meta fields may be written to file in this directory
  #[arg(short = 'D', long, value_name = "DIR")]
  dumpdir: Option<PathBuf>,
}

/// Why a file couldn't be reported on (fully).
#[derive(Debug, Error)]
enum FileError {
  #[error("{source} {}", .path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("{error} {}", .path.display())]
  Png {
    path: PathBuf,
    #[source]
    error: PngError,
  },
}

struct StderrLogger;
impl Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= log::max_level()
  }
  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      eprintln!("[{}] {}", record.level(), record.args());
    }
  }
  fn flush(&self) {}
}
static LOGGER: StderrLogger = StderrLogger;

/// Failed files are printed once as part of the report, the full error only
/// shows up in the log when verbose.
fn log_level(verbose: bool) -> LevelFilter {
  if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Warn
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(log_level(args.verbose));
  }

  let renderer = Renderer::new(RenderOptions { verbose: args.verbose, color: args.color });
  let sink = args.dumpdir.as_ref().map(ArtifactSink::new);

  let mut failed = false;
  for path in args.filenames.iter() {
    if let Err(e) = process_file(path, &renderer, sink.as_ref()) {
      log::debug!("{e:?}");
      println!("{e}");
      failed = true;
    }
  }
  if failed {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}

fn process_file(
  path: &Path, renderer: &Renderer, sink: Option<&ArtifactSink>,
) -> Result<(), FileError> {
  let bytes =
    std::fs::read(path).map_err(|source| FileError::Io { path: path.to_path_buf(), source })?;
  log::debug!("read {} bytes from {}", bytes.len(), path.display());
  let png_err = |error| FileError::Png { path: path.to_path_buf(), error };
  let stream = PngStream::new(&bytes).map_err(png_err)?;

  println!("#");
  let mut chunk_count = 0;
  for scanned in stream.chunks() {
    let scanned = scanned.map_err(png_err)?;
    chunk_count += 1;
    let raw = scanned.raw;

    if renderer.should_show(&scanned) {
      println!("{}", renderer.chunk_line(&raw));
      match &scanned.decoded {
        Ok(chunk) if chunk.is_recognized() => {
          renderer.describe(chunk).iter().for_each(|line| println!("{line}"));
          println!("{SEPARATOR}");
        }
        Ok(_) => (),
        Err(e) => {
          println!("{}", renderer.decode_error(e));
          println!("{SEPARATOR}");
        }
      }
    }

    if let (Some(sink), Ok(chunk)) = (sink, &scanned.decoded) {
      if let Some(payload) = chunk.artifact_payload() {
        if let Err(e) = sink.write(raw.offset(), raw.chunk_type(), payload) {
          log::warn!("couldn't dump {} at {:#08x}: {e}", raw.chunk_type(), raw.offset());
        }
      }
    }

    if raw.chunk_type() == PngChunkType::IEND && raw.end() < stream.len() {
      println!("{}", renderer.past_end_warning());
    }
  }
  println!("{}", renderer.summary(stream.len(), path, chunk_count));
  Ok(())
}
