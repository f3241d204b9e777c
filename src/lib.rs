#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
//! Turns the kernel of a PolyBench-style C benchmark into a forward declaration.
//!
//! The body of the first function whose signature contains the kernel marker
//! (`void kernel_` by default) is removed and the definition is terminated
//! with `;`. Everything else in the file is kept byte for byte.

pub mod fs;
pub mod rewrite;
pub mod scan;
pub mod source;

pub use scan::{Scan, Span};
pub use source::Source;

use std::path::{Path, PathBuf};

pub const DEFAULT_MARKER: &str = "void kernel_";

/// Environment variable overriding the kernel marker.
pub const MARKER_ENV: &str = "REMOVE_BODY_MARKER";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] fs::Error),

    #[error("{path:?} is not a file or does not exist")]
    NotAFile { path: PathBuf },

    #[error("no line contains the kernel marker {marker:?}")]
    MissingMarker { marker: String },

    #[error("kernel on line {line} is not followed by an opening brace")]
    MissingBody { line: usize },

    #[error("opening brace on line {line} is never closed")]
    UnbalancedBraces { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    /// Substring identifying the signature of the kernel.
    pub marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Options {
    /// Default options, with the marker taken from [`MARKER_ENV`] if set.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(MARKER_ENV) {
            Ok(marker) if !marker.is_empty() => Self { marker },
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Stripped { span: Span, removed_lines: usize },
    /// The kernel already is a declaration.
    Unchanged,
}

/// Strips the kernel body from C source text.
///
/// Returns the outcome together with the resulting text, which equals the
/// input when nothing was stripped.
pub fn strip_source(text: &str, options: &Options) -> Result<(Outcome, String), Error> {
    let source = Source::parse(text);
    match scan::scan(&source, &options.marker)? {
        Scan::Found(span) => {
            let stripped = rewrite::rewrite(&source, &span);
            let removed_lines = source.len() - stripped.len();
            Ok((
                Outcome::Stripped {
                    span,
                    removed_lines,
                },
                stripped.to_string(),
            ))
        }
        Scan::Declared { marker } => {
            log::info!("kernel on line {} has no body", marker + 1);
            Ok((Outcome::Unchanged, text.to_string()))
        }
    }
}

/// Strips the kernel body from the C file at `path`, rewriting it in place.
///
/// The file is only written when a body was removed. No backup is kept.
pub fn remove_body(path: impl AsRef<Path>, options: &Options) -> Result<Outcome, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    let (outcome, stripped) = strip_source(&text, options)?;
    if let Outcome::Stripped { .. } = outcome {
        fs::write(path, &stripped)?;
    }
    Ok(outcome)
}

#[cfg(test)]
pub mod testing {
    static INIT: std::sync::Once = std::sync::Once::new();

    pub fn init_test() {
        INIT.call_once(|| {
            env_logger::builder().is_test(true).init();
            color_eyre::install().unwrap();
        });
    }
}
