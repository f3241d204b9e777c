use crate::source::{brace_balance, Source};
use crate::Error;

/// Line indices (zero based) of the kernel definition.
///
/// `start` is the line holding the opening brace of the body and `end`
/// the line holding the matching closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub marker: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scan {
    /// A kernel definition with a body.
    Found(Span),
    /// Every kernel marker belongs to a declaration without a body.
    Declared { marker: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opening {
    Brace(usize),
    Terminated(usize),
}

fn find_marker(source: &Source, marker: &str, from: usize) -> Option<usize> {
    source
        .lines()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line.contains(marker))
        .map(|(idx, _)| idx)
}

/// First line at or after `from` that either opens a body or ends a declaration.
fn find_opening(source: &Source, from: usize) -> Option<Opening> {
    source
        .lines()
        .iter()
        .enumerate()
        .skip(from)
        .find_map(|(idx, line)| {
            if line.contains('{') {
                Some(Opening::Brace(idx))
            } else if line.contains(';') {
                Some(Opening::Terminated(idx))
            } else {
                None
            }
        })
}

fn find_closing(source: &Source, start: usize) -> Result<usize, Error> {
    let mut depth: isize = 1;
    for (idx, line) in source.lines().iter().enumerate().skip(start + 1) {
        depth += brace_balance(line);
        if depth == 0 {
            return Ok(idx);
        }
    }
    Err(Error::UnbalancedBraces { line: start + 1 })
}

/// Locates the body of the first kernel definition marked by `marker`.
///
/// Kernel lines that are terminated by `;` before any `{` (prototypes or
/// kernels stripped earlier) are skipped.
pub fn scan(source: &Source, marker: &str) -> Result<Scan, Error> {
    let mut declared = None;
    let mut from = 0;
    while let Some(marker_line) = find_marker(source, marker, from) {
        match find_opening(source, marker_line) {
            Some(Opening::Brace(start)) => {
                let end = find_closing(source, start)?;
                log::debug!(
                    "kernel on line {}: body spans lines {}..={}",
                    marker_line + 1,
                    start + 1,
                    end + 1
                );
                return Ok(Scan::Found(Span {
                    marker: marker_line,
                    start,
                    end,
                }));
            }
            Some(Opening::Terminated(line)) => {
                log::debug!(
                    "kernel on line {} is a declaration (terminated on line {})",
                    marker_line + 1,
                    line + 1
                );
                declared.get_or_insert(marker_line);
                from = line + 1;
            }
            None if declared.is_none() => {
                return Err(Error::MissingBody {
                    line: marker_line + 1,
                });
            }
            None => break,
        }
    }
    match declared {
        Some(marker) => Ok(Scan::Declared { marker }),
        None => Err(Error::MissingMarker {
            marker: marker.to_string(),
        }),
    }
}
