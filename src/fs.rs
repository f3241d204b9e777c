use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open file {path:?}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read file {path:?}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write file {path:?}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::OpenFile { source, .. }
            | Error::ReadFile { source, .. }
            | Error::WriteFile { source, .. } => source,
        }
    }
}

#[inline]
pub fn open_readable(path: impl AsRef<Path>) -> Result<std::io::BufReader<std::fs::File>, Error> {
    let path = path.as_ref();
    let file = std::fs::OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| Error::OpenFile {
            source,
            path: path.to_path_buf(),
        })?;
    Ok(std::io::BufReader::new(file))
}

/// Opens an existing file for writing, truncating it.
///
/// The file is never created and keeps its permissions.
#[inline]
pub fn open_writable(path: impl AsRef<Path>) -> Result<std::io::BufWriter<std::fs::File>, Error> {
    let path = path.as_ref();
    let file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::OpenFile {
            source,
            path: path.to_path_buf(),
        })?;
    Ok(std::io::BufWriter::new(file))
}

pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let mut reader = open_readable(path)?;
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| Error::ReadFile {
            source,
            path: path.to_path_buf(),
        })?;
    log::trace!("read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

pub fn write(path: impl AsRef<Path>, contents: &str) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = open_writable(path)?;
    writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| Error::WriteFile {
            source,
            path: path.to_path_buf(),
        })?;
    log::trace!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
