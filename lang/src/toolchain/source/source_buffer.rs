use bstr::BStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures opening or reading program source. Everything past this point is infallible.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not map {}: {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: mmap_rs::Error,
    },

    #[error("could not read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { string: &'a str },
    Owned { string: String },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the file at `file_path` into memory. Does nothing to check if the contents are
    /// valid utf-8, the lexer reports bad sequences as invalid characters.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'a>, SourceError> {
        let io_error = |source| SourceError::Io { path: file_path.to_path_buf(), source };
        let map_error = |source| SourceError::Map { path: file_path.to_path_buf(), source };

        let file = File::open(file_path).map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();
        let file_name = file_path.display().to_string();

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Memory { string: "" }, file_name });
        }

        let len = usize::try_from(len).map_err(|_| {
            io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, "file too large"))
        })?;
        let buffer = unsafe {
            mmap_rs::MmapOptions::new(len).map_err(map_error)?.with_file(&file, 0).map()
        }
        .map_err(map_error)?;
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name: String::from(name) }
    }

    /// Reads all of `reader` into an owned buffer, used for `-` on the command line.
    pub fn new_from_reader(mut reader: impl Read, name: &str) -> Result<SourceBuffer<'a>, SourceError> {
        let mut string = String::new();
        reader.read_to_string(&mut string).map_err(SourceError::Stdin)?;
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { string }, file_name: String::from(name) })
    }

    pub fn code(&self) -> &BStr {
        match &self.kind {
            SourceBufferKind::File { buffer } => BStr::new(buffer.as_slice()),
            SourceBufferKind::Memory { string } => BStr::new(string.as_bytes()),
            SourceBufferKind::Owned { string } => BStr::new(string.as_bytes()),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
