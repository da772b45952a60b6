use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("puzzle input not found at {path:?}")]
    ResourceNotFound { path: PathBuf },

    #[error("failed to read puzzle input from {path:?}")]
    Read {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    #[error("failed to read puzzle input from stdin")]
    Stdin(#[source] io::Error),
}

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Literal(String),
    Stdin,
}

pub fn load(source: InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Literal(buf) => Ok(buf),
        InputSource::File(path) => fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => InputError::ResourceNotFound { path },
            _ => InputError::Read { path, source: err },
        }),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Ok(buf)
        }
    }
}
