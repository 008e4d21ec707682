use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("NoteCore error: {0}")]
    NoteCore(#[from] notecore::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;
