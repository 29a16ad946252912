use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page parsing error: {0}")]
    PageParse(String),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Invalid link '{href}': {reason}")]
    InvalidLink { href: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
