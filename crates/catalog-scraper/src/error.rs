use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status} for path '{path}'")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}
