#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered, but flagged the request as failed.
    #[error("could not execute statement")]
    Api { status: String },

    #[error("no image found in post content")]
    MissingImage,

    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
