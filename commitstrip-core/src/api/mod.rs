pub use download_image::DownloadImage;
use async_trait::async_trait;
pub use get_post::GetPost;
pub use get_posts::GetPosts;
use reqwest::{IntoUrl, Url};
pub use search::Search;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::error;

use crate::{Error, Result};

pub mod download_image;
pub mod get_post;
pub mod get_posts;
pub mod search;

const API_BASE: &str = "http://www.commitstrip.com/api4dfg/";

/// Returns the CommitStrip API url for `endpoint`
pub(super) fn api_url(endpoint: &str) -> Url {
    format!("{API_BASE}{endpoint}").parse().unwrap()
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
}

/// Send a get request to `url` and decode the json response as `T`, after
/// checking the envelope `status` field.
pub(super) async fn get_json<T: DeserializeOwned>(url: impl IntoUrl, context: &str) -> Result<T> {
    let body = reqwest::get(url).await?.bytes().await?;
    decode(&body, context)
}

/// A failed request carries no payload besides `status`, so the envelope is
/// checked before the payload itself is decoded.
fn decode<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T> {
    let Envelope { status } = serde_json::from_slice(body).map_err(|err| {
        error!("error decoding {context} envelope: {err}");
        Error::from(err)
    })?;
    if status != "ok" {
        error!("{context} answered with status {status:?}");
        return Err(Error::Api { status });
    }
    serde_json::from_slice(body).map_err(|err| {
        error!("error decoding {context}: {err}");
        err.into()
    })
}

#[async_trait]
pub trait Request {
    type Response;

    async fn request(self) -> Result<Self::Response>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_yields_payload() {
        let body = br#"{"status":"ok","post":{"id":1,"slug":"foo","title":"Foo","date":"2020-01-01","content":"<img src='http://x/a.jpg'>"}}"#;
        let response: get_post::Response = decode(body, "get_post").unwrap();
        assert_eq!(response.post.id, 1);
        assert_eq!(response.post.title, "Foo");
    }

    #[test]
    fn non_ok_status_is_an_api_error() {
        let body = br#"{"status":"error"}"#;
        let err = decode::<get_post::Response>(body, "get_post").unwrap_err();
        assert_eq!(err.to_string(), "could not execute statement");
        match err {
            Error::Api { status } => assert_eq!(status, "error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_json_error() {
        let err = decode::<get_post::Response>(b"<html>504</html>", "get_post").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
