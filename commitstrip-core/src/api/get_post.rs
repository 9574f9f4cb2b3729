use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::{Request, Result};

use super::{api_url, get_json};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Response {
    pub post: Post,
}

/// Fetch one post, selected by its slug or by its numeric id.
///
/// The API treats the two selectors as mutually exclusive, so a request
/// holds exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GetPost {
    Slug(String),
    Id(u64),
}

impl GetPost {
    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self::Slug(slug.into())
    }

    pub fn by_id(id: u64) -> Self {
        Self::Id(id)
    }

    fn url(&self) -> Url {
        let mut url = api_url("get_post");
        match self {
            Self::Slug(slug) => {
                url.query_pairs_mut().append_pair("slug", slug);
            }
            Self::Id(id) => {
                url.query_pairs_mut().append_pair("id", &id.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl Request for GetPost {
    type Response = Response;

    async fn request(self) -> Result<Self::Response> {
        get_json(self.url(), "get_post").await
    }
}
