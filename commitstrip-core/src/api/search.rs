use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::{Request, Result};

use super::{api_url, get_json};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Response {
    pub posts: Vec<Post>,
}

/// Search for posts matching a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Search {
    query: String,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    fn url(&self) -> Url {
        let mut url = api_url("get_search_results");
        url.query_pairs_mut().append_pair("search", &self.query);
        url
    }
}

#[async_trait]
impl Request for Search {
    type Response = Response;

    async fn request(self) -> Result<Self::Response> {
        get_json(self.url(), "get_search_results").await
    }
}
