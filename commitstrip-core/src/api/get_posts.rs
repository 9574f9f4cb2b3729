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
    pub posts: Vec<Post>,
}

/// Fetch the latest posts, newest first. Without a count the API applies
/// its own default page size.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GetPosts {
    count: Option<u32>,
}

impl GetPosts {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_count(mut self, count: Option<u32>) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn url(&self) -> Url {
        let mut url = api_url("get_posts");
        if let Some(count) = self.count {
            url.query_pairs_mut()
                .append_pair("count", &count.to_string());
        }
        url
    }
}

#[async_trait]
impl Request for GetPosts {
    type Response = Response;

    async fn request(self) -> Result<Self::Response> {
        get_json(self.url(), "get_posts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_count() {
        assert_eq!(
            GetPosts::new().url().as_str(),
            "http://www.commitstrip.com/api4dfg/get_posts"
        );
    }

    #[test]
    fn url_with_count() {
        assert_eq!(
            GetPosts::new().with_count(5).url().as_str(),
            "http://www.commitstrip.com/api4dfg/get_posts?count=5"
        );
    }
}
