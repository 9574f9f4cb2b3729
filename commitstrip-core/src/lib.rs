pub use api::{DownloadImage, GetPost, GetPosts, Request, Search};
pub use errors::{Error, Result};
pub use html::last_image_src;
pub use iri::iri_to_uri;

pub mod api;
mod errors;
pub mod html;
pub mod iri;
