//! Builders that turn URL patterns into concrete URLs and links.

mod link;
mod url;

pub use self::link::LinkBuilder;
pub use self::url::UrlBuilder;
