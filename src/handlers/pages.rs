// GET / and GET /about handlers

use std::convert::Infallible;

/// The chat page served at the root route
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

pub const ABOUT_TEXT: &str = "about page";

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    tracing::debug!("GET /");
    Ok(warp::reply::html(INDEX_HTML))
}

pub async fn about_handler() -> Result<impl warp::Reply, Infallible> {
    tracing::debug!("GET /about");
    Ok(ABOUT_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_posts_to_relay_endpoint() {
        assert!(INDEX_HTML.contains("/api/doraemon"));
        assert!(INDEX_HTML.contains("id=\"userInput\""));
        assert!(INDEX_HTML.contains("id=\"messages\""));
    }

    #[test]
    fn test_index_page_never_injects_html() {
        assert!(!INDEX_HTML.contains("innerHTML"));
    }
}
