//! Pagination headers: `X-Total-Count` and an RFC 5988 `Link` header.

use axum::http::header::LINK;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use stbarnabe_core::types::Page;

/// Header carrying the total number of elements.
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Build the pagination headers for `page`, with links relative to `base_url`.
///
/// `next` is present only when a later page exists and `prev` only past
/// the first page; `last` and `first` are always present.
pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total_elements));

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(base_url, page.number + 1, page.size, "next"));
    }
    if page.has_previous() {
        links.push(link(base_url, page.number - 1, page.size, "prev"));
    }
    links.push(link(base_url, page.last_page(), page.size, "last"));
    links.push(link(base_url, 0, page.size, "first"));

    if let Ok(value) = HeaderValue::try_from(links.join(",")) {
        headers.insert(LINK, value);
    }
    headers
}

fn link(base_url: &str, page: u64, size: u64, rel: &str) -> String {
    format!("<{base_url}?page={page}&size={size}>; rel=\"{rel}\"")
}
