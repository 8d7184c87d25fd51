//! Page fetching
//!
//! One GET request per run, bounded by [`FETCH_TIMEOUT`]. Non-2xx responses
//! come back as data; only transport failures produce a [`FetchError`].

mod fetcher;

pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage, FETCH_TIMEOUT};
