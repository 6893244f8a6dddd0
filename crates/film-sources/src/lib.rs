pub mod error;
pub mod http;
pub mod traits;

pub use error::FetchError;
pub use http::HttpTransport;
pub use traits::{FilmTransport, RawResponse};

// Parsed endpoint type shared with the loader
pub use reqwest::Url;
