pub mod fetch;
pub mod loader;

pub use fetch::{FetchResponse, HttpFetch, ReqwestFetcher};
pub use loader::InitialVideosLoader;
