mod search;
mod video;

pub use search::{SearchRequest, API_BASE};
pub use video::{InitialPageData, SearchEnvelope, VideoRecord};
