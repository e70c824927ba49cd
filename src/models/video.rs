use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One video result as returned by the search API.
///
/// The record is held exactly as received and serialized back out unchanged.
/// Known fields (`id`, `title`, `embed`, `length_min`, `rate`, `views`,
/// `keywords`) are read through accessors; a field that is missing or not a
/// string reads as `None` instead of rejecting the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct VideoRecord(Value);

impl VideoRecord {
    /// Raw value of `name`, whatever its JSON type
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn embed(&self) -> Option<&str> {
        self.text("embed")
    }

    pub fn length_min(&self) -> Option<&str> {
        self.text("length_min")
    }

    pub fn rate(&self) -> Option<&str> {
        self.text("rate")
    }

    pub fn views(&self) -> Option<&str> {
        self.text("views")
    }

    pub fn keywords(&self) -> Option<&str> {
        self.text("keywords")
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Top-level search response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    /// Absent and `null` are both treated as an empty result
    #[serde(default)]
    pub videos: Option<Vec<VideoRecord>>,
}

impl SearchEnvelope {
    pub fn into_videos(self) -> Vec<VideoRecord> {
        self.videos.unwrap_or_default()
    }
}

/// Data handed to the rendering layer on page load
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitialPageData {
    pub initial_videos: Vec<VideoRecord>,
}
