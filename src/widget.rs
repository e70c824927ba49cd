//! Scroll-driven video widget contract
//!
//! The widget itself is supplied by a separately loaded browser library. This
//! module only describes how it is configured and driven, so code that mounts
//! one receives a `ScrollyVideoFactory` instead of looking the library up.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub type ReadyCallback = Arc<dyn Fn() + Send + Sync>;
pub type ChangeCallback = Arc<dyn Fn(f64) + Send + Sync>;
pub type Easing = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Construction options for a widget instance.
///
/// Serializes to the option object the browser library accepts; unset flags
/// are omitted and callbacks are never serialized.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollyVideoOptions {
    /// Mount point (element id or selector)
    pub scrolly_video_container: String,
    /// Media source URL
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_web_codecs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_percentage: Option<f64>,
    #[serde(skip)]
    pub on_ready: Option<ReadyCallback>,
    #[serde(skip)]
    pub on_change: Option<ChangeCallback>,
}

impl ScrollyVideoOptions {
    pub fn new(container: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            scrolly_video_container: container.into(),
            src: src.into(),
            cover: None,
            sticky: None,
            full: None,
            track_scroll: None,
            transition_speed: None,
            debug: None,
            frame_threshold: None,
            lock_scroll: None,
            use_web_codecs: None,
            video_percentage: None,
            on_ready: None,
            on_change: None,
        }
    }

    pub fn with_cover(mut self, cover: bool) -> Self {
        self.cover = Some(cover);
        self
    }

    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = Some(sticky);
        self
    }

    pub fn with_full(mut self, full: bool) -> Self {
        self.full = Some(full);
        self
    }

    pub fn with_track_scroll(mut self, track_scroll: bool) -> Self {
        self.track_scroll = Some(track_scroll);
        self
    }

    pub fn with_transition_speed(mut self, speed: f64) -> Self {
        self.transition_speed = Some(speed);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn with_frame_threshold(mut self, threshold: f64) -> Self {
        self.frame_threshold = Some(threshold);
        self
    }

    pub fn with_lock_scroll(mut self, lock_scroll: bool) -> Self {
        self.lock_scroll = Some(lock_scroll);
        self
    }

    pub fn with_web_codecs(mut self, use_web_codecs: bool) -> Self {
        self.use_web_codecs = Some(use_web_codecs);
        self
    }

    pub fn with_video_percentage(mut self, percentage: f64) -> Self {
        self.video_percentage = Some(percentage);
        self
    }

    pub fn on_ready(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ready = Some(Arc::new(callback));
        self
    }

    pub fn on_change(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for ScrollyVideoOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollyVideoOptions")
            .field("scrolly_video_container", &self.scrolly_video_container)
            .field("src", &self.src)
            .field("cover", &self.cover)
            .field("sticky", &self.sticky)
            .field("full", &self.full)
            .field("track_scroll", &self.track_scroll)
            .field("transition_speed", &self.transition_speed)
            .field("debug", &self.debug)
            .field("frame_threshold", &self.frame_threshold)
            .field("lock_scroll", &self.lock_scroll)
            .field("use_web_codecs", &self.use_web_codecs)
            .field("video_percentage", &self.video_percentage)
            .field("on_ready", &self.on_ready.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Per-call overrides for `set_video_percentage`
#[derive(Clone, Default)]
pub struct PercentageOptions {
    pub transition_speed: Option<f64>,
    pub easing: Option<Easing>,
}

impl fmt::Debug for PercentageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PercentageOptions")
            .field("transition_speed", &self.transition_speed)
            .field("easing", &self.easing.is_some())
            .finish()
    }
}

/// A constructed widget
pub trait ScrollyVideoInstance: Send {
    fn src(&self) -> &str;

    /// Points the widget at a different media source
    fn set_src(&mut self, src: String);

    /// Moves playback towards `percentage` (0.0 to 1.0)
    fn set_video_percentage(&mut self, percentage: f64, options: Option<PercentageOptions>);

    /// Releases everything the instance holds
    fn destroy(self: Box<Self>);
}

/// Constructs widget instances
pub trait ScrollyVideoFactory: Send + Sync {
    fn create(&self, options: ScrollyVideoOptions) -> Box<dyn ScrollyVideoInstance>;
}

impl<F> ScrollyVideoFactory for F
where
    F: Fn(ScrollyVideoOptions) -> Box<dyn ScrollyVideoInstance> + Send + Sync,
{
    fn create(&self, options: ScrollyVideoOptions) -> Box<dyn ScrollyVideoInstance> {
        self(options)
    }
}
