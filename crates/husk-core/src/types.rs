use serde::{Deserialize, Serialize};

/// The three runtime values exposed to the bundle as `window.process.env`.
/// Unset values stay empty strings; they are never escaped or transformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub supabase_url: String,
    #[serde(default)]
    pub supabase_key: String,
}

impl Secrets {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() && self.supabase_url.is_empty() && self.supabase_key.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOptions {
    #[serde(default = "default_frame_height")]
    pub height: u32,
    #[serde(default = "default_frame_scrolling")]
    pub scrolling: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            height: default_frame_height(),
            scrolling: default_frame_scrolling(),
        }
    }
}

fn default_frame_height() -> u32 {
    1000
}

fn default_frame_scrolling() -> bool {
    true
}
