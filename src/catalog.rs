use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{YOUTUBE_EMBED_BASE, YOUTUBE_WATCH_BASE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub id: String,
    pub title: String,
}

impl VideoDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn canonical_url(&self) -> String {
        canonical_url(&self.id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Video at position {index} has no id")]
    EmptyId { index: usize },
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

const VIDEOS: [(&str, &str); 6] = [
    ("Nqcp8KsnNNU", "Ulster University Video"),
    ("0ukvRO4XA2E", "Ulster University Video"),
    ("oIAH5bmA_HQ", "Ulster University Video"),
    ("vPynCeIDoT4", "Ulster University - Belfast Campus"),
    ("L5-BV2P4PHU", "Ulster University - Magee Campus"),
    ("iqkON2Thpdg", "Ulster University - Coleraine Campus"),
];

/// Source of the ordered list of videos shown on the page.
pub trait CatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<VideoDescriptor>, CatalogError>;
}

/// The fixed catalog compiled into the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogProvider for StaticCatalog {
    fn fetch_catalog(&self) -> Result<Vec<VideoDescriptor>, CatalogError> {
        validate(
            VIDEOS
                .iter()
                .map(|(id, title)| VideoDescriptor::new(*id, *title))
                .collect(),
        )
    }
}

pub fn validate(videos: Vec<VideoDescriptor>) -> Result<Vec<VideoDescriptor>, CatalogError> {
    if let Some(index) = videos.iter().position(|v| v.id.is_empty()) {
        return Err(CatalogError::EmptyId { index });
    }
    Ok(videos)
}

/// Watch-page URL used by every share action.
pub fn canonical_url(video_id: &str) -> String {
    format!("{YOUTUBE_WATCH_BASE}{video_id}")
}

pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    if autoplay {
        format!("{YOUTUBE_EMBED_BASE}{video_id}?autoplay=1")
    } else {
        format!("{YOUTUBE_EMBED_BASE}{video_id}")
    }
}
