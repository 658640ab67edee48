//! Application-wide constants for the video feed.

use std::time::Duration;

pub const ORGANISATION: &str = "Ulster University";
pub const PAGE_HEADING: &str = "Ulster University Social App";
pub const PAGE_TAGLINE: &str = "Watch and interact with Ulster University's latest videos";

/// Cosmetic delay before the catalog is shown, not a timeout.
pub const CATALOG_LOAD_DELAY: Duration = Duration::from_millis(500);
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

pub const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const FACEBOOK_SHARER_BASE: &str = "https://www.facebook.com/sharer/sharer.php?u=";

pub const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
