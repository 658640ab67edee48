use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::catalog::canonical_url;
use crate::config::FACEBOOK_SHARER_BASE;
use crate::notice::Notice;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Email,
    Facebook,
    Instagram,
    /// Anything else falls back to a plain clipboard copy.
    Clipboard,
}

impl From<&str> for SharePlatform {
    fn from(value: &str) -> Self {
        match value {
            "email" => Self::Email,
            "facebook" => Self::Facebook,
            "instagram" => Self::Instagram,
            _ => Self::Clipboard,
        }
    }
}

impl SharePlatform {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Clipboard => "Copy link",
        }
    }
}

/// The external hand-off a share resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Navigate the current context, used for `mailto:`.
    OpenUri(String),
    /// Open in a new browsing context.
    OpenNewContext(String),
    CopyLink { url: String, notice: Notice },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
    #[error("Popup blocked")]
    PopupBlocked,
    #[error("Mail handler unavailable: {0}")]
    MailHandlerUnavailable(String),
}

impl ShareError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::ClipboardWriteFailed(_) => Notice::new("Could not copy link"),
            Self::PopupBlocked => Notice::new("Popup blocked: could not open Facebook"),
            Self::MailHandlerUnavailable(_) => Notice::new("Could not open your mail app"),
        }
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn mailto_uri(title: &str, url: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(title),
        encode_component(url)
    )
}

pub fn facebook_sharer_url(url: &str) -> String {
    format!("{FACEBOOK_SHARER_BASE}{}", encode_component(url))
}

pub fn plan_share(platform: SharePlatform, video_id: &str, title: &str) -> ShareAction {
    let url = canonical_url(video_id);
    match platform {
        SharePlatform::Email => ShareAction::OpenUri(mailto_uri(title, &url)),
        SharePlatform::Facebook => ShareAction::OpenNewContext(facebook_sharer_url(&url)),
        SharePlatform::Instagram => ShareAction::CopyLink {
            url,
            notice: Notice::new("Link copied! Share it on Instagram"),
        },
        SharePlatform::Clipboard => ShareAction::CopyLink {
            url,
            notice: Notice::new("Copied link to clipboard"),
        },
    }
}
