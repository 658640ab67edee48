use std::time::Duration;

use crate::config::NOTICE_DURATION;

/// A transient message shown to the user, dismissed after `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: NOTICE_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    live: Vec<LiveNotice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(LiveNotice { id, notice });
        id
    }

    /// Removes the notice with `id`; dismissing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) -> Option<Notice> {
        let i = self.live.iter().position(|n| n.id == id)?;
        Some(self.live.remove(i).notice)
    }

    pub fn live(&self) -> &[LiveNotice] {
        &self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
