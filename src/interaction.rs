//! Per-card interaction flags.
//!
//! `liked` and `following` live here. The `playing` flag of a card is owned by
//! the page-wide [`PlayerRegistry`](crate::player::PlayerRegistry) so that
//! starting one player can stop the others.

use crate::config::ORGANISATION;
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub liked: bool,
    pub following: bool,
}

/// The two mutually exclusive looks of the follow button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAppearance {
    Filled,
    Outline,
}

impl FollowAppearance {
    pub fn label(self) -> &'static str {
        match self {
            Self::Filled => "Follow",
            Self::Outline => "Following",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Filled => "bg-ulster-blue hover:bg-ulster-light text-white border border-transparent",
            Self::Outline => "border border-ulster-blue text-ulster-blue bg-white",
        }
    }
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_like(&mut self) -> Notice {
        self.liked = !self.liked;
        if self.liked {
            Notice::new("Added to likes")
        } else {
            Notice::new("Removed from likes")
        }
    }

    pub fn toggle_follow(&mut self) -> Notice {
        self.following = !self.following;
        if self.following {
            Notice::new(format!("Following {ORGANISATION}"))
        } else {
            Notice::new("Unfollowed")
        }
    }

    pub fn follow_appearance(&self) -> FollowAppearance {
        if self.following {
            FollowAppearance::Outline
        } else {
            FollowAppearance::Filled
        }
    }

    pub fn like_class(&self) -> &'static str {
        if self.liked {
            "text-red-500"
        } else {
            "text-ulster-gray"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CardState::new();
        assert!(!state.liked);
        assert!(!state.following);
        assert_eq!(state.follow_appearance(), FollowAppearance::Filled);
    }

    #[test]
    fn test_like_twice_restores_and_complements() {
        let mut state = CardState::new();
        let first = state.toggle_like();
        assert!(state.liked);
        assert_eq!(first.title, "Added to likes");
        assert_eq!(state.like_class(), "text-red-500");

        let second = state.toggle_like();
        assert!(!state.liked);
        assert_eq!(second.title, "Removed from likes");
        assert_eq!(state, CardState::new());
    }

    #[test]
    fn test_follow_twice_restores_and_complements() {
        let mut state = CardState::new();
        let first = state.toggle_follow();
        assert!(state.following);
        assert_eq!(first.title, "Following Ulster University");
        assert_eq!(state.follow_appearance(), FollowAppearance::Outline);
        assert_eq!(state.follow_appearance().label(), "Following");

        let second = state.toggle_follow();
        assert!(!state.following);
        assert_eq!(second.title, "Unfollowed");
        assert_eq!(state.follow_appearance(), FollowAppearance::Filled);
        assert_eq!(state.follow_appearance().label(), "Follow");
        assert_ne!(
            FollowAppearance::Filled.class(),
            FollowAppearance::Outline.class()
        );
    }

    #[test]
    fn test_flags_independent() {
        let mut state = CardState::new();
        state.toggle_like();
        state.toggle_follow();
        state.toggle_like();
        assert!(!state.liked);
        assert!(state.following);
    }
}
