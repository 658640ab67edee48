use crate::catalog::{CatalogError, VideoDescriptor};

/// Load lifecycle of the video feed. Leaves `Loading` at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Loading,
    Ready(Vec<VideoDescriptor>),
    Failed(String),
}

impl PageState {
    pub fn resolve(self, result: Result<Vec<VideoDescriptor>, CatalogError>) -> Self {
        match self {
            Self::Loading => match result {
                Ok(videos) => Self::Ready(videos),
                Err(e) => Self::Failed(e.to_string()),
            },
            resolved => resolved,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn videos(&self) -> &[VideoDescriptor] {
        match self {
            Self::Ready(videos) => videos,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};
    use crate::interaction::CardState;
    use crate::player::PlayerRegistry;

    #[test]
    fn test_starts_loading_with_no_cards() {
        let state = PageState::default();
        assert!(state.is_loading());
        assert!(state.videos().is_empty());
    }

    #[test]
    fn test_resolves_once() {
        let state = PageState::Loading.resolve(StaticCatalog.fetch_catalog());
        assert_eq!(state.videos().len(), 6);

        let state = state.resolve(Err(CatalogError::Unavailable("late".into())));
        assert_eq!(state.videos().len(), 6);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure() {
        let state =
            PageState::Loading.resolve(Err(CatalogError::Unavailable("offline".into())));
        assert_eq!(
            state,
            PageState::Failed("Catalog unavailable: offline".to_string())
        );
        let state = state.resolve(Ok(vec![VideoDescriptor::new("abc", "late")]));
        assert!(matches!(state, PageState::Failed(_)));
    }

    #[test]
    fn test_load_then_like_first_card() {
        let state = PageState::default();
        assert!(state.is_loading());
        assert!(state.videos().is_empty());

        let state = state.resolve(StaticCatalog.fetch_catalog());
        let videos = state.videos();
        assert_eq!(videos.len(), 6);
        let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Ulster University Video",
                "Ulster University Video",
                "Ulster University Video",
                "Ulster University - Belfast Campus",
                "Ulster University - Magee Campus",
                "Ulster University - Coleraine Campus",
            ]
        );

        let mut registry = PlayerRegistry::new();
        let mut cards: Vec<(CardState, _)> = videos
            .iter()
            .map(|_| (CardState::new(), registry.register()))
            .collect();

        let notice = cards[0].0.toggle_like();
        assert!(cards[0].0.liked);
        assert_eq!(notice.title, "Added to likes");
        assert!(cards[1..].iter().all(|(c, _)| !c.liked));
        assert!(cards.iter().all(|(_, k)| !registry.is_playing(*k)));
    }
}
