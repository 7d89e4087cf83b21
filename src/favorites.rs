use tracing::warn;

use crate::core::{
    ApiError,
    RequestId,
    RequestSeq,
    Restaurant,
};

/// Restaurants saved as liked after a successful match, plus restaurant title search.
#[derive(Debug, Default)]
pub struct FavoritesState {
    liked: Vec<Restaurant>,
    liked_seq: RequestSeq,
    loading: bool,
    error: Option<ApiError>,
    results: Vec<Restaurant>,
    search_seq: RequestSeq,
    pub query: String,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn liked(&self) -> &[Restaurant] {
        &self.liked
    }

    pub fn results(&self) -> &[Restaurant] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn begin_load(&mut self) -> RequestId {
        self.loading = true;
        self.liked_seq.issue()
    }

    pub fn finish_load(&mut self, id: RequestId, result: Result<Vec<Restaurant>, ApiError>) -> bool {
        if !self.liked_seq.is_current(id) {
            return false;
        }
        self.loading = false;

        match result {
            Ok(liked) => {
                self.liked = liked;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load liked restaurants: {e}");
                self.error = Some(e);
            }
        }
        true
    }

    /// Issues a search for the current query. A blank query clears results instead.
    pub fn begin_search(&mut self) -> Option<(RequestId, String)> {
        let id = self.search_seq.issue();
        let title = self.query.trim();
        if title.is_empty() {
            self.results.clear();
            return None;
        }
        Some((id, title.to_string()))
    }

    pub fn finish_search(&mut self, id: RequestId, result: Result<Vec<Restaurant>, ApiError>) -> bool {
        if !self.search_seq.is_current(id) {
            return false;
        }

        match result {
            Ok(results) => self.results = results,
            Err(e) => {
                warn!("Restaurant search failed: {e}");
                self.error = Some(e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_reload_keeps_liked() {
        let mut favorites = FavoritesState::new();
        let id = favorites.begin_load();
        favorites.finish_load(id, Ok(vec![Restaurant::new(1, "Gogi House")]));

        let id = favorites.begin_load();
        favorites.finish_load(id, Err(ApiError::Status { code: 401, url: "x".to_string() }));
        assert_eq!(favorites.liked().len(), 1);
        assert!(favorites.error().is_some());
    }

    #[test]
    fn test_blank_search_clears() {
        let mut favorites = FavoritesState::new();
        favorites.query = "pho".to_string();
        let (id, title) = favorites.begin_search().unwrap();
        assert_eq!(title, "pho");
        favorites.finish_search(id, Ok(vec![Restaurant::new(4, "Pho 24")]));
        assert_eq!(favorites.results().len(), 1);

        favorites.query = "  ".to_string();
        assert!(favorites.begin_search().is_none());
        assert!(favorites.results().is_empty());
        // Late answer to the earlier search is ignored
        assert!(!favorites.finish_search(id, Ok(vec![Restaurant::new(4, "Pho 24")])));
    }
}
