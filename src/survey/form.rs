use tracing::{
    info,
    warn,
};

use super::{
    matching::match_restaurants,
    store::{
        PreferenceStore,
        Question,
    },
};
use crate::core::{
    ApiError,
    RequestId,
    RequestSeq,
    Restaurant,
    RestaurantId,
};

/// Percentage credited for each answered question.
pub const PROGRESS_PER_ANSWER: u8 = 20;

/// Result of submitting a complete survey. Not an error: an empty match is
/// a valid outcome the user is told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyOutcome {
    Matched(Vec<RestaurantId>),
    NoMatch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LikesState {
    Idle,
    Saving,
    Saved,
    Failed(ApiError),
}

/// Survey screen state: restaurant loading and the likes write that follows a match.
#[derive(Debug)]
pub struct SurveyState {
    load_seq: RequestSeq,
    likes_seq: RequestSeq,
    loading: bool,
    load_error: Option<ApiError>,
    likes: LikesState,
}

impl Default for SurveyState {
    fn default() -> Self {
        Self {
            load_seq: RequestSeq::new(),
            likes_seq: RequestSeq::new(),
            loading: false,
            load_error: None,
            likes: LikesState::Idle,
        }
    }
}

impl SurveyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        self.load_error.as_ref()
    }

    pub fn likes(&self) -> &LikesState {
        &self.likes
    }

    pub fn begin_load(&mut self) -> RequestId {
        self.loading = true;
        self.load_seq.issue()
    }

    /// Applies a restaurant fetch. Returns `false` when the response was superseded.
    pub fn finish_load(
        &mut self,
        store: &mut PreferenceStore,
        id: RequestId,
        result: Result<Vec<Restaurant>, ApiError>,
    ) -> bool {
        if !self.load_seq.is_current(id) {
            info!("Dropping superseded restaurant load {id}");
            return false;
        }
        self.loading = false;

        match result {
            Ok(restaurants) => {
                info!("Loaded {} restaurants for matching", restaurants.len());
                self.load_error = None;
                store.set_restaurants(restaurants);
            }
            Err(e) => {
                warn!("Failed to load restaurants: {e}");
                self.load_error = Some(e);
            }
        }
        true
    }

    pub fn answer(&self, store: &mut PreferenceStore, question: Question, value: &str) {
        store.set_answer(question, value);
    }

    pub fn progress(&self, store: &PreferenceStore) -> u8 {
        store.snapshot().preferences().answered_count() as u8 * PROGRESS_PER_ANSWER
    }

    pub fn can_submit(&self, store: &PreferenceStore) -> bool {
        store.snapshot().preferences().is_complete() && self.likes != LikesState::Saving
    }

    /// Runs matching over the current snapshot and stores the filtered result.
    pub fn submit(&mut self, store: &mut PreferenceStore) -> SurveyOutcome {
        let snapshot = store.snapshot();
        let matched = match_restaurants(snapshot.preferences(), snapshot.restaurants());
        let ids: Vec<RestaurantId> = matched.iter().map(|r| r.id).collect();

        info!(
            "Matched {} of {} restaurants (revision {})",
            ids.len(),
            snapshot.restaurants().len(),
            snapshot.revision()
        );
        store.set_filtered(matched);

        if ids.is_empty() {
            SurveyOutcome::NoMatch
        } else {
            SurveyOutcome::Matched(ids)
        }
    }

    pub fn begin_save_likes(&mut self) -> RequestId {
        self.likes = LikesState::Saving;
        self.likes_seq.issue()
    }

    /// Returns `true` when the likes were stored and the app may move on.
    pub fn finish_save_likes(&mut self, id: RequestId, result: Result<(), ApiError>) -> bool {
        if !self.likes_seq.is_current(id) {
            return false;
        }

        match result {
            Ok(()) => {
                self.likes = LikesState::Saved;
                true
            }
            Err(e) => {
                warn!("Failed to save liked restaurants: {e}");
                self.likes = LikesState::Failed(e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasty(id: u64) -> Restaurant {
        let mut restaurant = Restaurant::new(id, "Bibim");
        restaurant.food_type = "Korean".to_string();
        [restaurant.spicy, restaurant.sweet, restaurant.salty, restaurant.sour] = [Some(4); 4];
        restaurant
    }

    fn answer_all(state: &SurveyState, store: &mut PreferenceStore, label: &str) {
        state.answer(store, Question::FoodType, "Korean");
        for question in [Question::Spicy, Question::Sweet, Question::Salty, Question::Sour] {
            state.answer(store, question, label);
        }
    }

    #[test]
    fn test_progress_and_submit_gate() {
        let state = SurveyState::new();
        let mut store = PreferenceStore::new();
        assert_eq!(state.progress(&store), 0);
        assert!(!state.can_submit(&store));

        state.answer(&mut store, Question::Spicy, "Good");
        state.answer(&mut store, Question::Sour, "Bad");
        assert_eq!(state.progress(&store), 40);
        assert!(!state.can_submit(&store));

        answer_all(&state, &mut store, "Good");
        assert_eq!(state.progress(&store), 100);
        assert!(state.can_submit(&store));
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut state = SurveyState::new();
        let mut store = PreferenceStore::new();

        let stale = state.begin_load();
        let latest = state.begin_load();

        assert!(state.finish_load(&mut store, latest, Ok(vec![tasty(1), tasty(2)])));
        assert!(!state.finish_load(&mut store, stale, Ok(vec![tasty(3)])));
        assert_eq!(store.snapshot().restaurants().len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_load_failure_keeps_collection() {
        let mut state = SurveyState::new();
        let mut store = PreferenceStore::new();

        let id = state.begin_load();
        state.finish_load(&mut store, id, Ok(vec![tasty(1)]));

        let id = state.begin_load();
        state.finish_load(&mut store, id, Err(ApiError::Transport("offline".to_string())));
        assert_eq!(store.snapshot().restaurants().len(), 1);
        assert!(state.load_error().is_some());
    }

    #[test]
    fn test_submit_outcomes() {
        let mut state = SurveyState::new();
        let mut store = PreferenceStore::new();
        let id = state.begin_load();
        state.finish_load(&mut store, id, Ok(vec![tasty(7)]));

        answer_all(&state, &mut store, "Good");
        assert_eq!(state.submit(&mut store), SurveyOutcome::Matched(vec![RestaurantId(7)]));
        assert_eq!(store.snapshot().filtered().len(), 1);

        answer_all(&state, &mut store, "Verybad");
        assert_eq!(state.submit(&mut store), SurveyOutcome::NoMatch);
        assert!(store.snapshot().filtered().is_empty());
    }

    #[test]
    fn test_likes_save_lifecycle() {
        let mut state = SurveyState::new();
        let mut store = PreferenceStore::new();
        answer_all(&state, &mut store, "Good");

        let id = state.begin_save_likes();
        assert!(!state.can_submit(&store));

        let rejected = ApiError::Rejected { result_code: "F-1".to_string(), message: None };
        assert!(!state.finish_save_likes(id, Err(rejected.clone())));
        assert_eq!(state.likes(), &LikesState::Failed(rejected));
        assert!(state.can_submit(&store));

        let id = state.begin_save_likes();
        assert!(state.finish_save_likes(id, Ok(())));
        assert_eq!(state.likes(), &LikesState::Saved);
    }
}
