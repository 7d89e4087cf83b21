use crate::{
    core::{
        RestaurantId,
        ReviewId,
    },
    listing::SortKey,
    route::Route,
    survey::Question,
};

// Views only read state and queue what the user asked for; the app applies it after drawing
#[derive(Debug, Clone)]
pub enum UiAction {
    // Navigation
    Navigate(Route),
    Back,

    // Survey
    Answer { question: Question, value: String },
    SubmitSurvey,
    ReloadRestaurants,

    // Category listing
    SetSort(SortKey),
    NextPage,
    PreviousPage,
    RetryCategory,

    // Reviews
    ToggleReviewPanel,
    SubmitReview,
    DiscardReview(ReviewId),
    DeleteReview(ReviewId),
    ReloadReviews,

    // Community
    ReloadPosts,
    SearchPosts,
    SavePost,
    DeletePost(u64),

    // Favorites
    ReloadLiked,
    SearchRestaurants,

    // Session
    Login,
    Logout,

    SetDarkMode(bool),
}

impl UiAction {
    pub fn open_restaurant(id: RestaurantId) -> Self {
        UiAction::Navigate(Route::Restaurant(id))
    }

    pub fn open_category(name: &str) -> Self {
        UiAction::Navigate(Route::Category(name.to_string()))
    }
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
