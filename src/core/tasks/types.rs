use crate::{
    core::{
        ApiError,
        Post,
        RequestId,
        Restaurant,
        Review,
        SessionUser,
    },
    reviews::Submission,
};

pub type Fetched<T> = Result<T, ApiError>;

/// Outcome of one background call, tagged so the owning screen can tell
/// whether it is still the latest response it asked for.
#[derive(Debug, Clone)]
pub enum TaskResult {
    SessionChecked { id: RequestId, result: Fetched<bool> },
    LoggedIn { id: RequestId, result: Fetched<SessionUser> },
    LoggedOut { id: RequestId, result: Fetched<()> },

    RestaurantsLoaded { id: RequestId, result: Fetched<Vec<Restaurant>> },
    LikesSaved { id: RequestId, result: Fetched<()> },
    LikedLoaded { id: RequestId, result: Fetched<Vec<Restaurant>> },
    RestaurantSearch { id: RequestId, result: Fetched<Vec<Restaurant>> },
    CategoryLoaded { id: RequestId, result: Fetched<Vec<Restaurant>> },

    ReviewsLoaded { id: RequestId, result: Fetched<Vec<Review>> },
    ReviewSubmitted { submission: Submission, result: Fetched<()> },
    ReviewDeleted { review_id: u64, result: Fetched<()> },

    PostsLoaded { id: RequestId, result: Fetched<Vec<Post>> },
    PostSearch { id: RequestId, result: Fetched<Vec<Post>> },
    PostLoaded { post_id: u64, result: Fetched<Post> },
    PostWritten { id: RequestId, result: Fetched<()> },
    PostDeleted { post_id: u64, result: Fetched<()> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::SessionChecked { .. } => "session_check",
            TaskResult::LoggedIn { .. } => "login",
            TaskResult::LoggedOut { .. } => "logout",
            TaskResult::RestaurantsLoaded { .. } => "restaurants",
            TaskResult::LikesSaved { .. } => "likes_save",
            TaskResult::LikedLoaded { .. } => "likes",
            TaskResult::RestaurantSearch { .. } => "restaurant_search",
            TaskResult::CategoryLoaded { .. } => "category",
            TaskResult::ReviewsLoaded { .. } => "reviews",
            TaskResult::ReviewSubmitted { .. } => "review_submit",
            TaskResult::ReviewDeleted { .. } => "review_delete",
            TaskResult::PostsLoaded { .. } => "posts",
            TaskResult::PostSearch { .. } => "post_search",
            TaskResult::PostLoaded { .. } => "post",
            TaskResult::PostWritten { .. } => "post_write",
            TaskResult::PostDeleted { .. } => "post_delete",
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            TaskResult::SessionChecked { result, .. } => result.as_ref().err(),
            TaskResult::LoggedIn { result, .. } => result.as_ref().err(),
            TaskResult::LoggedOut { result, .. }
            | TaskResult::LikesSaved { result, .. }
            | TaskResult::ReviewSubmitted { result, .. }
            | TaskResult::ReviewDeleted { result, .. }
            | TaskResult::PostWritten { result, .. }
            | TaskResult::PostDeleted { result, .. } => result.as_ref().err(),
            TaskResult::RestaurantsLoaded { result, .. }
            | TaskResult::LikedLoaded { result, .. }
            | TaskResult::RestaurantSearch { result, .. }
            | TaskResult::CategoryLoaded { result, .. } => result.as_ref().err(),
            TaskResult::ReviewsLoaded { result, .. } => result.as_ref().err(),
            TaskResult::PostsLoaded { result, .. } | TaskResult::PostSearch { result, .. } => {
                result.as_ref().err()
            }
            TaskResult::PostLoaded { result, .. } => result.as_ref().err(),
        }
    }
}
