//! Reviews of one restaurant: fetch, optimistic create and delete.
//!
//! A submitted review shows up immediately as a local entry. When the backend
//! accepts it the authoritative list is fetched again and replaces everything,
//! local entries included. When it refuses, the entry stays on screen marked
//! [`ReviewStatus::Failed`] until the user discards it or a later fetch lands.

use tracing::{
    info,
    warn,
};

use crate::core::{
    models::{
        parse_hashtags,
        NewReview,
    },
    ApiError,
    FormError,
    RequestId,
    RequestSeq,
    RestaurantId,
    Review,
    ReviewId,
    ReviewStatus,
};

/// Text buffers of the write panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub author: String,
    pub content: String,
    pub hashtags: String,
    pub rating: u8,
}

impl ReviewDraft {
    pub fn validate(&self, restaurant_id: RestaurantId) -> Result<NewReview, FormError> {
        let author = self.author.trim();
        let content = self.content.trim();

        if author.is_empty() {
            return Err(FormError::Missing("Author"));
        }
        if content.is_empty() {
            return Err(FormError::Missing("Review"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(FormError::Rating(self.rating));
        }

        Ok(NewReview {
            restaurant_id,
            contents: content.to_string(),
            username: author.to_string(),
            rating: self.rating,
            hashtags: parse_hashtags(&self.hashtags),
        })
    }
}

/// A review accepted locally and waiting for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub local_id: ReviewId,
    pub review: NewReview,
}

#[derive(Debug, Default)]
pub struct ReviewDetailState {
    restaurant_id: Option<RestaurantId>,
    reviews: Vec<Review>,
    fetch_seq: RequestSeq,
    loading: bool,
    error: Option<ApiError>,
    next_local: u64,
    write_open: bool,
    deleting: Option<u64>,
}

impl ReviewDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurant_id(&self) -> Option<RestaurantId> {
        self.restaurant_id
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_write_open(&self) -> bool {
        self.write_open
    }

    pub fn toggle_write_panel(&mut self) {
        self.write_open = !self.write_open;
    }

    pub fn is_deleting(&self, review_id: u64) -> bool {
        self.deleting == Some(review_id)
    }

    /// Shows a restaurant's reviews and issues the fetch for them.
    pub fn open(&mut self, restaurant_id: RestaurantId) -> RequestId {
        if self.restaurant_id != Some(restaurant_id) {
            self.restaurant_id = Some(restaurant_id);
            self.reviews.clear();
            self.error = None;
            self.write_open = false;
            self.deleting = None;
        }
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> RequestId {
        self.loading = true;
        self.fetch_seq.issue()
    }

    /// Replaces the held reviews wholesale. A failure keeps the previous list.
    pub fn finish_fetch(&mut self, id: RequestId, result: Result<Vec<Review>, ApiError>) -> bool {
        if !self.fetch_seq.is_current(id) {
            info!("Dropping superseded review response {id}");
            return false;
        }
        self.loading = false;

        match result {
            Ok(reviews) => {
                self.reviews = reviews;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to fetch reviews for {:?}: {e}", self.restaurant_id);
                self.error = Some(e);
            }
        }
        true
    }

    /// Validates the draft and appends it as a pending local entry.
    pub fn submit(&mut self, draft: &ReviewDraft) -> Result<Submission, FormError> {
        let restaurant_id = self.restaurant_id.ok_or(FormError::Missing("Restaurant"))?;
        let review = draft.validate(restaurant_id)?;

        self.next_local += 1;
        let local_id = ReviewId::Local(self.next_local);

        self.reviews.push(Review {
            id: local_id,
            author: review.username.clone(),
            content: review.contents.clone(),
            hashtags: review.hashtags.clone(),
            rating: review.rating,
            restaurant_id: Some(restaurant_id),
            status: ReviewStatus::Pending,
        });

        Ok(Submission { local_id, review })
    }

    /// Settles a submission. On success the write panel closes and the id of
    /// the follow-up fetch is returned.
    pub fn finish_submit(
        &mut self,
        submission: &Submission,
        result: Result<(), ApiError>,
    ) -> Option<RequestId> {
        if self.restaurant_id != Some(submission.review.restaurant_id) {
            return None;
        }

        match result {
            Ok(()) => {
                info!("Review {} accepted", submission.local_id);
                self.write_open = false;
                Some(self.begin_fetch())
            }
            Err(e) => {
                warn!("Review {} was not saved: {e}", submission.local_id);
                if let Some(entry) = self.reviews.iter_mut().find(|r| r.id == submission.local_id)
                {
                    entry.status = ReviewStatus::Failed;
                }
                self.error = Some(e);
                None
            }
        }
    }

    /// Rolls back a failed optimistic entry.
    pub fn discard_failed(&mut self, local_id: ReviewId) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|r| !(r.id == local_id && r.status == ReviewStatus::Failed));
        before != self.reviews.len()
    }

    pub fn failed_count(&self) -> usize {
        self.reviews.iter().filter(|r| r.status == ReviewStatus::Failed).count()
    }

    /// Marks a server review as being deleted. Local entries cannot be deleted remotely.
    pub fn request_delete(&mut self, review_id: ReviewId) -> Option<u64> {
        match review_id {
            ReviewId::Server(id) if self.deleting.is_none() => {
                self.deleting = Some(id);
                Some(id)
            }
            _ => None,
        }
    }

    /// On success returns the id of the follow-up fetch; on failure the stale list stays.
    pub fn finish_delete(&mut self, review_id: u64, result: Result<(), ApiError>) -> Option<RequestId> {
        if self.deleting != Some(review_id) {
            return None;
        }
        self.deleting = None;

        match result {
            Ok(()) => Some(self.begin_fetch()),
            Err(e) => {
                warn!("Failed to delete review {review_id}: {e}");
                self.error = Some(e);
                None
            }
        }
    }
}
