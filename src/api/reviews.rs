use reqwest::Method;

use super::{
    AckRule,
    ApiClient,
    WriteAck,
};
use crate::core::{
    models::{
        normalize_reviews,
        NewReview,
        ReviewRecord,
    },
    ApiError,
    RestaurantId,
    Review,
};

impl ApiClient {
    pub async fn fetch_reviews(&self, restaurant_id: RestaurantId) -> Result<Vec<Review>, ApiError> {
        let records: Vec<ReviewRecord> =
            self.get_collection(&format!("reviews/{restaurant_id}"), &[]).await?;
        Ok(normalize_reviews(records))
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<WriteAck, ApiError> {
        self.write(Method::POST, "reviews", Some(review), AckRule::Status).await
    }

    pub async fn delete_review(&self, review_id: u64) -> Result<WriteAck, ApiError> {
        self.write::<()>(Method::DELETE, &format!("reviews/{review_id}"), None, AckRule::Status).await
    }
}
