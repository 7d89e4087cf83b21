use reqwest::Method;
use serde::Serialize;

use super::{
    AckRule,
    ApiClient,
    WriteAck,
};
use crate::core::{
    models::{
        normalize_restaurants,
        RestaurantRecord,
    },
    ApiError,
    Restaurant,
    RestaurantId,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikesBody<'a> {
    restaurant_ids: &'a [RestaurantId],
}

impl ApiClient {
    pub async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let records: Vec<RestaurantRecord> = self.get_collection("restaurants", &[]).await?;
        Ok(normalize_restaurants(records))
    }

    pub async fn fetch_restaurants_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Restaurant>, ApiError> {
        let records: Vec<RestaurantRecord> =
            self.get_collection("restaurants", &[("category", category)]).await?;
        Ok(normalize_restaurants(records))
    }

    pub async fn search_restaurants(&self, title: &str) -> Result<Vec<Restaurant>, ApiError> {
        let records: Vec<RestaurantRecord> =
            self.get_collection("restaurants", &[("title", title)]).await?;
        Ok(normalize_restaurants(records))
    }

    /// Stores the matched restaurants as the session user's liked restaurants.
    pub async fn save_liked_restaurants(
        &self,
        ids: &[RestaurantId],
    ) -> Result<WriteAck, ApiError> {
        let body = LikesBody { restaurant_ids: ids };
        self.write(Method::POST, "restaurants/likes", Some(&body), AckRule::Status).await
    }

    pub async fn fetch_liked_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let records: Vec<RestaurantRecord> =
            self.get_collection("restaurants/likes", &[]).await?;
        Ok(normalize_restaurants(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_body_shape() {
        let ids = [RestaurantId(4), RestaurantId(9)];
        let body = serde_json::to_value(LikesBody { restaurant_ids: &ids }).unwrap();
        assert_eq!(body, serde_json::json!({ "restaurantIds": [4, 9] }));
    }
}
