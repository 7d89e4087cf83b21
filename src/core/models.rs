use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub u64);

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub food_type: String,          // Cuisine used by the survey ("Korean", "Western", ...)
    pub category: String,           // Browsing category, may differ from food_type
    pub spicy: Option<i32>,         // Taste attributes on a 1-5 scale, None when not sent
    pub sweet: Option<i32>,
    pub salty: Option<i32>,
    pub sour: Option<i32>,
    pub rating: f32,
    pub review_count: u32,
    pub view_count: u32,            // Shown as the favorite count
    pub opening_hours: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub menus: Vec<String>,
}

impl Restaurant {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: RestaurantId(id),
            name: name.into(),
            food_type: String::new(),
            category: String::new(),
            spicy: None,
            sweet: None,
            salty: None,
            sour: None,
            rating: 0.0,
            review_count: 0,
            view_count: 0,
            opening_hours: None,
            address: None,
            phone: None,
            image: None,
            menus: Vec::new(),
        }
    }

    /// Cuisine label, falling back to the category when no food type was sent.
    pub fn cuisine(&self) -> &str {
        if self.food_type.is_empty() {
            &self.category
        } else {
            &self.food_type
        }
    }

    /// Normalizes a wire record. Records without any identifier get their
    /// 1-based position in the fetched sequence.
    pub fn from_record(record: RestaurantRecord, position: usize) -> Self {
        let id = [&record.id, &record.restaurants_id, &record.restaurant_id]
            .into_iter()
            .find_map(|value| value.as_ref().and_then(id_from_value))
            .unwrap_or(position as u64 + 1);

        Self {
            id: RestaurantId(id),
            name: record.name.unwrap_or_default(),
            food_type: record.food_type.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
            spicy: record.spicy,
            sweet: record.sweet,
            salty: record.salty,
            sour: record.sour,
            rating: record.rating.unwrap_or_default() as f32,
            review_count: record.review_count.unwrap_or_default(),
            view_count: record.view_count.unwrap_or_default(),
            opening_hours: record.opening_hours,
            address: record.address,
            phone: record.phone,
            image: record.image,
            menus: record.menus.unwrap_or_default(),
        }
    }
}

pub fn normalize_restaurants(records: Vec<RestaurantRecord>) -> Vec<Restaurant> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| Restaurant::from_record(record, position))
        .collect()
}

/// Restaurant as sent by the backend. Field names vary between endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub restaurants_id: Option<Value>,
    #[serde(default)]
    pub restaurant_id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub spicy: Option<i32>,
    #[serde(default)]
    pub sweet: Option<i32>,
    #[serde(default)]
    pub salty: Option<i32>,
    #[serde(default)]
    pub sour: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "reviewCount")]
    pub review_count: Option<u32>,
    #[serde(default, alias = "viewCount")]
    pub view_count: Option<u32>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub menus: Option<Vec<String>>,
}

fn id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewId {
    Server(u64),
    Local(u64), // Optimistic entry not yet confirmed by the backend
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Server(id) => write!(f, "{id}"),
            ReviewId::Local(id) => write!(f, "local-{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Confirmed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub rating: u8,
    pub restaurant_id: Option<RestaurantId>,
    pub status: ReviewStatus,
}

impl Review {
    pub fn from_record(record: ReviewRecord, position: usize) -> Self {
        let id = [&record.id, &record.review_id]
            .into_iter()
            .find_map(|value| value.as_ref().and_then(id_from_value))
            .unwrap_or(position as u64 + 1);

        Self {
            id: ReviewId::Server(id),
            author: record.username.unwrap_or_default(),
            content: record.contents.unwrap_or_default(),
            hashtags: record.hashtags.into_tags(),
            rating: record.rating.unwrap_or_default().round().clamp(0.0, 5.0) as u8,
            restaurant_id: record
                .restaurant_id
                .as_ref()
                .and_then(id_from_value)
                .map(RestaurantId),
            status: ReviewStatus::Confirmed,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self.id, ReviewId::Local(_))
    }
}

pub fn normalize_reviews(records: Vec<ReviewRecord>) -> Vec<Review> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| Review::from_record(record, position))
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub review_id: Option<Value>,
    #[serde(default)]
    pub restaurant_id: Option<Value>,
    #[serde(default, alias = "author")]
    pub username: Option<String>,
    #[serde(default, alias = "content")]
    pub contents: Option<String>,
    #[serde(default)]
    pub hashtags: Hashtags,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Hashtags arrive either as a list or as one space separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Hashtags {
    List(Vec<String>),
    Text(String),
    Missing,
}

impl Default for Hashtags {
    fn default() -> Self {
        Hashtags::Missing
    }
}

impl Hashtags {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Hashtags::List(tags) => tags,
            Hashtags::Text(text) => parse_hashtags(&text),
            Hashtags::Missing => Vec::new(),
        }
    }
}

/// Splits user input like "#spicy #cheap, noodles" into bare tags.
pub fn parse_hashtags(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|tag| tag.trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body of a review creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub restaurant_id: RestaurantId,
    pub contents: String,
    pub username: String,
    pub rating: u8,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "post_id", alias = "id")]
    pub id: u64,
    #[serde(rename = "post_title", alias = "title", default)]
    pub title: String,
    #[serde(rename = "post_content", alias = "content", default)]
    pub content: String,
    #[serde(rename = "post_date", alias = "date", default)]
    pub date: Option<String>,
    #[serde(default, alias = "username")]
    pub author: Option<String>,
}

/// Body of a post creation or edit request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDraft {
    pub post_title: String,
    pub post_content: String,
    pub post_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, alias = "userId")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_id_normalization() {
        let records: Vec<RestaurantRecord> = serde_json::from_str(
            r#"[
                {"restaurants_id": 12, "name": "Gogi House", "food_type": "Korean", "spicy": 4},
                {"id": "7", "name": "Pasta Bar", "reviewCount": 3, "viewCount": 9},
                {"name": "Nameless"}
            ]"#,
        )
        .unwrap();

        let restaurants = normalize_restaurants(records);
        assert_eq!(restaurants[0].id, RestaurantId(12));
        assert_eq!(restaurants[0].cuisine(), "Korean");
        assert_eq!(restaurants[0].spicy, Some(4));
        assert_eq!(restaurants[0].sweet, None);

        assert_eq!(restaurants[1].id, RestaurantId(7));
        assert_eq!(restaurants[1].review_count, 3);
        assert_eq!(restaurants[1].view_count, 9);

        // No identifier at all: position based
        assert_eq!(restaurants[2].id, RestaurantId(3));
    }

    #[test]
    fn test_cuisine_falls_back_to_category() {
        let mut restaurant = Restaurant::new(1, "Dumpling Corner");
        restaurant.category = "Chinese".to_string();
        assert_eq!(restaurant.cuisine(), "Chinese");

        restaurant.food_type = "Korean".to_string();
        assert_eq!(restaurant.cuisine(), "Korean");
    }

    #[test]
    fn test_review_record_shapes() {
        let records: Vec<ReviewRecord> = serde_json::from_str(
            r##"[
                {"review_id": 3, "username": "mina", "contents": "great", "hashtags": ["soup", "warm"], "rating": 5},
                {"id": 4, "author": "jun", "content": "ok", "hashtags": "#cheap #fast", "rating": 3.4},
                {"id": 5}
            ]"##,
        )
        .unwrap();

        let reviews = normalize_reviews(records);
        assert_eq!(reviews[0].id, ReviewId::Server(3));
        assert_eq!(reviews[0].hashtags, vec!["soup", "warm"]);
        assert_eq!(reviews[1].author, "jun");
        assert_eq!(reviews[1].hashtags, vec!["cheap", "fast"]);
        assert_eq!(reviews[1].rating, 3);
        assert!(reviews[2].hashtags.is_empty());
        assert_eq!(reviews[2].status, ReviewStatus::Confirmed);
    }

    #[test]
    fn test_parse_hashtags() {
        assert_eq!(parse_hashtags("#spicy #cheap, noodles"), vec!["spicy", "cheap", "noodles"]);
        assert_eq!(parse_hashtags("  #  ,, "), Vec::<String>::new());
    }

    #[test]
    fn test_post_wire_names() {
        let post: Post = serde_json::from_str(
            r#"{"post_id": 2, "post_title": "Best bibimbap?", "post_content": "Looking for tips", "post_date": "2024-11-02T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.id, 2);
        assert_eq!(post.title, "Best bibimbap?");
        assert_eq!(post.author, None);
    }
}
