use super::store::FoodPreferences;
use crate::core::Restaurant;

/// Largest accepted distance between a preference score and a restaurant attribute.
pub const TASTE_TOLERANCE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasteLabel {
    VeryGood,
    Good,
    Normal,
    Bad,
    VeryBad,
}

impl TasteLabel {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Verygood" => Some(TasteLabel::VeryGood),
            "Good" => Some(TasteLabel::Good),
            "Normal" => Some(TasteLabel::Normal),
            "Bad" => Some(TasteLabel::Bad),
            "Verybad" => Some(TasteLabel::VeryBad),
            _ => None,
        }
    }

    pub fn score(self) -> i32 {
        match self {
            TasteLabel::VeryGood => 5,
            TasteLabel::Good => 4,
            TasteLabel::Normal => 3,
            TasteLabel::Bad => 2,
            TasteLabel::VeryBad => 1,
        }
    }
}

/// Unknown and empty labels score 0.
pub fn label_score(label: &str) -> i32 {
    TasteLabel::parse(label).map(TasteLabel::score).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TasteScores {
    pub spicy: i32,
    pub sweet: i32,
    pub salty: i32,
    pub sour: i32,
}

impl TasteScores {
    pub fn from_preferences(preferences: &FoodPreferences) -> Self {
        Self {
            spicy: label_score(&preferences.spicy),
            sweet: label_score(&preferences.sweet),
            salty: label_score(&preferences.salty),
            sour: label_score(&preferences.sour),
        }
    }

    pub fn is_complete(&self) -> bool {
        [self.spicy, self.sweet, self.salty, self.sour].iter().all(|score| *score != 0)
    }

    /// A restaurant missing any taste attribute is never accepted.
    fn accepts(&self, restaurant: &Restaurant) -> bool {
        let within = |wanted: i32, actual: Option<i32>| {
            actual.is_some_and(|actual| (actual - wanted).abs() <= TASTE_TOLERANCE)
        };

        within(self.spicy, restaurant.spicy)
            && within(self.sweet, restaurant.sweet)
            && within(self.salty, restaurant.salty)
            && within(self.sour, restaurant.sour)
    }
}

/// Restaurants compatible with the given preferences, in their original order.
///
/// Any unanswered or unrecognized taste label yields no matches. An empty
/// food type accepts every cuisine; otherwise the cuisine must match exactly.
pub fn match_restaurants(preferences: &FoodPreferences, restaurants: &[Restaurant]) -> Vec<Restaurant> {
    let scores = TasteScores::from_preferences(preferences);
    if !scores.is_complete() {
        return Vec::new();
    }

    let food_type = preferences.food_type.as_str();

    restaurants
        .iter()
        .filter(|restaurant| scores.accepts(restaurant))
        .filter(|restaurant| food_type.is_empty() || restaurant.cuisine() == food_type)
        .cloned()
        .collect()
}
