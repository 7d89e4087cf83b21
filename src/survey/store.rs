use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::Restaurant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    FoodType,
    Spicy,
    Sweet,
    Salty,
    Sour,
}

impl Question {
    pub const ALL: [Question; 5] =
        [Question::FoodType, Question::Spicy, Question::Sweet, Question::Salty, Question::Sour];

    pub fn prompt(self) -> &'static str {
        match self {
            Question::FoodType => "Which kind of food do you like most?",
            Question::Spicy => "How much do you like spicy food?",
            Question::Sweet => "How much do you like sweet food?",
            Question::Salty => "How much do you like salty food?",
            Question::Sour => "How much do you like sour food?",
        }
    }

    /// `(wire value, display label)` pairs offered for this question.
    pub fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Question::FoodType => FOOD_TYPE_OPTIONS,
            _ => TASTE_OPTIONS,
        }
    }
}

const FOOD_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("Korean", "Korean"),
    ("Western", "Western"),
    ("Chinese", "Chinese"),
    ("Japanese", "Japanese"),
    ("Random", "Other"),
];

const TASTE_OPTIONS: &[(&str, &str)] = &[
    ("Verygood", "Love it"),
    ("Good", "Like it"),
    ("Normal", "It's okay"),
    ("Bad", "Not really"),
    ("Verybad", "Not at all"),
];

/// Survey answers as labels. An empty string means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPreferences {
    pub spicy: String,
    pub sweet: String,
    pub salty: String,
    pub sour: String,
    #[serde(rename = "foodType")]
    pub food_type: String,
}

impl FoodPreferences {
    pub fn answer(&self, question: Question) -> &str {
        match question {
            Question::FoodType => &self.food_type,
            Question::Spicy => &self.spicy,
            Question::Sweet => &self.sweet,
            Question::Salty => &self.salty,
            Question::Sour => &self.sour,
        }
    }

    pub fn set(&mut self, question: Question, value: impl Into<String>) {
        let slot = match question {
            Question::FoodType => &mut self.food_type,
            Question::Spicy => &mut self.spicy,
            Question::Sweet => &mut self.sweet,
            Question::Salty => &mut self.salty,
            Question::Sour => &mut self.sour,
        };
        *slot = value.into();
    }

    pub fn answered_count(&self) -> usize {
        Question::ALL.iter().filter(|q| !self.answer(**q).is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == Question::ALL.len()
    }
}

/// One immutable state of the preference store.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    revision: u64,
    preferences: FoodPreferences,
    restaurants: Arc<Vec<Restaurant>>,
    filtered: Arc<Vec<Restaurant>>,
}

impl StoreSnapshot {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn preferences(&self) -> &FoodPreferences {
        &self.preferences
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn filtered(&self) -> &[Restaurant] {
        &self.filtered
    }
}

/// Application state shared by the survey and matching views.
///
/// Every update publishes a fresh snapshot with the next revision. Readers
/// holding an older `Arc<StoreSnapshot>` keep seeing exactly what they saw,
/// and the last write always wins.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    current: Arc<StoreSnapshot>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        Arc::clone(&self.current)
    }

    pub fn revision(&self) -> u64 {
        self.current.revision
    }

    pub fn set_answer(&mut self, question: Question, value: impl Into<String>) -> Arc<StoreSnapshot> {
        let value = value.into();
        self.publish(|next| next.preferences.set(question, value))
    }

    pub fn reset_preferences(&mut self) -> Arc<StoreSnapshot> {
        self.publish(|next| next.preferences = FoodPreferences::default())
    }

    pub fn set_restaurants(&mut self, restaurants: Vec<Restaurant>) -> Arc<StoreSnapshot> {
        self.publish(|next| next.restaurants = Arc::new(restaurants))
    }

    pub fn set_filtered(&mut self, filtered: Vec<Restaurant>) -> Arc<StoreSnapshot> {
        self.publish(|next| next.filtered = Arc::new(filtered))
    }

    fn publish(&mut self, update: impl FnOnce(&mut StoreSnapshot)) -> Arc<StoreSnapshot> {
        let mut next = StoreSnapshot::clone(&self.current);
        next.revision += 1;
        update(&mut next);
        self.current = Arc::new(next);
        self.snapshot()
    }
}
