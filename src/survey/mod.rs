//! Taste survey: answers, the preference store and restaurant matching.

pub mod form;
pub mod matching;
pub mod store;

pub use form::{ LikesState, SurveyOutcome, SurveyState };
pub use matching::{ label_score, match_restaurants, TasteLabel, TASTE_TOLERANCE };
pub use store::{ FoodPreferences, PreferenceStore, Question, StoreSnapshot };
