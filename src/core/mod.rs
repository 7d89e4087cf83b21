pub mod errors;
pub mod http;
pub mod models;
pub mod request;
pub mod settings;
pub mod tasks;

pub use errors::{ ApiError, ApiErrorKind, FormError, TasteMapError };
pub use models::{ Post, Restaurant, RestaurantId, Review, ReviewId, ReviewStatus, SessionUser };
pub use request::{ RequestId, RequestSeq };
pub use settings::Settings;
