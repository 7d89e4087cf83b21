//! Category browser: fetched restaurants sorted and paged on the client.

pub mod pagination;
pub mod sort;
pub mod state;

pub use pagination::{ Pager, PAGE_SIZE };
pub use sort::SortKey;
pub use state::{ ListingState, Phase };
