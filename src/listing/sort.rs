use std::cmp::Ordering;

use crate::core::Restaurant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Default,
    Rating,
    ReviewCount,
    ViewCount,
}

impl SortKey {
    pub const ALL: [SortKey; 4] =
        [SortKey::Default, SortKey::Rating, SortKey::ReviewCount, SortKey::ViewCount];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::Rating => "Rating",
            SortKey::ReviewCount => "Most reviewed",
            SortKey::ViewCount => "Most favorited",
        }
    }
}

fn descending(key: SortKey, left: &Restaurant, right: &Restaurant) -> Ordering {
    match key {
        SortKey::Default => Ordering::Equal,
        SortKey::Rating => right.rating.total_cmp(&left.rating),
        SortKey::ReviewCount => right.review_count.cmp(&left.review_count),
        SortKey::ViewCount => right.view_count.cmp(&left.view_count),
    }
}

/// Orders `fetched` for display. Ties keep their fetched order and
/// [`SortKey::Default`] returns the fetched order unchanged.
pub fn sorted(fetched: &[Restaurant], key: SortKey) -> Vec<Restaurant> {
    let mut items = fetched.to_vec();
    if key != SortKey::Default {
        items.sort_by(|left, right| descending(key, left, right));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(id: u64, rating: f32, reviews: u32, views: u32) -> Restaurant {
        let mut restaurant = Restaurant::new(id, format!("R{id}"));
        restaurant.rating = rating;
        restaurant.review_count = reviews;
        restaurant.view_count = views;
        restaurant
    }

    fn ids(items: &[Restaurant]) -> Vec<u64> {
        items.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_rating_sort_is_stable_descending() {
        let fetched = vec![
            rated(1, 3.5, 0, 0),
            rated(2, 4.5, 0, 0),
            rated(3, 3.5, 0, 0),
            rated(4, 4.5, 0, 0),
            rated(5, 1.0, 0, 0),
        ];
        assert_eq!(ids(&sorted(&fetched, SortKey::Rating)), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_count_sorts() {
        let fetched = vec![rated(1, 0.0, 2, 9), rated(2, 0.0, 8, 1), rated(3, 0.0, 5, 5)];
        assert_eq!(ids(&sorted(&fetched, SortKey::ReviewCount)), vec![2, 3, 1]);
        assert_eq!(ids(&sorted(&fetched, SortKey::ViewCount)), vec![1, 3, 2]);
    }

    #[test]
    fn test_default_restores_fetched_order() {
        let fetched = vec![rated(3, 1.0, 0, 0), rated(1, 5.0, 0, 0), rated(2, 3.0, 0, 0)];
        let by_rating = sorted(&fetched, SortKey::Rating);
        assert_eq!(ids(&by_rating), vec![1, 2, 3]);
        assert_eq!(ids(&sorted(&fetched, SortKey::Default)), vec![3, 1, 2]);
    }
}
