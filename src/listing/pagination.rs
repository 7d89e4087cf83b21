pub const PAGE_SIZE: usize = 4;

/// 1-based page cursor over a client-side list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(size: usize) -> Self {
        Self { page: 1, size: size.max(1) }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.size).min(len);
        let end = (self.page * self.size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page * self.size < len
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advancing is not bounded here; the view disables it via [`Pager::has_next`].
    pub fn next(&mut self) {
        self.page += 1;
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size).max(1)
    }

    /// Pulls the cursor back onto the last page when the list got shorter.
    /// A cursor still inside the list is left alone.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.page_count(len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_of_ten() {
        let items: Vec<usize> = (0..10).collect();
        let mut pager = Pager::default();

        assert_eq!(pager.slice(&items), &[0, 1, 2, 3]);
        assert!(!pager.has_previous());
        assert!(pager.has_next(items.len()));

        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.slice(&items), &[8, 9]);
        assert!(!pager.has_next(items.len()));
        assert_eq!(pager.page_count(items.len()), 3);
    }

    #[test]
    fn test_next_disabled_exactly_at_boundary() {
        let pager = Pager::default();
        assert!(!pager.has_next(4));
        assert!(pager.has_next(5));
        assert!(!pager.has_next(0));
    }

    #[test]
    fn test_previous_clamps_at_first_page() {
        let mut pager = Pager::default();
        pager.previous();
        pager.previous();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_clamp_only_moves_past_the_end() {
        let mut pager = Pager::default();
        for _ in 0..4 {
            pager.next();
        }
        assert_eq!(pager.page(), 5);

        pager.clamp(20);
        assert_eq!(pager.page(), 5);

        pager.clamp(6);
        assert_eq!(pager.page(), 2);

        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_past_the_end_is_empty() {
        let items = [1, 2, 3];
        let mut pager = Pager::default();
        pager.next();
        pager.next();
        assert!(pager.slice(&items).is_empty());
    }
}
