//! Paginated read-back of stored feedback
//!
//! [`Paginator`] owns the page cursor for one page load and turns the full
//! list into a [`RenderedPage`] view model. Painting it is left to the caller.

use crate::record::{FeedbackList, FeedbackRecord};

/// Records shown per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` records (0 when there are none)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Prev/next button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// What to display for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Records on this page, oldest first
    pub records: Vec<FeedbackRecord>,
    /// 1-based page being shown
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Show the "no feedback yet" placeholder instead of a list
    pub show_empty_placeholder: bool,
    /// Show prev/next and the page label at all
    pub controls_visible: bool,
}

impl RenderedPage {
    /// Label for the page-info element
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}

/// Page cursor for a single view
#[derive(Debug, Clone)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// Cursor starting on page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move the cursor to `page` if it exists for `count` records.
    /// Returns whether the cursor moved.
    pub fn go_to_page(&mut self, page: usize, count: usize) -> bool {
        let total = total_pages(count, self.page_size);
        if page < 1 || page > total || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Step back one page; no-op on the first page
    pub fn go_to_previous_page(&mut self, count: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page, count),
            None => false,
        }
    }

    /// Step forward one page; no-op on the last page
    pub fn go_to_next_page(&mut self, count: usize) -> bool {
        self.go_to_page(self.current_page + 1, count)
    }

    /// Step in `direction` and render the new page from the same `list`.
    /// `None` when the step would leave `[1, total_pages]`.
    pub fn turn_page(&mut self, direction: PageDirection, list: &FeedbackList) -> Option<RenderedPage> {
        let moved = match direction {
            PageDirection::Previous => self.go_to_previous_page(list.len()),
            PageDirection::Next => self.go_to_next_page(list.len()),
        };
        moved.then(|| self.render(list))
    }

    /// Build the view model for the current page
    pub fn render(&self, list: &FeedbackList) -> RenderedPage {
        let count = list.len();
        let total = total_pages(count, self.page_size);
        let page = self.current_page;

        let start = (page - 1) * self.page_size;
        let end = start + self.page_size;

        RenderedPage {
            records: list.slice(start, end).to_vec(),
            current_page: page,
            total_pages: total,
            prev_enabled: page > 1,
            next_enabled: page < total,
            show_empty_placeholder: count == 0,
            controls_visible: count > self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: usize) -> FeedbackList {
        (1..=n)
            .map(|i| FeedbackRecord::new(format!("r{}", i), "a@b.c", "m", "d"))
            .collect::<Vec<_>>()
            .into()
    }

    fn names(page: &RenderedPage) -> Vec<String> {
        page.records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_twelve_records_three_pages() {
        let list = list_of(12);
        let mut pager = Paginator::default();

        let first = pager.render(&list);
        assert_eq!(first.total_pages, 3);
        assert_eq!(names(&first), vec!["r1", "r2", "r3", "r4", "r5"]);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert!(first.controls_visible);

        assert!(pager.go_to_next_page(list.len()));
        assert!(pager.go_to_next_page(list.len()));
        let last = pager.render(&list);
        assert_eq!(last.current_page, 3);
        assert_eq!(names(&last), vec!["r11", "r12"]);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
        assert_eq!(last.page_label(), "Page 3 of 3");
    }

    #[test]
    fn test_navigation_out_of_range_is_noop() {
        let mut pager = Paginator::default();
        assert!(!pager.go_to_previous_page(12));
        assert_eq!(pager.current_page(), 1);

        assert!(pager.go_to_page(3, 12));
        assert!(!pager.go_to_next_page(12));
        assert_eq!(pager.current_page(), 3);

        assert!(!pager.go_to_page(0, 12));
        assert!(!pager.go_to_page(4, 12));
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_empty_list() {
        let pager = Paginator::default();
        let page = pager.render(&FeedbackList::new());
        assert!(page.show_empty_placeholder);
        assert!(!page.controls_visible);
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.next_enabled);
        assert_eq!(page.page_label(), "Page 1 of 1");
    }

    #[test]
    fn test_single_page_hides_controls() {
        let pager = Paginator::default();
        for n in [3, PAGE_SIZE] {
            let page = pager.render(&list_of(n));
            assert_eq!(page.total_pages, 1);
            assert!(!page.controls_visible);
            assert!(!page.show_empty_placeholder);
            assert_eq!(page.records.len(), n);
        }
    }

    #[test]
    fn test_turn_page_renders_from_one_list() {
        let list = list_of(12);
        let mut pager = Paginator::default();

        assert_eq!(pager.turn_page(PageDirection::Previous, &list), None);

        let second = pager.turn_page(PageDirection::Next, &list).unwrap();
        assert_eq!(second.current_page, 2);
        assert_eq!(names(&second), vec!["r6", "r7", "r8", "r9", "r10"]);

        let third = pager.turn_page(PageDirection::Next, &list).unwrap();
        assert_eq!(names(&third), vec!["r11", "r12"]);
        assert_eq!(pager.turn_page(PageDirection::Next, &list), None);
        assert_eq!(pager.current_page(), 3);

        let back = pager.turn_page(PageDirection::Previous, &list).unwrap();
        assert_eq!(back.current_page, 2);
        assert!(back.prev_enabled && back.next_enabled);
    }

    #[test]
    fn test_stale_cursor_renders_empty_slice() {
        let mut pager = Paginator::default();
        assert!(pager.go_to_page(3, 12));
        let page = pager.render(&list_of(4));
        assert!(page.records.is_empty());
        assert!(!page.next_enabled);
    }
}
