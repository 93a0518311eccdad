//! Page arithmetic for client-side pagination. Pages are 1-based.

use std::ops::Range;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Choices offered by the rows-per-page selector.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

/// Maximum number of page links shown before collapsing into ellipses.
const MAX_VISIBLE_PAGES: usize = 5;

/// Entry in the page-link strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Clamps `page` into `1..=page_count`, or 1 for an empty list.
pub fn clamp_page(page: usize, total_items: usize, per_page: usize) -> usize {
    page.clamp(1, page_count(total_items, per_page).max(1))
}

/// Index range of the rows on `page`.
pub fn page_range(page: usize, total_items: usize, per_page: usize) -> Range<usize> {
    if per_page == 0 || total_items == 0 {
        return 0..0;
    }
    let page = clamp_page(page, total_items, per_page);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    start..end
}

/// Page links to display: first, last, current and its neighbours.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let mut links = vec![PageLink::Page(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total_pages - 1 {
        links.push(PageLink::Ellipsis);
    }

    links.push(PageLink::Page(total_pages));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 25, 10), 0..10);
        assert_eq!(page_range(3, 25, 10), 20..25);
        assert_eq!(page_range(9, 25, 10), 20..25);
        assert_eq!(page_range(1, 0, 10), 0..0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 25, 10), 1);
        assert_eq!(clamp_page(4, 25, 10), 3);
        assert_eq!(clamp_page(4, 0, 10), 1);
    }

    #[test]
    fn test_page_links_few_pages() {
        assert_eq!(page_links(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn test_page_links_with_ellipses() {
        assert_eq!(page_links(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_links(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_links(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }
}
