use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::Page;

lazy_static! {
    static ref PAGE_PARAM_RE: Regex = Regex::new(r"[?&]page=(\d+)").expect("page param regex");
}

/// Where a paginated list stands. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
        }
    }
}

impl Pagination {
    pub fn from_page<T>(page: &Page<T>) -> Self {
        let last_page = page.last_page.max(1);
        Self {
            current_page: page.current_page.clamp(1, last_page),
            last_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// `Some(page)` when `page` is within `[1, last_page]`.
    pub fn accept(&self, page: u32) -> Option<u32> {
        (1..=self.last_page).contains(&page).then_some(page)
    }

    pub fn previous(&self) -> Option<u32> {
        self.accept(self.current_page.saturating_sub(1))
    }

    pub fn next(&self) -> Option<u32> {
        self.accept(self.current_page.saturating_add(1))
    }
}

/// Page number out of a paginator link such as
/// `http://host/api/admin/verifications?page=3`.
pub fn page_from_link(url: &str) -> Option<u32> {
    PAGE_PARAM_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_three_pages() {
        let p = Pagination {
            current_page: 1,
            last_page: 3,
        };
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.previous(), None);
        assert_eq!(p.next(), Some(2));
    }

    #[test]
    fn out_of_range_pages_are_refused() {
        let p = Pagination {
            current_page: 3,
            last_page: 3,
        };
        assert_eq!(p.accept(0), None);
        assert_eq!(p.accept(4), None);
        assert_eq!(p.accept(2), Some(2));
        assert!(!p.has_next());
    }

    #[test]
    fn from_page_clamps_bogus_counters() {
        let page: Page<u8> = Page {
            data: vec![],
            current_page: 9,
            last_page: 0,
            links: vec![],
        };
        assert_eq!(Pagination::from_page(&page), Pagination::default());
    }

    #[test]
    fn reads_page_from_link() {
        assert_eq!(
            page_from_link("http://127.0.0.1:8000/api/admin/verifications?page=2"),
            Some(2)
        );
        assert_eq!(page_from_link("/x?sort=asc&page=11"), Some(11));
        assert_eq!(page_from_link("/x?pages=3"), None);
    }
}
