use std::fmt;

use crate::ui::app::Pagination;

/// Previous/next controls for a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: u32,
    pub last_page: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl From<Pagination> for PaginationControls {
    fn from(p: Pagination) -> Self {
        Self {
            current_page: p.current_page,
            last_page: p.last_page,
            previous_enabled: p.has_previous(),
            next_enabled: p.has_next(),
        }
    }
}

impl fmt::Display for PaginationControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let previous = if self.previous_enabled { "< Prev" } else { "      " };
        let next = if self.next_enabled { "Next >" } else { "      " };
        write!(
            f,
            "{previous}  Page {} of {}  {next}",
            self.current_page, self.last_page
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_disables_next() {
        let controls = PaginationControls::from(Pagination {
            current_page: 3,
            last_page: 3,
        });
        assert!(controls.previous_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(controls.to_string().trim_end(), "< Prev  Page 3 of 3");
    }
}
