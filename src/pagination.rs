//! Fixed-size paging over question lists.

use serde::Deserialize;

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N` query string. Missing means the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// A window into an ordered result set, ready for `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-indexed page number
    pub number: i64,
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Pages start at 1; anything lower is treated as the first page.
    pub fn new(requested: Option<i64>) -> Self {
        let number = requested.unwrap_or(1).max(1);
        Page {
            number,
            limit: QUESTIONS_PER_PAGE,
            offset: (number - 1).saturating_mul(QUESTIONS_PER_PAGE),
        }
    }

    pub fn is_first(&self) -> bool {
        self.number == 1
    }
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        Page::new(query.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page() {
        let p = Page::new(None);
        assert_eq!(p.number, 1);
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset, 0);
        assert!(p.is_first());
    }

    #[test]
    fn test_second_page_offset() {
        let p = Page::new(Some(2));
        assert_eq!(p.number, 2);
        assert_eq!(p.offset, 10);
        assert!(!p.is_first());
    }

    #[test]
    fn test_non_positive_page_clamped() {
        assert_eq!(Page::new(Some(0)), Page::new(Some(1)));
        assert_eq!(Page::new(Some(-7)).offset, 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = Page::new(Some(i64::MAX));
        assert_eq!(p.offset, i64::MAX);
    }
}
