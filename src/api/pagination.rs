//! Offset pagination as the emulated GitLab server reports it.
//!
//! Two behaviours are kept on purpose because clients may depend on them:
//!
//! - `total_pages` is `total / per_page + 1`, so an exact multiple reports one
//!   extra (empty) page: 48 items at 24 per page gives 3 pages.
//! - A `page` beyond `total_pages` is clamped in the `X-Page` header only; the
//!   items served still come from the requested, unclamped page.

use url::form_urlencoded;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Parse an integer the permissive way: anything malformed becomes 0.
///
/// Out-of-range values also become 0, where GitLab's Go server would clamp
/// them to `i64::MAX` / `i64::MIN`.
#[must_use]
pub fn parse_int(value: &str) -> i64 {
    value.parse::<i64>().unwrap_or(0)
}

/// `page` and `per_page` as requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageQuery {
    /// Read `page` and `per_page` from a raw query string.
    ///
    /// Missing parameters keep their defaults, the first occurrence of a
    /// repeated parameter wins and unparsable values become 0.
    #[must_use]
    pub fn parse(query: Option<&str>) -> Self {
        let mut page = None;
        let mut per_page = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match &*key {
                "page" if page.is_none() => page = Some(parse_int(&value)),
                "per_page" if per_page.is_none() => per_page = Some(parse_int(&value)),
                _ => {}
            }
        }

        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Inclusive range of catalog ids covered by the requested page.
    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        let offset = self.page.wrapping_sub(1).wrapping_mul(self.per_page);
        (offset.wrapping_add(1), offset.wrapping_add(self.per_page))
    }
}

/// Values behind the `X-Page`, `X-Per-Page`, `X-Total`, `X-Total-Pages`,
/// `X-Prev-Page` and `X-Next-Page` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl Pagination {
    #[must_use]
    pub fn new(total: i64, query: PageQuery) -> Self {
        // per_page of 0 counts as a single page instead of dividing by zero
        let total_pages = total.checked_div(query.per_page).unwrap_or(0).wrapping_add(1);

        let prev = query.page.wrapping_sub(1);
        let next = query.page.wrapping_add(1);

        Self {
            page: query.page.min(total_pages),
            per_page: query.per_page,
            total,
            total_pages,
            prev_page: (prev > 0).then_some(prev),
            next_page: (next > 0 && next <= total_pages).then_some(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: i64, per_page: i64) -> PageQuery {
        PageQuery { page, per_page }
    }

    #[test]
    fn parse_int_is_permissive() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("12abc"), 0);
        assert_eq!(parse_int("1.5"), 0);
        assert_eq!(parse_int("99999999999999999999"), 0);
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(PageQuery::parse(None), query(1, 20));
        assert_eq!(PageQuery::parse(Some("")), query(1, 20));
        assert_eq!(PageQuery::parse(Some("foo=bar")), query(1, 20));
    }

    #[test]
    fn parse_values() {
        assert_eq!(PageQuery::parse(Some("page=2&per_page=10")), query(2, 10));
        assert_eq!(PageQuery::parse(Some("per_page=5")), query(1, 5));
    }

    #[test]
    fn parse_non_numeric_becomes_zero() {
        assert_eq!(PageQuery::parse(Some("page=abc")), query(0, 20));
        assert_eq!(PageQuery::parse(Some("per_page=&page=x")), query(0, 0));
    }

    #[test]
    fn parse_first_occurrence_wins() {
        assert_eq!(PageQuery::parse(Some("page=3&page=9")), query(3, 20));
    }

    #[test]
    fn parse_percent_encoded() {
        assert_eq!(PageQuery::parse(Some("page=%32&per%5Fpage=4")), query(2, 4));
    }

    #[test]
    fn range_for_pages() {
        assert_eq!(query(1, 20).range(), (1, 20));
        assert_eq!(query(2, 20).range(), (21, 40));
        assert_eq!(query(3, 24).range(), (49, 72));
        assert_eq!(query(0, 20).range(), (-19, 0));
        assert_eq!(query(5, 0).range(), (1, 0));
    }

    #[test]
    fn total_pages_over_counts_exact_multiples() {
        assert_eq!(Pagination::new(48, query(1, 24)).total_pages, 3);
        assert_eq!(Pagination::new(48, query(1, 48)).total_pages, 2);
        assert_eq!(Pagination::new(48, query(1, 20)).total_pages, 3);
        assert_eq!(Pagination::new(48, query(1, 100)).total_pages, 1);
    }

    #[test]
    fn total_pages_formula_holds() {
        for per_page in 1..=60 {
            let pagination = Pagination::new(48, query(1, per_page));
            assert_eq!(pagination.total_pages, 48 / per_page + 1);
        }
    }

    #[test]
    fn first_page_has_no_previous() {
        let pagination = Pagination::new(48, query(1, 20));
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.prev_page, None);
        assert_eq!(pagination.next_page, Some(2));
        assert_eq!(pagination.total, 48);
        assert_eq!(pagination.per_page, 20);
    }

    #[test]
    fn last_page_has_no_next() {
        let pagination = Pagination::new(48, query(3, 20));
        assert_eq!(pagination.prev_page, Some(2));
        assert_eq!(pagination.next_page, None);
    }

    #[test]
    fn page_beyond_total_is_clamped() {
        let pagination = Pagination::new(48, query(10, 20));
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.prev_page, Some(9));
        assert_eq!(pagination.next_page, None);
    }

    #[test]
    fn page_zero_does_not_panic() {
        let pagination = Pagination::new(48, query(0, 20));
        assert_eq!(pagination.page, 0);
        assert_eq!(pagination.prev_page, None);
        assert_eq!(pagination.next_page, Some(1));
    }

    #[test]
    fn negative_page() {
        let pagination = Pagination::new(48, query(-4, 20));
        assert_eq!(pagination.page, -4);
        assert_eq!(pagination.prev_page, None);
        assert_eq!(pagination.next_page, None);
    }

    #[test]
    fn zero_per_page_does_not_divide_by_zero() {
        let pagination = Pagination::new(48, query(1, 0));
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(pagination.next_page, None);
    }

    #[test]
    fn extreme_values_do_not_panic() {
        let pagination = Pagination::new(48, query(i64::MAX, i64::MAX));
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(pagination.page, 1);
        let _ = query(i64::MIN, -1).range();
        let _ = Pagination::new(i64::MIN, query(i64::MIN, -1));
    }
}
