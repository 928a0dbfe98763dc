//! Pagination input and derived page metadata.

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Closed set of orderings a list/search query may use.
///
/// Request text never reaches the SQL `ORDER BY` clause; the optional
/// `order_by` hint is mapped onto one of these variants instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusOrder {
    /// `order_number`, then `created_at`, then `updated_at`; `id` breaks ties.
    #[default]
    OrderNumber,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl StatusOrder {
    /// Maps a client hint onto a known ordering; unknown hints use the default.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(|h| h.trim().to_ascii_lowercase()).as_deref() {
            Some("name") => Self::Name,
            Some("created_at") => Self::CreatedAt,
            Some("updated_at") => Self::UpdatedAt,
            _ => Self::OrderNumber,
        }
    }

    /// Static `ORDER BY` body for this ordering.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::OrderNumber => "order_number, created_at, updated_at, id",
            Self::Name => "name, created_at, updated_at, id",
            Self::CreatedAt => "created_at, order_number, id",
            Self::UpdatedAt => "updated_at DESC, order_number, id",
        }
    }
}

/// Caller-supplied paging request, clamped to sane bounds on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
    page: u32,
    size: u32,
    order_by: Option<String>,
}

impl PaginationQuery {
    /// Builds a query, defaulting missing values and clamping out-of-range ones.
    ///
    /// - `page`: default 1, `0` becomes 1
    /// - `size`: default 10, clamped to `1..=100`
    pub fn new(page: Option<u32>, size: Option<u32>, order_by: Option<String>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let order_by = order_by.filter(|o| !o.trim().is_empty());

        Self {
            page,
            size,
            order_by,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    /// Ordering derived from the `order_by` hint.
    pub fn order(&self) -> StatusOrder {
        StatusOrder::from_hint(self.order_by())
    }

    /// Rows to skip: `(page - 1) * size`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.size)
    }

    /// Rows to return: `size`.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// `ceil(total / size)`; zero when nothing matched.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 0;
        }
        let size = i64::from(self.size);
        (total_count + size - 1) / size
    }

    /// True iff rows exist beyond the current page.
    pub fn has_more(&self, total_count: i64) -> bool {
        i64::from(self.page) * i64::from(self.size) < total_count
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = PaginationQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.size(), 10);
        assert_eq!(q.offset(), 0);
        assert_eq!(q.limit(), 10);
        assert_eq!(q.order(), StatusOrder::OrderNumber);
    }

    #[test]
    fn test_offset_and_limit() {
        let q = PaginationQuery::new(Some(3), Some(25), None);
        assert_eq!(q.offset(), 50);
        assert_eq!(q.limit(), 25);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let q = PaginationQuery::new(Some(0), None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(PaginationQuery::new(None, Some(0), None).size(), 1);
        assert_eq!(PaginationQuery::new(None, Some(5000), None).size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (n, s, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (25, 7, 4)] {
            let q = PaginationQuery::new(Some(1), Some(s), None);
            assert_eq!(q.total_pages(n), expected, "n={n} s={s}");
        }
    }

    #[test]
    fn test_has_more() {
        let first = PaginationQuery::new(Some(1), Some(10), None);
        let second = PaginationQuery::new(Some(2), Some(10), None);

        assert!(first.has_more(11));
        assert!(!first.has_more(10));
        assert!(!second.has_more(20));
        assert!(second.has_more(21));
        assert!(!first.has_more(0));
    }

    #[test]
    fn test_order_hint_mapping() {
        assert_eq!(StatusOrder::from_hint(Some("name")), StatusOrder::Name);
        assert_eq!(StatusOrder::from_hint(Some(" CREATED_AT ")), StatusOrder::CreatedAt);
        assert_eq!(StatusOrder::from_hint(Some("updated_at")), StatusOrder::UpdatedAt);
        assert_eq!(
            StatusOrder::from_hint(Some("name; DROP TABLE status")),
            StatusOrder::OrderNumber
        );
        assert_eq!(StatusOrder::from_hint(None), StatusOrder::OrderNumber);
    }

    #[test]
    fn test_blank_order_hint_is_dropped() {
        let q = PaginationQuery::new(None, None, Some("  ".to_string()));
        assert!(q.order_by().is_none());
    }
}
