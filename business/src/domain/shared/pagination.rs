use serde_json::Value;

use super::validation::{ValidationError, field, positive_integer};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A validated offset/limit window. Both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        if page <= 0 {
            errors.push("page must be a positive number");
        }
        if limit <= 0 {
            errors.push("limit must be a positive number");
        }
        errors.into_result(Self { page, limit })
    }

    /// Reads optional `page` and `limit` from an untyped payload, applying defaults.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        let page = match field(payload, "page") {
            Some(value) => positive_integer("page", value, &mut errors),
            None => Some(DEFAULT_PAGE),
        };
        let limit = match field(payload, "limit") {
            Some(value) => positive_integer("limit", value, &mut errors),
            None => Some(DEFAULT_LIMIT),
        };

        match (page, limit) {
            (Some(page), Some(limit)) => errors.into_result(Self { page, limit }),
            _ => Err(errors),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip before the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero when there is nothing to page through.
    pub fn last_page(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total - 1) / self.limit + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, pagination: Pagination) -> Self {
        Self {
            data,
            meta: PageMeta {
                total,
                page: pagination.page(),
                last_page: pagination.last_page(total),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn should_default_page_and_limit_when_absent() {
        let pagination = Pagination::from_payload(&json!({})).unwrap();

        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn should_coerce_query_strings() {
        let pagination = Pagination::from_payload(&json!({ "page": "3", "limit": "25" })).unwrap();

        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.limit(), 25);
        assert_eq!(pagination.offset(), 50);
    }

    #[test]
    fn should_enumerate_all_pagination_violations() {
        let result = Pagination::from_payload(&json!({ "page": "0", "limit": "many" }));

        let errors = result.unwrap_err();
        assert_eq!(
            errors.violations(),
            [
                "page must be a positive number".to_string(),
                "limit must be a number".to_string(),
            ]
        );
    }

    #[test]
    fn should_reject_non_positive_values_in_constructor() {
        assert!(Pagination::new(0, 10).is_err());
        assert!(Pagination::new(1, -5).is_err());
        assert!(Pagination::new(2, 5).is_ok());
    }

    #[test]
    fn should_report_zero_last_page_for_empty_catalog() {
        let pagination = Pagination::default();
        assert_eq!(pagination.last_page(0), 0);
    }

    #[test]
    fn should_compute_meta_from_total() {
        let pagination = Pagination::new(2, 10).unwrap();
        let page = Paginated::new(vec![1, 2, 3], 23, pagination);

        assert_eq!(
            page.meta,
            PageMeta {
                total: 23,
                page: 2,
                last_page: 3,
            }
        );
        assert_eq!(page.data, vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn last_page_matches_ceiling_division(total in 0i64..1_000_000, limit in 1i64..500) {
            let pagination = Pagination::new(1, limit).unwrap();
            let expected = (total as f64 / limit as f64).ceil() as i64;
            prop_assert_eq!(pagination.last_page(total), expected);
        }

        #[test]
        fn offset_skips_previous_pages(page in 1i64..10_000, limit in 1i64..500) {
            let pagination = Pagination::new(page, limit).unwrap();
            prop_assert_eq!(pagination.offset(), (page - 1) * limit);
        }
    }
}
