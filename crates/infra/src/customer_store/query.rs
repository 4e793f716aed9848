//! Limit/offset pagination for customer listings.

/// Page size used when the caller gives none (or an unparseable one).
pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination parameters for `CustomerStore::list_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of records; `None` means no limit.
    pub limit: Option<u64>,
    /// Number of records to skip (0-based).
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            offset: 0,
        }
    }
}

impl Pagination {
    /// Build from signed values: a negative limit lifts the limit, a negative
    /// offset is treated as no offset.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: u64::try_from(limit).ok(),
            offset: u64::try_from(offset).unwrap_or(0),
        }
    }

    /// Build from raw query-string values.
    ///
    /// Absent, empty or non-integer values fall back to the defaults; they are
    /// never rejected.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(parse_or(limit, DEFAULT_LIMIT as i64), parse_or(offset, 0))
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parameters_use_defaults() {
        assert_eq!(Pagination::from_query(None, None), Pagination::default());
        assert_eq!(Pagination::from_query(Some(""), Some("")), Pagination::default());
        assert_eq!(Pagination::default().limit, Some(10));
        assert_eq!(Pagination::default().offset, 0);
    }

    #[test]
    fn unparseable_parameters_use_defaults() {
        assert_eq!(
            Pagination::from_query(Some("abc"), Some("1.5")),
            Pagination::from_query(None, None)
        );
        assert_eq!(
            Pagination::from_query(Some("99999999999999999999"), None),
            Pagination::default()
        );
    }

    #[test]
    fn valid_parameters_are_used() {
        let p = Pagination::from_query(Some("2"), Some("3"));
        assert_eq!(p.limit, Some(2));
        assert_eq!(p.offset, 3);

        let p = Pagination::from_query(Some("+4"), Some("0"));
        assert_eq!(p.limit, Some(4));
    }

    #[test]
    fn negative_values_lift_limit_and_offset() {
        let p = Pagination::from_query(Some("-1"), Some("-5"));
        assert_eq!(p.limit, None);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn zero_limit_is_kept() {
        assert_eq!(Pagination::from_query(Some("0"), None).limit, Some(0));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-integer limit behaves like no limit at all.
            #[test]
            fn non_numeric_limit_equals_default(raw in "[a-zA-Z_ ]{1,12}") {
                prop_assert_eq!(
                    Pagination::from_query(Some(&raw), None),
                    Pagination::from_query(None, None)
                );
            }

            /// Property: non-negative integers pass through unchanged.
            #[test]
            fn non_negative_integers_pass_through(limit in 0i64..10_000, offset in 0i64..10_000) {
                let p = Pagination::from_query(Some(&limit.to_string()), Some(&offset.to_string()));
                prop_assert_eq!(p.limit, Some(limit as u64));
                prop_assert_eq!(p.offset, offset as u64);
            }
        }
    }
}
