use std::collections::HashMap;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the query-string form ("asc" / "desc").
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Declared type of an allow-listed field, driving query-string coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Boolean,
}

/// One allow-listed field of a resource type.
///
/// Each resource declares a fixed set of these; only declared fields ever
/// reach a query, which is what makes the raw query-string pairs safe to
/// translate into SQL.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A filter value coerced to its field's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
}

/// A single `field = value` condition on an allow-listed field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub value: FilterValue,
}

/// Sorting instruction on an allow-listed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Filter and sort portion of a list query.
///
/// Built from raw query-string pairs against a resource's allow-list;
/// unrecognized keys are silently dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    pub sort: Option<Sort>,
}

impl ListQuery {
    /// Build a query from raw key/value pairs.
    ///
    /// Keys outside the allow-list are ignored, as are integer values that
    /// fail to parse. Boolean fields match the literal string "true" and
    /// nothing else. `sort_by` only takes effect for allow-listed fields.
    pub fn from_raw(
        fields: &[FieldSpec],
        raw: &HashMap<String, String>,
        sort_by: Option<&str>,
        direction: SortDirection,
    ) -> Self {
        let mut filters = Vec::new();

        for spec in fields {
            let Some(value) = raw.get(spec.name) else {
                continue;
            };

            let coerced = match spec.kind {
                FieldKind::Integer => value.parse::<i64>().ok().map(FilterValue::Integer),
                FieldKind::Text => Some(FilterValue::Text(value.clone())),
                FieldKind::Boolean => Some(FilterValue::Boolean(value == "true")),
            };

            if let Some(value) = coerced {
                filters.push(Filter {
                    field: spec.name,
                    value,
                });
            }
        }

        let sort = sort_by
            .and_then(|name| fields.iter().find(|spec| spec.name == name))
            .map(|spec| Sort {
                field: spec.name,
                direction,
            });

        Self { filters, sort }
    }
}

/// Zero-based pagination window: skip = page * per_page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u32 = 10;

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total count under the same filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            name: "id",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "content",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "done",
            kind: FieldKind::Boolean,
        },
    ];

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = ListQuery::from_raw(
            FIELDS,
            &raw(&[("page", "2"), ("bogus", "x"), ("content", "milk")]),
            None,
            SortDirection::Asc,
        );

        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].field, "content");
        assert_eq!(
            query.filters[0].value,
            FilterValue::Text("milk".to_string())
        );
    }

    #[test]
    fn test_integer_coercion() {
        let query = ListQuery::from_raw(FIELDS, &raw(&[("id", "42")]), None, SortDirection::Asc);

        assert_eq!(query.filters[0].value, FilterValue::Integer(42));
    }

    #[test]
    fn test_unparsable_integer_is_dropped() {
        let query = ListQuery::from_raw(
            FIELDS,
            &raw(&[("id", "not-a-number")]),
            None,
            SortDirection::Asc,
        );

        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_boolean_matches_literal_true_only() {
        let query = ListQuery::from_raw(FIELDS, &raw(&[("done", "true")]), None, SortDirection::Asc);
        assert_eq!(query.filters[0].value, FilterValue::Boolean(true));

        let query = ListQuery::from_raw(FIELDS, &raw(&[("done", "yes")]), None, SortDirection::Asc);
        assert_eq!(query.filters[0].value, FilterValue::Boolean(false));
    }

    #[test]
    fn test_sort_requires_allow_listed_field() {
        let query = ListQuery::from_raw(FIELDS, &raw(&[]), Some("content"), SortDirection::Desc);
        assert_eq!(
            query.sort,
            Some(Sort {
                field: "content",
                direction: SortDirection::Desc,
            })
        );

        let query = ListQuery::from_raw(FIELDS, &raw(&[]), Some("hacked"), SortDirection::Desc);
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_page_request_windowing() {
        let page = PageRequest { page: 3, per_page: 7 };

        assert_eq!(page.offset(), 21);
        assert_eq!(page.limit(), 7);
    }
}
