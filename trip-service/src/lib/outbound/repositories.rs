use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::listing::FilterValue;
use crate::domain::listing::ListQuery;
use crate::domain::listing::PageRequest;

pub mod place;
pub mod task;
pub mod user;

pub use place::PostgresPlaceRepository;
pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;

/// Append the owner scope and allow-listed filters as a WHERE clause.
///
/// The owner condition always comes first and the client filters are ANDed
/// after it, so a client-supplied owner filter can narrow the scope but
/// never widen it. Field names are pushed verbatim: they only ever come
/// from a resource's static allow-list, never from the request.
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, owner_email: &str, query: &ListQuery) {
    builder.push(" WHERE owner_email = ");
    builder.push_bind(owner_email.to_string());

    for filter in &query.filters {
        builder.push(" AND ");
        builder.push(filter.field);
        builder.push(" = ");
        match &filter.value {
            FilterValue::Integer(value) => builder.push_bind(*value),
            FilterValue::Text(value) => builder.push_bind(value.clone()),
            FilterValue::Boolean(value) => builder.push_bind(*value),
        };
    }
}

/// Append ORDER BY (when sorting on an allow-listed field) and the
/// LIMIT/OFFSET window.
fn push_order_and_page(
    builder: &mut QueryBuilder<'_, Postgres>,
    query: &ListQuery,
    page: PageRequest,
) {
    if let Some(sort) = query.sort {
        builder.push(" ORDER BY ");
        builder.push(sort.field);
        builder.push(" ");
        builder.push(sort.direction.as_sql());
    }

    builder.push(" LIMIT ");
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
}
