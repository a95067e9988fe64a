use contracts::shared::query::{ListQuery, Page, SortDir};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use super::db::get_connection;

/// Верхняя граница размера страницы
const MAX_PAGE_SIZE: u64 = 500;

/// Выполнить запрос страницы списка поверх подготовленного select.
///
/// `resolve_column` — allow-list колонок для поиска и сортировки: имя поля
/// с провода превращается в колонку либо отбрасывается. Неизвестное поле
/// сортировки заменяется на `default_sort`, неизвестное поле поиска
/// отключает фильтр. `count` считается до применения страницы и отражает
/// все записи по фильтру.
pub async fn fetch_page<E, A, F>(
    base: Select<E>,
    query: &ListQuery,
    resolve_column: F,
    default_sort: <E as EntityTrait>::Column,
) -> anyhow::Result<Page<A>>
where
    E: EntityTrait,
    <E as EntityTrait>::Model: FromQueryResult + Send + Sync,
    A: From<<E as EntityTrait>::Model>,
    F: Fn(&str) -> Option<<E as EntityTrait>::Column>,
{
    let conn = get_connection();
    let mut select = base;

    if query.has_search() {
        if let Some(column) = resolve_column(query.search_by.as_str()) {
            select = select.filter(column.contains(query.search_value.trim()));
        }
    }

    let count = select.clone().count(conn).await?;

    let sort_column = resolve_column(query.sort_by.as_str()).unwrap_or(default_sort);
    let order = match query.sort_type {
        SortDir::Asc => Order::Asc,
        SortDir::Desc => Order::Desc,
    };

    let rows = select
        .order_by(sort_column, order)
        .offset(query.offset())
        .limit(query.limit.clamp(1, MAX_PAGE_SIZE))
        .all(conn)
        .await?
        .into_iter()
        .map(A::from)
        .collect();

    Ok(Page { count, rows })
}
