use serde::{Deserialize, Serialize};

/// Направление сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDir {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    #[default]
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Параметры запроса списка: поиск, сортировка, страница.
///
/// Имена полей на проводе — camelCase, как их шлёт и принимает клиент:
/// `?searchBy=name&searchValue=Kilo&page=1&limit=10&sortBy=name&sortType=DESC`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_search_by")]
    pub search_by: String,
    #[serde(default)]
    pub search_value: String,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub sort_type: SortDir,
}

fn default_search_by() -> String {
    "name".to_string()
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_by: default_search_by(),
            search_value: String::new(),
            page: default_page(),
            limit: default_limit(),
            sort_by: String::new(),
            sort_type: SortDir::default(),
        }
    }
}

impl ListQuery {
    /// Смещение первой строки страницы (страницы нумеруются с 1)
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }

    /// Активен ли поисковый фильтр
    pub fn has_search(&self) -> bool {
        !self.search_value.trim().is_empty()
    }
}

/// Всего страниц для `count` записей при размере страницы `limit`
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}

/// Страница коллекции: общее число записей по фильтру + строки текущей страницы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub rows: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            count: 0,
            rows: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_match_client_contract() {
        let q: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.search_by, "name");
        assert_eq!(q.search_value, "");
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.sort_type, SortDir::Desc);
    }

    #[test]
    fn query_uses_camel_case_on_the_wire() {
        let q: ListQuery = serde_json::from_str(
            r#"{"searchBy":"symbol","searchValue":"kg","page":3,"limit":25,"sortBy":"symbol","sortType":"ASC"}"#,
        )
        .unwrap();
        assert_eq!(q.search_by, "symbol");
        assert_eq!(q.search_value, "kg");
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 25);
        assert_eq!(q.sort_by, "symbol");
        assert_eq!(q.sort_type, SortDir::Asc);

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["searchBy"], "symbol");
        assert_eq!(json["sortType"], "ASC");
    }

    #[test]
    fn offset_is_one_based() {
        let q = ListQuery {
            page: 1,
            limit: 10,
            ..ListQuery::default()
        };
        assert_eq!(q.offset(), 0);

        let q = ListQuery {
            page: 4,
            limit: 25,
            ..ListQuery::default()
        };
        assert_eq!(q.offset(), 75);
    }

    #[test]
    fn total_pages_is_ceil_of_count_over_limit() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn sort_dir_flips() {
        assert_eq!(SortDir::Asc.flipped(), SortDir::Desc);
        assert_eq!(SortDir::Desc.flipped(), SortDir::Asc);
    }
}
