//! Утилиты списков: переключение сортировки и индикаторы заголовков
use contracts::shared::query::{ListQuery, SortDir};

/// Переход сортировки по клику на заголовок.
///
/// Активная колонка меняет направление; новая колонка становится активной и
/// сбрасывает направление в ASC. Любое изменение сортировки возвращает на
/// первую страницу.
pub fn toggle_sort(query: &mut ListQuery, field: &str) {
    if query.sort_by == field {
        query.sort_type = query.sort_type.flipped();
    } else {
        query.sort_by = field.to_string();
        query.sort_type = SortDir::Asc;
    }
    query.page = 1;
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, sort_type: SortDir) -> &'static str {
    if current_field == field {
        match sort_type {
            SortDir::Asc => " ▲",
            SortDir::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_active_column_flips_direction_only() {
        let mut query = ListQuery {
            sort_by: "name".into(),
            sort_type: SortDir::Asc,
            page: 7,
            ..ListQuery::default()
        };

        toggle_sort(&mut query, "name");
        assert_eq!(query.sort_by, "name");
        assert_eq!(query.sort_type, SortDir::Desc);

        toggle_sort(&mut query, "name");
        assert_eq!(query.sort_type, SortDir::Asc);
    }

    #[test]
    fn clicking_new_column_resets_direction_to_asc() {
        let mut query = ListQuery {
            sort_by: "name".into(),
            sort_type: SortDir::Desc,
            ..ListQuery::default()
        };

        toggle_sort(&mut query, "symbol");
        assert_eq!(query.sort_by, "symbol");
        assert_eq!(query.sort_type, SortDir::Asc);
    }

    #[test]
    fn sort_change_returns_to_first_page() {
        let mut query = ListQuery {
            sort_by: "name".into(),
            page: 5,
            ..ListQuery::default()
        };

        toggle_sort(&mut query, "name");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn indicator_marks_only_active_column() {
        assert_eq!(get_sort_indicator("name", "name", SortDir::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "name", SortDir::Desc), " ▼");
        assert_eq!(get_sort_indicator("name", "symbol", SortDir::Asc), " ⇅");
    }
}
