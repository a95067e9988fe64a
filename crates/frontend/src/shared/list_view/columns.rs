use std::sync::Arc;

/// Описание колонки таблицы списка.
///
/// `field` — имя поля на проводе: оно же уходит в `sortBy`, и оно же
/// предлагается в селекторе поиска, если колонка входит в `search_fields`
/// конфигурации.
#[derive(Clone)]
pub struct Column<T> {
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align_right: bool,
    pub cell: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(
        field: &'static str,
        label: &'static str,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            label,
            sortable: true,
            align_right: false,
            cell: Arc::new(cell),
        }
    }

    /// Выравнивание вправо (числовые колонки)
    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    /// Колонка без сортировки (вычисляемые значения)
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}
