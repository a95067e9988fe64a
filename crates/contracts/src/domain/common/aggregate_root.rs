use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить наименование записи
    fn name(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Индекс агрегата в системе (например, "a002")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД и REST-пути (например, "unit")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Единица измерения")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Единицы измерения")
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a002_unit")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
