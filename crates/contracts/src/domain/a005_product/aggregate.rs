use crate::domain::a002_unit::aggregate::UnitId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Товар (позиция номенклатуры с остатком на складе)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Артикул
    pub sku: String,

    #[serde(rename = "unitId")]
    pub unit_id: UnitId,

    pub price: f64,
    /// Остаток на складе в единицах `unit_id`
    pub quantity: f64,
}

impl Product {
    pub fn new_for_insert(
        name: String,
        sku: String,
        unit_id: UnitId,
        price: f64,
        quantity: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            sku,
            unit_id,
            price,
            quantity,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO (unit_id уже разобран сервисом)
    pub fn apply(&mut self, dto: &ProductDto, unit_id: UnitId) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.sku = dto.sku.clone();
        self.unit_id = unit_id;
        self.price = dto.price;
        self.quantity = dto.quantity;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            errors.add("price", "Цена не может быть отрицательной");
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            errors.add("quantity", "Остаток не может быть отрицательным");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}

/// DTO для создания/обновления товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub sku: String,

    /// Ссылка на единицу измерения (uuid строкой)
    #[serde(rename = "unitId")]
    pub unit_id: String,

    pub price: f64,
    pub quantity: f64,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_and_quantity_are_rejected() {
        let mut product = Product::new_for_insert(
            "Труба стальная".into(),
            "TR-100".into(),
            UnitId::new_v4(),
            1250.0,
            40.0,
            None,
        );
        assert!(product.validate().is_ok());

        product.price = -1.0;
        product.quantity = -0.5;
        let errors = product.validate().unwrap_err();
        assert!(errors.fields().contains_key("price"));
        assert!(errors.fields().contains_key("quantity"));
    }
}
