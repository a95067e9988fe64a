use chrono::Utc;
use contracts::domain::a007_contract::aggregate::ContractId;
use contracts::domain::a008_payment::aggregate::{Payment, PaymentId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::query::{ListQuery, Page};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::paging;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a008_payment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub contract_id: String,
    pub amount: f64,
    pub paid_at: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Payment {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let contract_uuid = Uuid::parse_str(&m.contract_id).unwrap_or_else(|_| Uuid::new_v4());

        Payment {
            base: BaseAggregate::with_metadata(
                PaymentId(uuid),
                m.name,
                m.comment.clone(),
                metadata,
            ),
            contract_id: ContractId(contract_uuid),
            amount: m.amount,
            paid_at: chrono::NaiveDate::parse_from_str(&m.paid_at, "%Y-%m-%d")
                .unwrap_or_else(|_| Utc::now().date_naive()),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn resolve_column(field: &str) -> Option<Column> {
    match field {
        "name" => Some(Column::Name),
        "amount" => Some(Column::Amount),
        "paid_at" | "paidAt" => Some(Column::PaidAt),
        "created_at" | "createdAt" => Some(Column::CreatedAt),
        _ => None,
    }
}

/// Страница платежей; `contract_id` — фиксированный фильтр области
/// (платежи одного контракта)
pub async fn list_page(query: &ListQuery, contract_id: Option<Uuid>) -> anyhow::Result<Page<Payment>> {
    let mut base = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(contract_id) = contract_id {
        base = base.filter(Column::ContractId.eq(contract_id.to_string()));
    }
    paging::fetch_page(base, query, resolve_column, Column::PaidAt).await
}

/// Все активные платежи контракта (для сводки оплат)
pub async fn list_by_contract(contract_id: Uuid) -> anyhow::Result<Vec<Payment>> {
    let rows = Entity::find()
        .filter(Column::ContractId.eq(contract_id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::PaidAt)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Payment>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Сколько активных платежей ссылается на контракт
pub async fn count_active_by_contract(contract_id: Uuid) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::ContractId.eq(contract_id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Payment) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        contract_id: Set(aggregate.contract_id.value().to_string()),
        amount: Set(aggregate.amount),
        paid_at: Set(aggregate.paid_at.format("%Y-%m-%d").to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Payment) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        contract_id: Set(aggregate.contract_id.value().to_string()),
        amount: Set(aggregate.amount),
        paid_at: Set(aggregate.paid_at.format("%Y-%m-%d").to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
