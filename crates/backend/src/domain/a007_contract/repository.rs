use chrono::Utc;
use contracts::domain::a001_currency::aggregate::CurrencyId;
use contracts::domain::a003_company::aggregate::CompanyId;
use contracts::domain::a004_purchaser::aggregate::PurchaserId;
use contracts::domain::a006_project::aggregate::ProjectId;
use contracts::domain::a007_contract::aggregate::{Contract, ContractId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::query::{ListQuery, Page};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::paging;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_contract")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub number: String,
    pub project_id: String,
    pub company_id: String,
    pub purchaser_id: String,
    pub currency_id: String,
    pub amount: f64,
    pub signed_at: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Contract {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let parse = |s: &str| Uuid::parse_str(s).unwrap_or_else(|_| Uuid::new_v4());

        Contract {
            base: BaseAggregate::with_metadata(
                ContractId(parse(&m.id)),
                m.name,
                m.comment.clone(),
                metadata,
            ),
            number: m.number,
            project_id: ProjectId(parse(&m.project_id)),
            company_id: CompanyId(parse(&m.company_id)),
            purchaser_id: PurchaserId(parse(&m.purchaser_id)),
            currency_id: CurrencyId(parse(&m.currency_id)),
            amount: m.amount,
            signed_at: m
                .signed_at
                .as_deref()
                .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn resolve_column(field: &str) -> Option<Column> {
    match field {
        "name" => Some(Column::Name),
        "number" => Some(Column::Number),
        "amount" => Some(Column::Amount),
        "signed_at" | "signedAt" => Some(Column::SignedAt),
        "created_at" | "createdAt" => Some(Column::CreatedAt),
        _ => None,
    }
}

/// Страница контрактов; `project_id` — фиксированный фильтр области
/// (страница контрактов проекта), применяется поверх любого поиска
pub async fn list_page(query: &ListQuery, project_id: Option<Uuid>) -> anyhow::Result<Page<Contract>> {
    let mut base = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(project_id) = project_id {
        base = base.filter(Column::ProjectId.eq(project_id.to_string()));
    }
    paging::fetch_page(base, query, resolve_column, Column::CreatedAt).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Contract>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn exists_active(id: Uuid) -> anyhow::Result<bool> {
    let found = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(found.is_some())
}

async fn count_active_by(column: Column, id: Uuid) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(column.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn count_active_by_project(id: Uuid) -> anyhow::Result<u64> {
    count_active_by(Column::ProjectId, id).await
}

pub async fn count_active_by_company(id: Uuid) -> anyhow::Result<u64> {
    count_active_by(Column::CompanyId, id).await
}

pub async fn count_active_by_purchaser(id: Uuid) -> anyhow::Result<u64> {
    count_active_by(Column::PurchaserId, id).await
}

pub async fn count_active_by_currency(id: Uuid) -> anyhow::Result<u64> {
    count_active_by(Column::CurrencyId, id).await
}

pub async fn insert(aggregate: &Contract) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        number: Set(aggregate.number.clone()),
        project_id: Set(aggregate.project_id.value().to_string()),
        company_id: Set(aggregate.company_id.value().to_string()),
        purchaser_id: Set(aggregate.purchaser_id.value().to_string()),
        currency_id: Set(aggregate.currency_id.value().to_string()),
        amount: Set(aggregate.amount),
        signed_at: Set(aggregate.signed_at.map(|d| d.format("%Y-%m-%d").to_string())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Contract) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        number: Set(aggregate.number.clone()),
        project_id: Set(aggregate.project_id.value().to_string()),
        company_id: Set(aggregate.company_id.value().to_string()),
        purchaser_id: Set(aggregate.purchaser_id.value().to_string()),
        currency_id: Set(aggregate.currency_id.value().to_string()),
        amount: Set(aggregate.amount),
        signed_at: Set(aggregate.signed_at.map(|d| d.format("%Y-%m-%d").to_string())),
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
