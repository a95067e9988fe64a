use chrono::Utc;
use contracts::domain::a007_contract::aggregate::ContractId;
use contracts::domain::a009_attachment::aggregate::{Attachment, AttachmentId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::query::{ListQuery, Page};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::paging;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a009_attachment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub contract_id: Option<String>,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub stored_path: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Attachment {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let contract_id = m
            .contract_id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(ContractId::new);

        Attachment {
            base: BaseAggregate::with_metadata(
                AttachmentId(uuid),
                m.name,
                m.comment.clone(),
                metadata,
            ),
            contract_id,
            file_name: m.file_name,
            content_type: m.content_type,
            size_bytes: m.size_bytes,
            stored_path: m.stored_path,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn resolve_column(field: &str) -> Option<Column> {
    match field {
        "name" => Some(Column::Name),
        "file_name" | "fileName" => Some(Column::FileName),
        "size_bytes" | "sizeBytes" => Some(Column::SizeBytes),
        "created_at" | "createdAt" => Some(Column::CreatedAt),
        _ => None,
    }
}

/// Страница вложений; `contract_id` — фиксированный фильтр области
pub async fn list_page(
    query: &ListQuery,
    contract_id: Option<Uuid>,
) -> anyhow::Result<Page<Attachment>> {
    let mut base = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(contract_id) = contract_id {
        base = base.filter(Column::ContractId.eq(contract_id.to_string()));
    }
    paging::fetch_page(base, query, resolve_column, Column::CreatedAt).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Attachment>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Сколько активных вложений привязано к контракту
pub async fn count_active_by_contract(contract_id: Uuid) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::ContractId.eq(contract_id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Attachment) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        contract_id: Set(aggregate.contract_id.map(|c| c.value().to_string())),
        file_name: Set(aggregate.file_name.clone()),
        content_type: Set(aggregate.content_type.clone()),
        size_bytes: Set(aggregate.size_bytes),
        stored_path: Set(aggregate.stored_path.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Attachment) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        contract_id: Set(aggregate.contract_id.map(|c| c.value().to_string())),
        file_name: Set(aggregate.file_name.clone()),
        content_type: Set(aggregate.content_type.clone()),
        size_bytes: Set(aggregate.size_bytes),
        stored_path: Set(aggregate.stored_path.clone()),
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
