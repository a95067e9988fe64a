use chrono::Utc;
use contracts::domain::a004_purchaser::aggregate::PurchaserId;
use contracts::domain::a006_project::aggregate::{Project, ProjectId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::query::{ListQuery, Page};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::paging;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub purchaser_id: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let purchaser_id = m
            .purchaser_id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(PurchaserId::new);

        Project {
            base: BaseAggregate::with_metadata(
                ProjectId(uuid),
                m.name,
                m.comment.clone(),
                metadata,
            ),
            purchaser_id,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn resolve_column(field: &str) -> Option<Column> {
    match field {
        "name" => Some(Column::Name),
        "created_at" | "createdAt" => Some(Column::CreatedAt),
        _ => None,
    }
}

pub async fn list_page(query: &ListQuery) -> anyhow::Result<Page<Project>> {
    let base = Entity::find().filter(Column::IsDeleted.eq(false));
    paging::fetch_page(base, query, resolve_column, Column::CreatedAt).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
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

/// Сколько активных проектов ссылается на покупателя
pub async fn count_active_by_purchaser(purchaser_id: Uuid) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::PurchaserId.eq(purchaser_id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Project) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        purchaser_id: Set(aggregate.purchaser_id.map(|p| p.value().to_string())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Project) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.base.name.clone()),
        comment: Set(aggregate.base.comment.clone()),
        purchaser_id: Set(aggregate.purchaser_id.map(|p| p.value().to_string())),
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
