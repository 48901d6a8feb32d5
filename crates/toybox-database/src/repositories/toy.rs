//! Toy repository backed by PostgreSQL.
//!
//! Labels live in a `TEXT[]` column; owner and messages are embedded as
//! JSONB so that message push/pull are single-statement updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use toybox_core::error::{AppError, ErrorKind};
use toybox_core::result::AppResult;
use toybox_entity::toy::{Label, Message, Toy, ToyFilter, ToyPatch};
use toybox_entity::user::MiniUser;

use crate::store::ToyStore;

const TOY_COLUMNS: &str = "id, name, price, labels, in_stock, created_at, owner, messages";

/// Raw `toys` row before labels are checked against the vocabulary.
#[derive(Debug, FromRow)]
struct ToyRow {
    id: Uuid,
    name: String,
    price: f64,
    labels: Vec<String>,
    in_stock: bool,
    created_at: DateTime<Utc>,
    owner: Option<Json<MiniUser>>,
    messages: Json<Vec<Message>>,
}

impl TryFrom<ToyRow> for Toy {
    type Error = AppError;

    fn try_from(row: ToyRow) -> Result<Self, Self::Error> {
        let labels = row
            .labels
            .iter()
            .map(|l| l.parse::<Label>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                AppError::database(format!(
                    "Toy {} has a stored label outside the vocabulary: {}",
                    row.id, e.message
                ))
            })?;

        Ok(Toy {
            id: row.id,
            name: row.name,
            price: row.price,
            labels,
            in_stock: row.in_stock,
            created_at: row.created_at,
            owner: row.owner.map(|o| o.0),
            messages: row.messages.0,
        })
    }
}

fn label_strings(labels: &[Label]) -> Vec<String> {
    labels.iter().map(|l| l.as_str().to_string()).collect()
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Repository for toy CRUD and message operations.
#[derive(Debug, Clone)]
pub struct PgToyRepository {
    pool: PgPool,
}

impl PgToyRepository {
    /// Create a new toy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToyStore for PgToyRepository {
    async fn find_many(&self, filter: &ToyFilter) -> AppResult<Vec<Toy>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TOY_COLUMNS} FROM toys WHERE TRUE"));

        if let Some(needle) = filter.name_needle() {
            qb.push(" AND name ILIKE ")
                .push_bind(format!("%{}%", escape_like(&needle)));
        }
        if let Some(min) = filter.min_price {
            qb.push(" AND price >= ").push_bind(min);
        }
        if let Some(max) = filter.max_price {
            qb.push(" AND price <= ").push_bind(max);
        }
        if !filter.labels.is_empty() {
            qb.push(" AND labels @> ")
                .push_bind(label_strings(&filter.labels))
                .push("::text[]");
        }
        qb.push(" ORDER BY seq ASC");

        let rows = qb
            .build_query_as::<ToyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query toys", e))?;

        rows.into_iter().map(Toy::try_from).collect()
    }

    async fn find_one(&self, id: Uuid) -> AppResult<Option<Toy>> {
        let row = sqlx::query_as::<_, ToyRow>(&format!(
            "SELECT {TOY_COLUMNS} FROM toys WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to find toy {id}"), e)
        })?;

        row.map(Toy::try_from).transpose()
    }

    async fn insert(&self, toy: &Toy) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO toys (id, name, price, labels, in_stock, created_at, owner, messages) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(toy.id)
        .bind(&toy.name)
        .bind(toy.price)
        .bind(label_strings(&toy.labels))
        .bind(toy.in_stock)
        .bind(toy.created_at)
        .bind(toy.owner.as_ref().map(Json))
        .bind(Json(&toy.messages))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("toys_pkey") => {
                AppError::conflict(format!("Toy {} already exists", toy.id))
            }
            _ => AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert toy {}", toy.id),
                e,
            ),
        })?;
        Ok(())
    }

    async fn update_fields(&self, patch: &ToyPatch) -> AppResult<Option<Toy>> {
        let row = sqlx::query_as::<_, ToyRow>(&format!(
            "UPDATE toys SET name = COALESCE($2, name), \
                             price = COALESCE($3, price), \
                             labels = COALESCE($4, labels), \
                             in_stock = COALESCE($5, in_stock) \
             WHERE id = $1 RETURNING {TOY_COLUMNS}"
        ))
        .bind(patch.id)
        .bind(&patch.name)
        .bind(patch.price)
        .bind(patch.labels.as_ref().map(|l| label_strings(&Label::dedup(l.clone()))))
        .bind(patch.in_stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to update toy {}", patch.id),
                e,
            )
        })?;

        row.map(Toy::try_from).transpose()
    }

    async fn delete_one(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM toys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to delete toy {id}"), e)
            })?;

        Ok(result.rows_affected())
    }

    async fn push_message(&self, toy_id: Uuid, message: &Message) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE toys SET messages = messages || jsonb_build_array($2::jsonb) WHERE id = $1",
        )
        .bind(toy_id)
        .bind(Json(message))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to add message to toy {toy_id}"),
                e,
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn pull_message(&self, toy_id: Uuid, message_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE toys SET messages = COALESCE(( \
                 SELECT jsonb_agg(e.m ORDER BY e.ord) \
                 FROM jsonb_array_elements(messages) WITH ORDINALITY AS e(m, ord) \
                 WHERE e.m->>'id' <> $2 \
             ), '[]'::jsonb) \
             WHERE id = $1",
        )
        .bind(toy_id)
        .bind(message_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to remove message {message_id} from toy {toy_id}"),
                e,
            )
        })?;

        Ok(result.rows_affected() > 0)
    }
}
