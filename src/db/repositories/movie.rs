use crate::entities::{movies, prelude::*};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use tracing::info;

/// Repository for movie row operations
pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: movies::Model) -> Movie {
        Movie {
            id: m.id,
            title: m.title,
            year: m.year,
        }
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let row = Movies::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn add(&self, title: &str, year: &str) -> Result<i32> {
        let active_model = movies::ActiveModel {
            title: Set(title.to_string()),
            year: Set(year.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let res = Movies::insert(active_model).exec(&self.conn).await?;
        info!("Added movie {}: {} ({})", res.last_insert_id, title, year);
        Ok(res.last_insert_id)
    }

    /// Update title and year in place. Returns false when the row is gone.
    pub async fn update(&self, id: i32, title: &str, year: &str) -> Result<bool> {
        let Some(row) = Movies::find_by_id(id).one(&self.conn).await? else {
            return Ok(false);
        };

        let mut active: movies::ActiveModel = row.into();
        active.title = Set(title.to_string());
        active.year = Set(year.to_string());
        active.update(&self.conn).await?;

        Ok(true)
    }

    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = Movies::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = Movies::find().count(&self.conn).await?;
        Ok(count)
    }
}

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: String,
}
