use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryOrder, Set, Statement, TransactionTrait,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::entities::{movies, prelude::*, users};

pub mod migrator;
pub mod repositories;

pub use repositories::movie::Movie;
pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn add_movie(&self, title: &str, year: &str) -> Result<i32> {
        self.movie_repo().add(title, year).await
    }

    pub async fn update_movie(&self, id: i32, title: &str, year: &str) -> Result<bool> {
        self.movie_repo().update(id, title, year).await
    }

    pub async fn remove_movie(&self, id: i32) -> Result<bool> {
        self.movie_repo().remove(id).await
    }

    pub async fn count_movies(&self) -> Result<u64> {
        self.movie_repo().count().await
    }

    pub async fn sole_user(&self) -> Result<Option<User>> {
        self.user_repo().first().await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn verify_credentials(&self, name: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_credentials(name, password).await
    }

    pub async fn update_username(&self, id: i32, name: &str) -> Result<()> {
        self.user_repo().update_name(id, name).await
    }

    pub async fn provision_admin(
        &self,
        name: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<()> {
        self.user_repo().provision(name, password, config).await
    }

    /// Seed the owner name and a batch of movies as one atomic commit.
    pub async fn forge(&self, owner: &str, seed: &[(&str, &str)]) -> Result<()> {
        let txn = self.conn.begin().await?;
        let now = chrono::Utc::now().to_rfc3339();

        if let Some(user) = Users::find()
            .order_by_asc(users::Column::Id)
            .one(&txn)
            .await?
        {
            let mut active: users::ActiveModel = user.into();
            active.name = Set(owner.to_string());
            active.updated_at = Set(now.clone());
            active.update(&txn).await?;
        }

        for (title, year) in seed {
            let active = movies::ActiveModel {
                title: Set((*title).to_string()),
                year: Set((*year).to_string()),
                created_at: Set(now.clone()),
                ..Default::default()
            };
            active.insert(&txn).await?;
        }

        txn.commit().await?;
        info!("Seeded {} movies for {}", seed.len(), owner);
        Ok(())
    }
}
