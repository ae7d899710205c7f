use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::{prelude::*, users};

/// User data returned from the repository (without the password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The sole account: first user row by id. Extra rows are ignored.
    pub async fn first(&self) -> Result<Option<User>> {
        let user = Users::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query sole user")?;

        Ok(user.map(User::from))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    /// Check a login submission against the sole account.
    ///
    /// Returns the user only when the submitted name matches AND the password
    /// verifies. Callers must not learn which of the two was wrong.
    ///
    /// Note: Argon2 verification is CPU-intensive and runs in `spawn_blocking`
    /// so it does not stall the async runtime.
    pub async fn verify_credentials(&self, name: &str, password: &str) -> Result<Option<User>> {
        let user = Users::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query user for credential check")?;

        let Some(user) = user else {
            return Ok(None);
        };

        if user.name != name {
            return Ok(None);
        }

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            let argon2 = Argon2::default();
            Ok::<bool, anyhow::Error>(
                argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| User::from(user)))
    }

    /// Rename a user (the settings workflow)
    pub async fn update_name(&self, id: i32, name: &str) -> Result<()> {
        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user for rename")?
            .ok_or_else(|| anyhow::anyhow!("User {id} not found"))?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut active: users::ActiveModel = user.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(now);
        active.update(&self.conn).await?;

        Ok(())
    }

    /// Create or overwrite the sole account with a freshly hashed password
    /// (the `admin` provisioning command).
    pub async fn provision(
        &self,
        name: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<()> {
        let password = password.to_string();
        let config = config.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .context("Password hashing task panicked")??;

        let now = chrono::Utc::now().to_rfc3339();

        match Users::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query user for provisioning")?
        {
            Some(user) => {
                let mut active: users::ActiveModel = user.into();
                active.name = Set(name.to_string());
                active.password_hash = Set(password_hash);
                active.updated_at = Set(now);
                active.update(&self.conn).await?;
            }
            None => {
                let active = users::ActiveModel {
                    name: Set(name.to_string()),
                    password_hash: Set(password_hash),
                    created_at: Set(now.clone()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.conn).await?;
            }
        }

        Ok(())
    }
}

/// Hash a password using Argon2id with params from the security config.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}
