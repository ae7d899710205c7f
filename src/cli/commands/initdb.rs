use sea_orm_migration::MigratorTrait;

use crate::config::Config;
use crate::db::{Store, migrator::Migrator};

pub async fn run(config: &Config, drop: bool) -> anyhow::Result<()> {
    // Connecting applies pending migrations
    let store = Store::new(&config.general.database_path).await?;

    if drop {
        Migrator::fresh(&store.conn).await?;
    }

    println!("Initialized database.");
    Ok(())
}
