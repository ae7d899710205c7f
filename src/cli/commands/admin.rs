use std::io::Write;

use crate::config::Config;
use crate::db::Store;
use crate::web::validation::validate_username;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    print!("Username: ");
    std::io::stdout().flush()?;
    let mut username = String::new();
    std::io::stdin().read_line(&mut username)?;
    let username = username.trim();

    if let Err(reason) = validate_username(username) {
        anyhow::bail!(reason);
    }

    print!("Password: ");
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim();

    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    if store.sole_user().await?.is_some() {
        println!("Updating account...");
    } else {
        println!("Creating account...");
    }

    store
        .provision_admin(username, password, &config.security)
        .await?;

    println!("Done.");
    Ok(())
}
