use crate::config::Config;
use crate::db::Store;

const OWNER: &str = "Mogu";

const MOVIES: [(&str, &str); 10] = [
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    store.forge(OWNER, &MOVIES).await?;
    println!("Done.");
    Ok(())
}
