//! Store-level tests: movie CRUD, seeding, and account provisioning.

use watchlist::config::SecurityConfig;
use watchlist::db::Store;

async fn memory_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to open in-memory store")
}

#[tokio::test]
async fn test_bootstrap_user_is_seeded() {
    let store = memory_store().await;

    let user = store.sole_user().await.unwrap().expect("no bootstrap user");
    assert_eq!(user.name, "admin");

    let verified = store.verify_credentials("admin", "password").await.unwrap();
    assert!(verified.is_some());
}

#[tokio::test]
async fn test_movie_crud() {
    let store = memory_store().await;

    let id = store.add_movie("Leon", "1994").await.unwrap();
    assert_eq!(store.count_movies().await.unwrap(), 1);

    let movie = store.get_movie(id).await.unwrap().unwrap();
    assert_eq!(movie.title, "Leon");
    assert_eq!(movie.year, "1994");

    assert!(store.update_movie(id, "A Perfect World", "1993").await.unwrap());
    let movie = store.get_movie(id).await.unwrap().unwrap();
    assert_eq!(movie.title, "A Perfect World");
    assert_eq!(movie.year, "1993");

    assert!(store.remove_movie(id).await.unwrap());
    assert!(!store.remove_movie(id).await.unwrap());
    assert_eq!(store.count_movies().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_movies_in_insertion_order() {
    let store = memory_store().await;

    store.add_movie("My Neighbor Totoro", "1988").await.unwrap();
    store.add_movie("WALL-E", "2008").await.unwrap();

    let movies = store.list_movies().await.unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["My Neighbor Totoro", "WALL-E"]);
}

#[tokio::test]
async fn test_forge_seeds_owner_and_movies() {
    let store = memory_store().await;

    let seed = [("My Neighbor Totoro", "1988"), ("Leon", "1994")];
    store.forge("Mogu", &seed).await.unwrap();

    assert_eq!(store.count_movies().await.unwrap(), 2);
    assert_eq!(store.sole_user().await.unwrap().unwrap().name, "Mogu");
}

#[tokio::test]
async fn test_provision_overwrites_sole_account() {
    let store = memory_store().await;
    let security = SecurityConfig::default();

    store
        .provision_admin("Totoro", "acorns4ever", &security)
        .await
        .unwrap();

    // Still a single account, renamed and rekeyed
    let user = store.sole_user().await.unwrap().unwrap();
    assert_eq!(user.name, "Totoro");

    assert!(
        store
            .verify_credentials("Totoro", "acorns4ever")
            .await
            .unwrap()
            .is_some()
    );

    // Old bootstrap credentials no longer work, and the failure is opaque
    assert!(
        store
            .verify_credentials("admin", "password")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .verify_credentials("Totoro", "password")
            .await
            .unwrap()
            .is_none()
    );
}
