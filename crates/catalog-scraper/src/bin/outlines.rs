use catalog_scraper::{client::CatalogClient, run_crawl};
use chrono::Local;
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};

/// Orchestrates the crawl of the course-outline catalog
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let db = create_connection()
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    let client = CatalogClient::new();
    let start_time = Local::now();

    let reports = run_crawl(&client, &db).await;

    let total_inserted: u64 = reports.iter().map(|report| report.inserted).sum();
    let run_time = (Local::now() - start_time).num_seconds();
    info!("crawl finished: {total_inserted} new rows in {run_time}s");
}
