pub mod client;
pub mod error;
pub mod outline;
pub mod stages;

pub use error::{Error, Result};

use client::CatalogClient;
use log::{error, info};
use models::stage::Stage;
use sea_orm::DatabaseConnection;
use stages::{
    StageReport, scrape_course_numbers, scrape_departments, scrape_sections, scrape_terms,
    scrape_years,
};

/// Walks the whole catalog hierarchy top-down, one stage at a time.
///
/// Each stage reads its parents from storage, so a run started against a
/// partially-captured catalog picks up where the data left off and a
/// completed catalog converges to all-skips. A stage whose parent read
/// fails is logged and the remaining stages are still attempted.
pub async fn run_crawl(client: &CatalogClient, db: &DatabaseConnection) -> Vec<StageReport> {
    let mut reports = Vec::new();

    for stage in Stage::all() {
        let result = match stage {
            Stage::Years => scrape_years(client, db).await,
            Stage::Terms => scrape_terms(client, db).await,
            Stage::Departments => scrape_departments(client, db).await,
            Stage::CourseNumbers => scrape_course_numbers(client, db).await,
            Stage::Sections => scrape_sections(client, db).await,
            Stage::CourseOutlines => outline::scrape_course_outlines(client, db).await,
        };

        match result {
            Ok(report) => {
                info!(
                    "{stage}: visited {} parents, inserted {}, skipped {}, {} failures",
                    report.parents, report.inserted, report.skipped, report.failed
                );
                reports.push(report);
            }
            Err(err) => error!("{stage}: stage did not run: {err}"),
        }
    }

    reports
}
