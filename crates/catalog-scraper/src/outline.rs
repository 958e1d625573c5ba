use crate::client::CatalogClient;
use crate::error::Result;
use crate::stages::StageReport;
use database::entities::section;
use database::services::outline::{OutlineRecord, OutlineService};
use log::error;
use models::stage::Stage;
use sea_orm::{DatabaseConnection, EntityTrait};

/// Fetches and persists the course outline of every stored section.
///
/// Each section carries its full denormalized ancestor chain, so the
/// five-segment path is built without joins. Sections with no published
/// outline (404) contribute nothing; a fetch failure is logged and counted
/// and the remaining sections are still visited. Persistence is one-to-one
/// with the section, so a re-fetched outline is skipped rather than
/// duplicated.
pub async fn scrape_course_outlines(
    client: &CatalogClient,
    db: &DatabaseConnection,
) -> Result<StageReport> {
    let sections = section::Entity::find().all(db).await?;
    let mut report = StageReport::new(Stage::CourseOutlines, sections.len());

    let mut records = Vec::new();
    for section in &sections {
        let path = format!(
            "{}/{}/{}/{}/{}",
            section.year_value,
            section.term_value,
            section.department_value,
            section.course_value,
            section.value
        );

        match client.fetch_outline(&path).await {
            Ok(Some(data)) => records.push(OutlineRecord {
                section_id: section.id,
                data,
            }),
            Ok(None) => {}
            Err(err) => {
                error!("{}: fetch failed for '{path}': {err}", report.stage);
                report.failed += 1;
            }
        }
    }

    let outcome = OutlineService::save_outlines(db, records).await?;
    report.inserted = outcome.inserted;
    report.skipped = outcome.skipped;

    Ok(report)
}
