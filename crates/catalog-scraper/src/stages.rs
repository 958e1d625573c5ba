use crate::client::CatalogClient;
use crate::error::Result;
use database::entities::{course_number, department, section, term, year};
use database::services::catalog::{NaturalKey, insert_if_absent};
use log::error;
use models::{catalog::CatalogEntry, stage::Stage};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Outcome of one stage of the crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    /// Parents visited
    pub parents: usize,
    pub inserted: u64,
    pub skipped: u64,
    /// Parents whose fetch or insert failed
    pub failed: usize,
}

impl StageReport {
    pub fn new(stage: Stage, parents: usize) -> Self {
        StageReport {
            stage,
            parents,
            inserted: 0,
            skipped: 0,
            failed: 0,
        }
    }
}

/// Runs one fetch-map-insert stage of the catalog traversal.
///
/// For each parent this issues a single GET for the listing below the
/// parent's ancestor path and inserts one batch of child rows keyed on the
/// parent. A missing listing (404) is an empty result. A failed parent is
/// logged with the attempted path and counted; it never aborts the
/// remaining parents. Parents are visited strictly sequentially.
///
/// # Arguments
/// * `client` - The catalog client
/// * `db` - The database connection
/// * `stage` - The hierarchy level, for reporting
/// * `parents` - Parent rows read from storage
/// * `path_of` - Builds the slash-separated ancestor path of a parent
/// * `to_model` - Maps one listing entry to a child row under the parent
///
/// # Returns
/// A [`StageReport`] with the stage's insert/skip/failure counts
pub async fn run_listing_stage<A, P, FPath, FMap>(
    client: &CatalogClient,
    db: &DatabaseConnection,
    stage: Stage,
    parents: &[P],
    path_of: FPath,
    to_model: FMap,
) -> StageReport
where
    A: ActiveModelTrait,
    A::Entity: NaturalKey,
    <A::Entity as sea_orm::EntityTrait>::Model: sea_orm::IntoActiveModel<A>,
    FPath: Fn(&P) -> String,
    FMap: Fn(&P, CatalogEntry) -> A,
{
    let mut report = StageReport::new(stage, parents.len());

    for parent in parents {
        let path = path_of(parent);

        let entries = match client.fetch_listing(&path).await {
            Ok(entries) => entries,
            Err(err) => {
                error!("{stage}: fetch failed for '{path}': {err}");
                report.failed += 1;
                continue;
            }
        };

        let models: Vec<A> = entries
            .into_iter()
            .map(|entry| to_model(parent, entry))
            .collect();

        match insert_if_absent(db, models).await {
            Ok(outcome) => {
                report.inserted += outcome.inserted;
                report.skipped += outcome.skipped;
            }
            Err(err) => {
                error!("{stage}: insert failed for '{path}': {err}");
                report.failed += 1;
            }
        }
    }

    report
}

/// Scrapes the root year listing
pub async fn scrape_years(client: &CatalogClient, db: &DatabaseConnection) -> Result<StageReport> {
    Ok(run_listing_stage(
        client,
        db,
        Stage::Years,
        &[()],
        |_| String::new(),
        |_, entry| year::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(entry.value),
        },
    )
    .await)
}

/// Scrapes the term listing of every stored year
pub async fn scrape_terms(client: &CatalogClient, db: &DatabaseConnection) -> Result<StageReport> {
    let years = year::Entity::find().all(db).await?;

    Ok(run_listing_stage(
        client,
        db,
        Stage::Terms,
        &years,
        |year| year.value.clone(),
        |year, entry| term::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(entry.value),
            year_id: Set(year.id),
            year_value: Set(year.value.clone()),
        },
    )
    .await)
}

/// Scrapes the department listing of every stored term
pub async fn scrape_departments(
    client: &CatalogClient,
    db: &DatabaseConnection,
) -> Result<StageReport> {
    let terms = term::Entity::find().all(db).await?;

    Ok(run_listing_stage(
        client,
        db,
        Stage::Departments,
        &terms,
        |term| format!("{}/{}", term.year_value, term.value),
        |term, entry| department::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(entry.value),
            name: Set(entry.name),
            term_id: Set(term.id),
            year_value: Set(term.year_value.clone()),
            term_value: Set(term.value.clone()),
        },
    )
    .await)
}

/// Scrapes the course-number listing of every stored department
pub async fn scrape_course_numbers(
    client: &CatalogClient,
    db: &DatabaseConnection,
) -> Result<StageReport> {
    let departments = department::Entity::find().all(db).await?;

    Ok(run_listing_stage(
        client,
        db,
        Stage::CourseNumbers,
        &departments,
        |department| {
            format!(
                "{}/{}/{}",
                department.year_value, department.term_value, department.value
            )
        },
        |department, entry| course_number::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(entry.value),
            title: Set(entry.title),
            department_id: Set(department.id),
            year_value: Set(department.year_value.clone()),
            term_value: Set(department.term_value.clone()),
            department_value: Set(department.value.clone()),
        },
    )
    .await)
}

/// Scrapes the section listing of every stored course number
pub async fn scrape_sections(
    client: &CatalogClient,
    db: &DatabaseConnection,
) -> Result<StageReport> {
    let course_numbers = course_number::Entity::find().all(db).await?;

    Ok(run_listing_stage(
        client,
        db,
        Stage::Sections,
        &course_numbers,
        |number| {
            format!(
                "{}/{}/{}/{}",
                number.year_value, number.term_value, number.department_value, number.value
            )
        },
        |number, entry| section::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(entry.value),
            class_type: Set(entry.class_type),
            section_code: Set(entry.section_code),
            associated_class: Set(entry.associated_class),
            course_number_id: Set(number.id),
            year_value: Set(number.year_value.clone()),
            term_value: Set(number.term_value.clone()),
            department_value: Set(number.department_value.clone()),
            course_value: Set(number.value.clone()),
        },
    )
    .await)
}
