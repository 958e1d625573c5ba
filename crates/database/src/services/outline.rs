use crate::entities::{
    course_outline, outline_grade, outline_instructor, outline_schedule, outline_text,
};
use crate::services::catalog::{InsertReport, insert_if_absent};
use futures::future::try_join_all;
use log::{error, info};
use models::outline::OutlineData;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    TransactionTrait,
};
use uuid::Uuid;

/// A fetched outline waiting to be persisted for its section
#[derive(Debug, Clone)]
pub struct OutlineRecord {
    pub section_id: Uuid,
    pub data: OutlineData,
}

pub struct OutlineService;

impl OutlineService {
    /// The number of outlines to save in a single batch
    const BATCH_SIZE: usize = 200;

    /// Persists fetched outlines, one row per section plus the expanded
    /// nested collections. Sections that already have an outline are
    /// skipped; their nested rows are left untouched.
    pub async fn save_outlines(
        db: &DatabaseConnection,
        records: Vec<OutlineRecord>,
    ) -> Result<InsertReport, DbErr> {
        let total = records.len();
        if total == 0 {
            return Ok(InsertReport::default());
        }

        info!(
            "saving {} course outlines in batches of {}",
            total,
            Self::BATCH_SIZE
        );

        let batch_futures = records
            .chunks(Self::BATCH_SIZE)
            .enumerate()
            .map(|(batch_idx, batch)| {
                let db = db.clone();
                let batch = batch.to_vec();

                async move {
                    let result = Self::save_outline_batch(&db, batch).await;

                    match &result {
                        Ok(report) => info!(
                            "completed outline batch {}: {} inserted, {} skipped",
                            batch_idx + 1,
                            report.inserted,
                            report.skipped
                        ),
                        Err(err) => error!("error in outline batch {}: {err}", batch_idx + 1),
                    }

                    result
                }
            });

        let reports = try_join_all(batch_futures).await?;

        Ok(reports
            .into_iter()
            .fold(InsertReport::default(), |acc, report| InsertReport {
                inserted: acc.inserted + report.inserted,
                skipped: acc.skipped + report.skipped,
            }))
    }

    async fn save_outline_batch(
        db: &DatabaseConnection,
        records: Vec<OutlineRecord>,
    ) -> Result<InsertReport, DbErr> {
        let txn = db.begin().await?;

        let mut report = InsertReport::default();

        // Collect nested rows for bulk insertion
        let mut all_instructors = Vec::new();
        let mut all_schedules = Vec::new();
        let mut all_grades = Vec::new();
        let mut all_texts = Vec::new();

        for record in records {
            let outline_id = Uuid::new_v4();

            let outcome = Self::insert_outline(&txn, outline_id, &record).await?;
            if outcome.inserted == 0 {
                // This section already has an outline
                report.skipped += 1;
                continue;
            }
            report.inserted += 1;

            let data = record.data;

            for instructor in data.instructors {
                // An instructor entry without a name carries no information
                let Some(name) = instructor.name else { continue };

                all_instructors.push(outline_instructor::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    outline_id: Set(outline_id),
                    name: Set(name),
                    email: Set(instructor.email),
                    role_code: Set(instructor.role_code),
                });
            }

            for entry in data.course_schedule {
                all_schedules.push(outline_schedule::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    outline_id: Set(outline_id),
                    section_code: Set(entry.section_code),
                    days: Set(entry.days),
                    start_time: Set(entry.start_time),
                    end_time: Set(entry.end_time),
                    start_date: Set(entry.start_date),
                    end_date: Set(entry.end_date),
                    campus: Set(entry.campus),
                    is_exam: Set(entry.is_exam),
                });
            }

            for grade in data.grades {
                all_grades.push(outline_grade::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    outline_id: Set(outline_id),
                    description: Set(grade.description),
                    weight: Set(grade.weight),
                });
            }

            for text in data.required_texts {
                all_texts.push(outline_text::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    outline_id: Set(outline_id),
                    details: Set(text.details),
                });
            }
        }

        // Bulk insert everything at once
        if !all_instructors.is_empty() {
            outline_instructor::Entity::insert_many(all_instructors)
                .exec_without_returning(&txn)
                .await?;
        }
        if !all_schedules.is_empty() {
            outline_schedule::Entity::insert_many(all_schedules)
                .exec_without_returning(&txn)
                .await?;
        }
        if !all_grades.is_empty() {
            outline_grade::Entity::insert_many(all_grades)
                .exec_without_returning(&txn)
                .await?;
        }
        if !all_texts.is_empty() {
            outline_text::Entity::insert_many(all_texts)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(report)
    }

    async fn insert_outline(
        txn: &DatabaseTransaction,
        outline_id: Uuid,
        record: &OutlineRecord,
    ) -> Result<InsertReport, DbErr> {
        let info = record.data.info.clone().unwrap_or_default();

        let model = course_outline::ActiveModel {
            id: Set(outline_id),
            section_id: Set(record.section_id),
            title: Set(info.title),
            units: Set(info.units),
            description: Set(info.description),
            prerequisites: Set(info.prerequisites),
            corequisites: Set(info.corequisites),
            delivery_method: Set(info.delivery_method),
            designation: Set(info.designation),
            notes: Set(info.notes),
        };

        insert_if_absent(txn, vec![model]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{course_number, department, section, term, year};
    use migration::{Migrator, MigratorTrait};
    use models::outline::{GradeComponent, OutlineInfo, OutlineInstructor, ScheduleEntry};
    use sea_orm::{ConnectOptions, Database, PaginatorTrait};

    async fn setup_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    /// Seeds a full year → term → department → course number → section
    /// chain and returns the section id
    async fn seed_section(db: &DatabaseConnection) -> Uuid {
        let year_id = Uuid::new_v4();
        year::Entity::insert(year::ActiveModel {
            id: Set(year_id),
            value: Set("2024".to_owned()),
        })
        .exec_without_returning(db)
        .await
        .unwrap();

        let term_id = Uuid::new_v4();
        term::Entity::insert(term::ActiveModel {
            id: Set(term_id),
            value: Set("fall".to_owned()),
            year_id: Set(year_id),
            year_value: Set("2024".to_owned()),
        })
        .exec_without_returning(db)
        .await
        .unwrap();

        let department_id = Uuid::new_v4();
        department::Entity::insert(department::ActiveModel {
            id: Set(department_id),
            value: Set("cmpt".to_owned()),
            name: Set(Some("Computing Science".to_owned())),
            term_id: Set(term_id),
            year_value: Set("2024".to_owned()),
            term_value: Set("fall".to_owned()),
        })
        .exec_without_returning(db)
        .await
        .unwrap();

        let course_number_id = Uuid::new_v4();
        course_number::Entity::insert(course_number::ActiveModel {
            id: Set(course_number_id),
            value: Set("105".to_owned()),
            title: Set(Some("Social Issues".to_owned())),
            department_id: Set(department_id),
            year_value: Set("2024".to_owned()),
            term_value: Set("fall".to_owned()),
            department_value: Set("cmpt".to_owned()),
        })
        .exec_without_returning(db)
        .await
        .unwrap();

        let section_id = Uuid::new_v4();
        section::Entity::insert(section::ActiveModel {
            id: Set(section_id),
            value: Set("d100".to_owned()),
            class_type: Set(Some("e".to_owned())),
            section_code: Set(Some("LEC".to_owned())),
            associated_class: Set(Some("1".to_owned())),
            course_number_id: Set(course_number_id),
            year_value: Set("2024".to_owned()),
            term_value: Set("fall".to_owned()),
            department_value: Set("cmpt".to_owned()),
            course_value: Set("105".to_owned()),
        })
        .exec_without_returning(db)
        .await
        .unwrap();

        section_id
    }

    fn sample_outline() -> OutlineData {
        OutlineData {
            info: Some(OutlineInfo {
                title: Some("Social Issues and Communication Technology".to_owned()),
                units: Some("3".to_owned()),
                ..Default::default()
            }),
            instructors: vec![
                OutlineInstructor {
                    name: Some("Jane Doe".to_owned()),
                    email: Some("jdoe@example.edu".to_owned()),
                    role_code: Some("PI".to_owned()),
                },
                // Nameless entries are dropped
                OutlineInstructor::default(),
            ],
            course_schedule: vec![ScheduleEntry {
                section_code: Some("LEC".to_owned()),
                days: Some("Mo, We, Fr".to_owned()),
                ..Default::default()
            }],
            grades: vec![
                GradeComponent {
                    description: Some("Final exam".to_owned()),
                    weight: Some("40".to_owned()),
                },
                GradeComponent {
                    description: Some("Assignments".to_owned()),
                    weight: Some("60".to_owned()),
                },
            ],
            required_texts: vec![],
        }
    }

    #[tokio::test]
    async fn test_save_outline_expands_nested_collections() {
        let db = setup_db().await;
        let section_id = seed_section(&db).await;

        let report = OutlineService::save_outlines(
            &db,
            vec![OutlineRecord {
                section_id,
                data: sample_outline(),
            }],
        )
        .await
        .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 0);

        let outline = course_outline::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(outline.section_id, section_id);
        assert_eq!(outline.units.as_deref(), Some("3"));

        assert_eq!(
            outline_instructor::Entity::find().count(&db).await.unwrap(),
            1
        );
        assert_eq!(
            outline_schedule::Entity::find().count(&db).await.unwrap(),
            1
        );
        assert_eq!(outline_grade::Entity::find().count(&db).await.unwrap(), 2);
        assert_eq!(outline_text::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_refetched_outline_is_skipped() {
        let db = setup_db().await;
        let section_id = seed_section(&db).await;

        let record = OutlineRecord {
            section_id,
            data: sample_outline(),
        };

        OutlineService::save_outlines(&db, vec![record.clone()])
            .await
            .unwrap();
        let second = OutlineService::save_outlines(&db, vec![record]).await.unwrap();

        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 1);

        // One outline per section, nested rows not duplicated
        assert_eq!(
            course_outline::Entity::find().count(&db).await.unwrap(),
            1
        );
        assert_eq!(
            outline_instructor::Entity::find().count(&db).await.unwrap(),
            1
        );
        assert_eq!(outline_grade::Entity::find().count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_outline_without_info_payload() {
        let db = setup_db().await;
        let section_id = seed_section(&db).await;

        let report = OutlineService::save_outlines(
            &db,
            vec![OutlineRecord {
                section_id,
                data: OutlineData::default(),
            }],
        )
        .await
        .unwrap();

        assert_eq!(report.inserted, 1);

        let outline = course_outline::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(outline.title, None);
        assert_eq!(outline.notes, None);
    }
}
