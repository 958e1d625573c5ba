use crate::entities::{course_number, course_outline, department, section, term, year};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, sea_query::OnConflict};

/// Counts reported by an [`insert_if_absent`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertReport {
    pub inserted: u64,
    pub skipped: u64,
}

/// The natural-key columns of a catalog entity.
///
/// Rows are never updated in place; re-inserting the same natural key is how
/// a re-run detects "already scraped". Each entity names the columns that
/// scope it under its parent so [`insert_if_absent`] can suppress duplicates
/// without inspecting store-specific error codes.
pub trait NaturalKey: EntityTrait {
    fn natural_key() -> OnConflict;
}

impl NaturalKey for year::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::column(year::Column::Value)
    }
}

impl NaturalKey for term::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::columns([term::Column::YearId, term::Column::Value])
    }
}

impl NaturalKey for department::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::columns([department::Column::TermId, department::Column::Value])
    }
}

impl NaturalKey for course_number::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::columns([
            course_number::Column::DepartmentId,
            course_number::Column::Value,
        ])
    }
}

impl NaturalKey for section::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::columns([section::Column::CourseNumberId, section::Column::Value])
    }
}

impl NaturalKey for course_outline::Entity {
    fn natural_key() -> OnConflict {
        OnConflict::column(course_outline::Column::SectionId)
    }
}

/// Inserts a batch of rows, skipping any whose natural key already exists.
///
/// # Arguments
/// * `db` - The database connection
/// * `models` - The rows to insert; may be empty
///
/// # Returns
/// An [`InsertReport`] with the number of rows actually inserted and the
/// number skipped as duplicates
pub async fn insert_if_absent<A, C>(db: &C, models: Vec<A>) -> Result<InsertReport, DbErr>
where
    A: ActiveModelTrait,
    A::Entity: NaturalKey,
    <A::Entity as EntityTrait>::Model: sea_orm::IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(InsertReport::default());
    }

    let total = models.len() as u64;

    let mut conflict = <A::Entity as NaturalKey>::natural_key();
    conflict.do_nothing();

    let inserted = match <A::Entity as EntityTrait>::insert_many(models)
        .on_conflict(conflict)
        .exec_without_returning(db)
        .await
    {
        Ok(count) => count,
        // Every row in the batch was a duplicate
        Err(DbErr::RecordNotInserted) => 0,
        Err(err) => return Err(err),
    };

    Ok(InsertReport {
        inserted,
        skipped: total - inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, PaginatorTrait,
    };
    use uuid::Uuid;

    async fn setup_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn year_model(value: &str) -> year::ActiveModel {
        year::ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(value.to_owned()),
        }
    }

    #[tokio::test]
    async fn test_insert_if_absent_dedups_on_natural_key() {
        let db = setup_db().await;

        let first = insert_if_absent(&db, vec![year_model("2024"), year_model("2025")])
            .await
            .unwrap();
        assert_eq!(
            first,
            InsertReport {
                inserted: 2,
                skipped: 0
            }
        );

        // Re-running with the same natural keys plus one new year
        let second = insert_if_absent(
            &db,
            vec![year_model("2024"), year_model("2025"), year_model("2026")],
        )
        .await
        .unwrap();
        assert_eq!(
            second,
            InsertReport {
                inserted: 1,
                skipped: 2
            }
        );

        assert_eq!(year::Entity::find().count(&db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_if_absent_all_duplicates() {
        let db = setup_db().await;

        insert_if_absent(&db, vec![year_model("2024")]).await.unwrap();
        let report = insert_if_absent(&db, vec![year_model("2024")]).await.unwrap();

        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(year::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_if_absent_empty_batch() {
        let db = setup_db().await;

        let report = insert_if_absent(&db, Vec::<year::ActiveModel>::new())
            .await
            .unwrap();
        assert_eq!(report, InsertReport::default());
    }

    #[tokio::test]
    async fn test_term_natural_key_scoped_by_year() {
        let db = setup_db().await;

        insert_if_absent(&db, vec![year_model("2024"), year_model("2025")])
            .await
            .unwrap();
        let years = year::Entity::find().all(&db).await.unwrap();

        // The same term value under two different years is two distinct rows
        let terms: Vec<term::ActiveModel> = years
            .iter()
            .map(|y| term::ActiveModel {
                id: Set(Uuid::new_v4()),
                value: Set("fall".to_owned()),
                year_id: Set(y.id),
                year_value: Set(y.value.clone()),
            })
            .collect();

        let report = insert_if_absent(&db, terms).await.unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 0);
    }
}
