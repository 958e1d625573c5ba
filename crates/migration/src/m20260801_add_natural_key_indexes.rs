use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unique natural keys; insertion relies on these for duplicate
        // suppression, so they are not optional tuning indexes
        manager
            .create_index(
                Index::create()
                    .name("uq_years_value")
                    .table(Years::Table)
                    .col(Years::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_terms_year_id_value")
                    .table(Terms::Table)
                    .col(Terms::YearId)
                    .col(Terms::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_departments_term_id_value")
                    .table(Departments::Table)
                    .col(Departments::TermId)
                    .col(Departments::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_numbers_department_id_value")
                    .table(CourseNumbers::Table)
                    .col(CourseNumbers::DepartmentId)
                    .col(CourseNumbers::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_sections_course_number_id_value")
                    .table(Sections::Table)
                    .col(Sections::CourseNumberId)
                    .col(Sections::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One outline per section
        manager
            .create_index(
                Index::create()
                    .name("uq_course_outlines_section_id")
                    .table(CourseOutlines::Table)
                    .col(CourseOutlines::SectionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indexes on the outline child tables for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_outline_instructors_outline_id")
                    .table(OutlineInstructors::Table)
                    .col(OutlineInstructors::OutlineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outline_schedules_outline_id")
                    .table(OutlineSchedules::Table)
                    .col(OutlineSchedules::OutlineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outline_grades_outline_id")
                    .table(OutlineGrades::Table)
                    .col(OutlineGrades::OutlineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outline_texts_outline_id")
                    .table(OutlineTexts::Table)
                    .col(OutlineTexts::OutlineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_outline_texts_outline_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_outline_grades_outline_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_outline_schedules_outline_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_outline_instructors_outline_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_course_outlines_section_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_sections_course_number_id_value")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_course_numbers_department_id_value")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_departments_term_id_value")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("uq_terms_year_id_value").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("uq_years_value").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Years {
    Table,
    Value,
}

#[derive(Iden)]
enum Terms {
    Table,
    YearId,
    Value,
}

#[derive(Iden)]
enum Departments {
    Table,
    TermId,
    Value,
}

#[derive(Iden)]
enum CourseNumbers {
    Table,
    DepartmentId,
    Value,
}

#[derive(Iden)]
enum Sections {
    Table,
    CourseNumberId,
    Value,
}

#[derive(Iden)]
enum CourseOutlines {
    Table,
    SectionId,
}

#[derive(Iden)]
enum OutlineInstructors {
    Table,
    OutlineId,
}

#[derive(Iden)]
enum OutlineSchedules {
    Table,
    OutlineId,
}

#[derive(Iden)]
enum OutlineGrades {
    Table,
    OutlineId,
}

#[derive(Iden)]
enum OutlineTexts {
    Table,
    OutlineId,
}
