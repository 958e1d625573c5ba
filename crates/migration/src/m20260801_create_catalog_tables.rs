use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create years table
        manager
            .create_table(
                Table::create()
                    .table(Years::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Years::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Years::Value).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::Value).string().not_null())
                    .col(ColumnDef::new(Terms::YearId).uuid().not_null())
                    .col(ColumnDef::new(Terms::YearValue).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-year_id")
                            .from(Terms::Table, Terms::YearId)
                            .to(Years::Table, Years::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Value).string().not_null())
                    .col(ColumnDef::new(Departments::Name).string())
                    .col(ColumnDef::new(Departments::TermId).uuid().not_null())
                    .col(ColumnDef::new(Departments::YearValue).string().not_null())
                    .col(ColumnDef::new(Departments::TermValue).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-departments-term_id")
                            .from(Departments::Table, Departments::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_numbers table
        manager
            .create_table(
                Table::create()
                    .table(CourseNumbers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseNumbers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseNumbers::Value).string().not_null())
                    .col(ColumnDef::new(CourseNumbers::Title).string())
                    .col(
                        ColumnDef::new(CourseNumbers::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseNumbers::YearValue).string().not_null())
                    .col(ColumnDef::new(CourseNumbers::TermValue).string().not_null())
                    .col(
                        ColumnDef::new(CourseNumbers::DepartmentValue)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_numbers-department_id")
                            .from(CourseNumbers::Table, CourseNumbers::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sections::Value).string().not_null())
                    .col(ColumnDef::new(Sections::ClassType).string())
                    .col(ColumnDef::new(Sections::SectionCode).string())
                    .col(ColumnDef::new(Sections::AssociatedClass).string())
                    .col(
                        ColumnDef::new(Sections::CourseNumberId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sections::YearValue).string().not_null())
                    .col(ColumnDef::new(Sections::TermValue).string().not_null())
                    .col(
                        ColumnDef::new(Sections::DepartmentValue)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sections::CourseValue).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course_number_id")
                            .from(Sections::Table, Sections::CourseNumberId)
                            .to(CourseNumbers::Table, CourseNumbers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_outlines table
        manager
            .create_table(
                Table::create()
                    .table(CourseOutlines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseOutlines::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseOutlines::SectionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseOutlines::Title).text())
                    .col(ColumnDef::new(CourseOutlines::Units).string())
                    .col(ColumnDef::new(CourseOutlines::Description).text())
                    .col(ColumnDef::new(CourseOutlines::Prerequisites).text())
                    .col(ColumnDef::new(CourseOutlines::Corequisites).text())
                    .col(ColumnDef::new(CourseOutlines::DeliveryMethod).string())
                    .col(ColumnDef::new(CourseOutlines::Designation).string())
                    .col(ColumnDef::new(CourseOutlines::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_outlines-section_id")
                            .from(CourseOutlines::Table, CourseOutlines::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create outline_instructors table
        manager
            .create_table(
                Table::create()
                    .table(OutlineInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutlineInstructors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OutlineInstructors::OutlineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OutlineInstructors::Name)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutlineInstructors::Email).string())
                    .col(ColumnDef::new(OutlineInstructors::RoleCode).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-outline_instructors-outline_id")
                            .from(OutlineInstructors::Table, OutlineInstructors::OutlineId)
                            .to(CourseOutlines::Table, CourseOutlines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create outline_schedules table
        manager
            .create_table(
                Table::create()
                    .table(OutlineSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutlineSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OutlineSchedules::OutlineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutlineSchedules::SectionCode).string())
                    .col(ColumnDef::new(OutlineSchedules::Days).string())
                    .col(ColumnDef::new(OutlineSchedules::StartTime).string())
                    .col(ColumnDef::new(OutlineSchedules::EndTime).string())
                    .col(ColumnDef::new(OutlineSchedules::StartDate).string())
                    .col(ColumnDef::new(OutlineSchedules::EndDate).string())
                    .col(ColumnDef::new(OutlineSchedules::Campus).string())
                    .col(ColumnDef::new(OutlineSchedules::IsExam).boolean())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-outline_schedules-outline_id")
                            .from(OutlineSchedules::Table, OutlineSchedules::OutlineId)
                            .to(CourseOutlines::Table, CourseOutlines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create outline_grades table
        manager
            .create_table(
                Table::create()
                    .table(OutlineGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutlineGrades::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OutlineGrades::OutlineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutlineGrades::Description).text())
                    .col(ColumnDef::new(OutlineGrades::Weight).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-outline_grades-outline_id")
                            .from(OutlineGrades::Table, OutlineGrades::OutlineId)
                            .to(CourseOutlines::Table, CourseOutlines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create outline_texts table
        manager
            .create_table(
                Table::create()
                    .table(OutlineTexts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutlineTexts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OutlineTexts::OutlineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutlineTexts::Details).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-outline_texts-outline_id")
                            .from(OutlineTexts::Table, OutlineTexts::OutlineId)
                            .to(CourseOutlines::Table, CourseOutlines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(OutlineTexts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OutlineGrades::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OutlineSchedules::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OutlineInstructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseOutlines::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseNumbers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Years::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Years {
    Table,
    Id,
    Value,
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    Value,
    YearId,
    YearValue,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Value,
    Name,
    TermId,
    YearValue,
    TermValue,
}

#[derive(Iden)]
enum CourseNumbers {
    Table,
    Id,
    Value,
    Title,
    DepartmentId,
    YearValue,
    TermValue,
    DepartmentValue,
}

#[derive(Iden)]
enum Sections {
    Table,
    Id,
    Value,
    ClassType,
    SectionCode,
    AssociatedClass,
    CourseNumberId,
    YearValue,
    TermValue,
    DepartmentValue,
    CourseValue,
}

#[derive(Iden)]
enum CourseOutlines {
    Table,
    Id,
    SectionId,
    Title,
    Units,
    Description,
    Prerequisites,
    Corequisites,
    DeliveryMethod,
    Designation,
    Notes,
}

#[derive(Iden)]
enum OutlineInstructors {
    Table,
    Id,
    OutlineId,
    Name,
    Email,
    RoleCode,
}

#[derive(Iden)]
enum OutlineSchedules {
    Table,
    Id,
    OutlineId,
    SectionCode,
    Days,
    StartTime,
    EndTime,
    StartDate,
    EndDate,
    Campus,
    IsExam,
}

#[derive(Iden)]
enum OutlineGrades {
    Table,
    Id,
    OutlineId,
    Description,
    Weight,
}

#[derive(Iden)]
enum OutlineTexts {
    Table,
    Id,
    OutlineId,
    Details,
}
