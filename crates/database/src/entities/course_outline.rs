use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_outlines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section_id: Uuid, // one outline per section
    pub title: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
    pub prerequisites: Option<String>,
    pub corequisites: Option<String>,
    pub delivery_method: Option<String>,
    pub designation: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id"
    )]
    Section,
    #[sea_orm(has_many = "super::outline_instructor::Entity")]
    Instructors,
    #[sea_orm(has_many = "super::outline_schedule::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::outline_grade::Entity")]
    Grades,
    #[sea_orm(has_many = "super::outline_text::Entity")]
    RequiredTexts,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::outline_instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructors.def()
    }
}

impl Related<super::outline_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::outline_grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl Related<super::outline_text::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequiredTexts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
