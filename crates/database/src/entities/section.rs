use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub value: String, // e.g. "d100"
    pub class_type: Option<String>,
    pub section_code: Option<String>, // e.g. "LEC"
    pub associated_class: Option<String>,
    pub course_number_id: Uuid,
    pub year_value: String,
    pub term_value: String,
    pub department_value: String,
    pub course_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_number::Entity",
        from = "Column::CourseNumberId",
        to = "super::course_number::Column::Id"
    )]
    CourseNumber,
    #[sea_orm(has_one = "super::course_outline::Entity")]
    CourseOutline,
}

impl Related<super::course_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseNumber.def()
    }
}

impl Related<super::course_outline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOutline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
