use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub value: String, // e.g. "cmpt"
    pub name: Option<String>,
    pub term_id: Uuid,
    pub year_value: String,
    pub term_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::term::Entity",
        from = "Column::TermId",
        to = "super::term::Column::Id"
    )]
    Term,
    #[sea_orm(has_many = "super::course_number::Entity")]
    CourseNumbers,
}

impl Related<super::term::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::course_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseNumbers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
