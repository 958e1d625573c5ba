use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outline_texts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub outline_id: Uuid,
    pub details: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_outline::Entity",
        from = "Column::OutlineId",
        to = "super::course_outline::Column::Id"
    )]
    CourseOutline,
}

impl Related<super::course_outline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOutline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
