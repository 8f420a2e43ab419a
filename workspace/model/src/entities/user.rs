use sea_orm::entity::prelude::*;

/// A user owning worksites and equipment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Worksites are deleted together with their user.
    #[sea_orm(has_many = "super::worksite::Entity")]
    Worksite,
    /// Equipment is deleted together with its user.
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
}

impl Related<super::worksite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worksite.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
