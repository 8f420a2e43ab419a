use sea_orm::entity::prelude::*;

/// A piece of equipment assigned to a user and one of the worksites.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    /// Kept as text, so ordering on this column is lexicographic ("10" < "9").
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub working_hour: String,
    pub user_id: i32,
    pub worksite_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::worksite::Entity",
        from = "Column::WorksiteId",
        to = "super::worksite::Column::Id",
        on_delete = "Cascade"
    )]
    Worksite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::worksite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worksite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
