use crate::entity_iden::EntityIden;
use model::entities::equipment;
use model::entities::prelude::Equipment;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEX_NAME: &str = "idx_equipment_user_working_hour";

/// Backs the per-user listing ordered by working hours.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Equipment::table())
                    .col(Equipment::column(equipment::Column::UserId))
                    .col(Equipment::column(equipment::Column::WorkingHour))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(Equipment::table())
                    .to_owned(),
            )
            .await
    }
}
