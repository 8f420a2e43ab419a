use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create user table
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Name, 50))
                    .col(string_len(User::Email, 50))
                    .to_owned(),
            )
            .await?;

        // Create worksite table
        manager
            .create_table(
                Table::create()
                    .table(Worksite::Table)
                    .if_not_exists()
                    .col(pk_auto(Worksite::Id))
                    .col(string_len(Worksite::Name, 50))
                    .col(integer(Worksite::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worksite_user")
                            .from(Worksite::Table, Worksite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create equipment table
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string_len(Equipment::Name, 50))
                    .col(string_len(Equipment::WorkingHour, 200))
                    .col(integer(Equipment::UserId))
                    .col(integer(Equipment::WorksiteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_user")
                            .from(Equipment::Table, Equipment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_worksite")
                            .from(Equipment::Table, Equipment::WorksiteId)
                            .to(Worksite::Table, Worksite::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Worksite::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Name,
    Email,
}

#[derive(DeriveIden)]
enum Worksite {
    Table,
    Id,
    Name,
    UserId,
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    WorkingHour,
    UserId,
    WorksiteId,
}
