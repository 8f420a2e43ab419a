//! Root for the SeaORM entity modules: users own worksites, and equipment
//! belongs to both a user and a worksite.

pub mod equipment;
pub mod user;
pub mod worksite;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::equipment::Entity as Equipment;
    pub use super::user::Entity as User;
    pub use super::worksite::Entity as Worksite;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn insert_user(db: &DatabaseConnection, name: &str) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            name: Set(name.to_string()),
            email: Set(format!("{}@example.com", name)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let owner = insert_user(&db, "owner").await?;
        let site = worksite::ActiveModel {
            name: Set("North quarry".to_string()),
            user_id: Set(owner.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        for (name, hours) in [("excavator", "120"), ("loader", "45"), ("crane", "9")] {
            equipment::ActiveModel {
                name: Set(name.to_string()),
                working_hour: Set(hours.to_string()),
                user_id: Set(owner.id),
                worksite_id: Set(site.id),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        let sites = owner.find_related(Worksite).all(&db).await?;
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name, "North quarry");

        let on_site = site.find_related(Equipment).all(&db).await?;
        assert_eq!(on_site.len(), 3);

        // Text column: "120" < "45" < "9".
        let ordered: Vec<String> = Equipment::find()
            .filter(equipment::Column::UserId.eq(owner.id))
            .order_by_asc(equipment::Column::WorkingHour)
            .all(&db)
            .await?
            .into_iter()
            .map(|e| e.working_hour)
            .collect();
        assert_eq!(ordered, vec!["120", "45", "9"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let owner = insert_user(&db, "owner").await?;
        let other = insert_user(&db, "other").await?;

        let site = worksite::ActiveModel {
            name: Set("Depot".to_string()),
            user_id: Set(owner.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        let other_site = worksite::ActiveModel {
            name: Set("Yard".to_string()),
            user_id: Set(other.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        equipment::ActiveModel {
            name: Set("drill".to_string()),
            working_hour: Set("2".to_string()),
            user_id: Set(owner.id),
            worksite_id: Set(site.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        equipment::ActiveModel {
            name: Set("saw".to_string()),
            working_hour: Set("4".to_string()),
            user_id: Set(other.id),
            worksite_id: Set(other_site.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        User::delete_by_id(owner.id).exec(&db).await?;

        assert_eq!(Worksite::find().count(&db).await?, 1);
        assert_eq!(Equipment::find().count(&db).await?, 1);
        let remaining = Equipment::find().one(&db).await?.expect("equipment survives");
        assert_eq!(remaining.user_id, other.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_worksite_requires_existing_user() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let result = worksite::ActiveModel {
            name: Set("Orphan".to_string()),
            user_id: Set(42),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(result.is_err());
        assert_eq!(Worksite::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_equipment_requires_existing_worksite() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let owner = insert_user(&db, "owner").await?;

        let result = equipment::ActiveModel {
            name: Set("lift".to_string()),
            working_hour: Set("1".to_string()),
            user_id: Set(owner.id),
            worksite_id: Set(999),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(result.is_err());

        Ok(())
    }
}
