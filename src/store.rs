use model::entities::{equipment, prelude::*, user, worksite};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use thiserror::Error;
use tracing::{debug, info, instrument, trace, warn};

/// Failures surfaced by [`Store`] operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The owning user looked up before an insert does not exist.
    #[error("user does not exist!")]
    MissingUser,

    /// The worksite looked up before an equipment insert does not exist.
    #[error("worksite does not exist!")]
    MissingWorksite,

    /// Anything the database rejected, including foreign keys that were not
    /// checked up front.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Handle over the relational store. Cloned into every request through the
/// axum state; parent-existence checks happen here rather than in handlers.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn user_exists(&self, user_id: i32) -> Result<bool> {
        trace!("Looking up user with ID: {}", user_id);
        let found = User::find_by_id(user_id).one(&self.db).await?.is_some();
        debug!("User {} exists: {}", user_id, found);
        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: String, email: String) -> Result<user::Model> {
        let user = user::ActiveModel {
            name: Set(name),
            email: Set(email),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("User created with ID: {}", user.id);
        Ok(user)
    }

    /// Deletes a user. The schema cascades the delete to the user's
    /// worksites and equipment.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i32) -> Result<()> {
        let result = User::delete_by_id(user_id).exec(&self.db).await?;
        debug!("Delete affected {} rows", result.rows_affected);

        if result.rows_affected == 0 {
            warn!("User with ID {} not found for deletion", user_id);
            return Err(StoreError::MissingUser);
        }

        info!("User with ID {} deleted", user_id);
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_worksite(&self, user_id: i32, name: String) -> Result<worksite::Model> {
        if !self.user_exists(user_id).await? {
            warn!("Refusing worksite for missing user {}", user_id);
            return Err(StoreError::MissingUser);
        }

        let worksite = worksite::ActiveModel {
            name: Set(name),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Worksite created with ID: {} for user {}", worksite.id, user_id);
        Ok(worksite)
    }

    /// Inserts equipment after checking its parents.
    ///
    /// The worksite id is looked up in the *user* table (see DESIGN.md). A
    /// worksite id that passes this check but names no worksite is rejected
    /// by the foreign key and reported as [`StoreError::Database`].
    #[instrument(skip(self))]
    pub async fn create_equipment(
        &self,
        user_id: i32,
        worksite_id: i32,
        name: String,
        working_hour: String,
    ) -> Result<equipment::Model> {
        if !self.user_exists(user_id).await? {
            warn!("Refusing equipment for missing user {}", user_id);
            return Err(StoreError::MissingUser);
        }

        if !self.user_exists(worksite_id).await? {
            warn!("Refusing equipment for missing worksite {}", worksite_id);
            return Err(StoreError::MissingWorksite);
        }

        let equipment = equipment::ActiveModel {
            name: Set(name),
            working_hour: Set(working_hour),
            user_id: Set(user_id),
            worksite_id: Set(worksite_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(
            "Equipment created with ID: {} on worksite {} for user {}",
            equipment.id, worksite_id, user_id
        );
        Ok(equipment)
    }

    #[instrument(skip(self))]
    pub async fn worksites_for_user(&self, user_id: i32) -> Result<Vec<worksite::Model>> {
        let worksites = Worksite::find()
            .filter(worksite::Column::UserId.eq(user_id))
            .order_by_asc(worksite::Column::Id)
            .all(&self.db)
            .await?;

        debug!("Found {} worksites for user {}", worksites.len(), user_id);
        Ok(worksites)
    }

    /// Equipment owned by `user_id` whose own primary key equals
    /// `equipment_id`. At most one row.
    #[instrument(skip(self))]
    pub async fn equipment_for_user(
        &self,
        user_id: i32,
        equipment_id: i32,
    ) -> Result<Vec<equipment::Model>> {
        let equipment = Equipment::find()
            .filter(equipment::Column::UserId.eq(user_id))
            .filter(equipment::Column::Id.eq(equipment_id))
            .all(&self.db)
            .await?;

        debug!("Found {} equipment rows for user {}", equipment.len(), user_id);
        Ok(equipment)
    }

    /// A user's equipment ordered ascending by `working_hour`. The column is
    /// text, so "10" sorts before "9". Ties keep insertion order.
    #[instrument(skip(self))]
    pub async fn equipment_by_working_hour(&self, user_id: i32) -> Result<Vec<equipment::Model>> {
        let equipment = Equipment::find()
            .filter(equipment::Column::UserId.eq(user_id))
            .order_by_asc(equipment::Column::WorkingHour)
            .order_by_asc(equipment::Column::Id)
            .all(&self.db)
            .await?;

        debug!("Found {} equipment rows for user {}", equipment.len(), user_id);
        Ok(equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::setup_test_db;

    async fn setup_store() -> Store {
        Store::new(setup_test_db().await)
    }

    #[tokio::test]
    async fn test_create_worksite_for_missing_user() {
        let store = setup_store().await;

        let result = store.create_worksite(7, "Quarry".to_string()).await;

        assert!(matches!(result, Err(StoreError::MissingUser)));
        assert!(store.worksites_for_user(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_worksite_and_list() {
        let store = setup_store().await;
        let user = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();

        let first = store.create_worksite(user.id, "North".to_string()).await.unwrap();
        let second = store.create_worksite(user.id, "South".to_string()).await.unwrap();

        let listed = store.worksites_for_user(user.id).await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_equipment_checks_worksite_id_against_users() {
        let store = setup_store().await;
        let user = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();
        let site = store.create_worksite(user.id, "North".to_string()).await.unwrap();

        // Worksite 1 and user 1 both exist: accepted.
        assert_eq!(site.id, user.id);
        let equipment = store
            .create_equipment(user.id, site.id, "drill".to_string(), "2".to_string())
            .await
            .unwrap();
        assert_eq!(equipment.worksite_id, site.id);

        // Worksite 2 exists but user 2 does not: rejected as a missing worksite.
        let second_site = store.create_worksite(user.id, "South".to_string()).await.unwrap();
        let result = store
            .create_equipment(user.id, second_site.id, "saw".to_string(), "3".to_string())
            .await;
        assert!(matches!(result, Err(StoreError::MissingWorksite)));
    }

    #[tokio::test]
    async fn test_create_equipment_unknown_worksite_hits_foreign_key() {
        let store = setup_store().await;
        let owner = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();
        let other = store
            .create_user("ben".to_string(), "ben@example.com".to_string())
            .await
            .unwrap();

        // `other.id` passes the user lookup but no worksite carries that id.
        let result = store
            .create_equipment(owner.id, other.id, "lift".to_string(), "1".to_string())
            .await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_equipment_by_working_hour_is_lexicographic() {
        let store = setup_store().await;
        let user = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();
        let site = store.create_worksite(user.id, "North".to_string()).await.unwrap();

        for hours in ["9", "10", "100", "2"] {
            store
                .create_equipment(user.id, site.id, format!("unit-{}", hours), hours.to_string())
                .await
                .unwrap();
        }

        let ordered: Vec<String> = store
            .equipment_by_working_hour(user.id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.working_hour)
            .collect();
        assert_eq!(ordered, vec!["10", "100", "2", "9"]);
    }

    #[tokio::test]
    async fn test_equipment_for_user_filters_by_equipment_id() {
        let store = setup_store().await;
        let user = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();
        let site = store.create_worksite(user.id, "North".to_string()).await.unwrap();
        let first = store
            .create_equipment(user.id, site.id, "drill".to_string(), "2".to_string())
            .await
            .unwrap();
        store
            .create_equipment(user.id, site.id, "saw".to_string(), "5".to_string())
            .await
            .unwrap();

        let found = store.equipment_for_user(user.id, first.id).await.unwrap();
        assert_eq!(found, vec![first]);
        assert!(store.equipment_for_user(user.id + 1, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_cascades_and_reports_missing() {
        let store = setup_store().await;
        let user = store
            .create_user("ana".to_string(), "ana@example.com".to_string())
            .await
            .unwrap();
        let site = store.create_worksite(user.id, "North".to_string()).await.unwrap();
        store
            .create_equipment(user.id, site.id, "drill".to_string(), "2".to_string())
            .await
            .unwrap();

        store.delete_user(user.id).await.unwrap();

        assert!(store.worksites_for_user(user.id).await.unwrap().is_empty());
        assert!(store.equipment_by_working_hour(user.id).await.unwrap().is_empty());
        assert!(matches!(
            store.delete_user(user.id).await,
            Err(StoreError::MissingUser)
        ));
    }
}
