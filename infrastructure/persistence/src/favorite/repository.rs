use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FavoriteEntity;

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let entities = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT id, user_id, recipe_id, title, image, created_at FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_recipe(
        &self,
        user_id: &UserId,
        recipe_id: &str,
    ) -> Result<Option<Favorite>, RepositoryError> {
        let entity = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT id, user_id, recipe_id, title, image, created_at FROM favorites WHERE user_id = $1 AND recipe_id = $2",
        )
        .bind(user_id.as_str())
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO favorites (id, user_id, recipe_id, title, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                image = EXCLUDED.image"#,
        )
        .bind(favorite.id)
        .bind(favorite.user_id.as_str())
        .bind(&favorite.recipe_id)
        .bind(&favorite.title)
        .bind(&favorite.image)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_by_recipe(&self, recipe_id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
