use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::repository::RecipeRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::RecipeEntity;

const COLUMNS: &str = "id, user_id, title, image, ready_in_minutes, servings, summary, ingredients, steps, created_at, updated_at";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_id(&self, id: &str) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {COLUMNS} FROM recipes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self, owner: Option<&UserId>) -> Result<Vec<Recipe>, RepositoryError> {
        let entities = match owner {
            Some(owner) => {
                sqlx::query_as::<_, RecipeEntity>(&format!(
                    "SELECT {COLUMNS} FROM recipes WHERE user_id = $1 ORDER BY created_at DESC"
                ))
                .bind(owner.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, RecipeEntity>(&format!(
                    "SELECT {COLUMNS} FROM recipes ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        // Only authored recipes are persisted here; catalog recipes never
        // enter the local store.
        let owner = recipe.owner().ok_or(RepositoryError::Persistence)?;
        let ingredients: Vec<String> =
            recipe.ingredients.iter().map(|i| i.text.clone()).collect();
        let steps: Vec<String> = recipe.steps.iter().map(|s| s.text.clone()).collect();
        let now = Utc::now();

        sqlx::query(
            r#"INSERT INTO recipes (id, user_id, title, image, ready_in_minutes, servings, summary, ingredients, steps, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                image = EXCLUDED.image,
                ready_in_minutes = EXCLUDED.ready_in_minutes,
                servings = EXCLUDED.servings,
                ingredients = EXCLUDED.ingredients,
                steps = EXCLUDED.steps,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(&recipe.id)
        .bind(owner.as_str())
        .bind(&recipe.title)
        .bind(&recipe.image)
        .bind(recipe.ready_in_minutes as i32)
        .bind(recipe.servings as i32)
        .bind(None::<String>)
        .bind(Json(ingredients))
        .bind(Json(steps))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
