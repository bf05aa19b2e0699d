use std::sync::Arc;

use logger::TracingLogger;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::key_value::repository::KeyValueStorePostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;

use catalog::client::CatalogClient;
use catalog::remote_catalog::RemoteCatalogHttp;

use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::get_cookbook::GetCookbookUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::get_local::GetLocalRecipesUseCaseImpl;
use business::application::recipe::search::SearchRecipesUseCaseImpl;
use business::application::recipe::trending::GetTrendingRecipesUseCaseImpl;
use business::application::recipe::update::UpdateRecipeUseCaseImpl;
use business::application::shopping_list::clear_checked::ClearCheckedItemsUseCaseImpl;
use business::application::shopping_list::register_recipe::RegisterRecipeUseCaseImpl;
use business::application::shopping_list::remove_recipe::RemoveRecipeFromListUseCaseImpl;
use business::application::shopping_list::toggle::ToggleIngredientUseCaseImpl;
use business::application::shopping_list::view_full::ViewFullShoppingListUseCaseImpl;
use business::application::shopping_list::view_outstanding::ViewOutstandingItemsUseCaseImpl;
use business::domain::shopping_list::aggregator::ShoppingListAggregator;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub cookbook_api: crate::api::cookbook::routes::CookbookApi,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool.clone()));
        let key_value_store = Arc::new(KeyValueStorePostgres::new(pool));
        let shopping_list = Arc::new(ShoppingListAggregator::new(key_value_store));

        let catalog_config = CatalogConfig::from_env();
        let mut catalog_client = CatalogClient::new(catalog_config.api_key);
        if let Some(base_url) = catalog_config.base_url {
            catalog_client = catalog_client.with_base_url(base_url);
        }
        let remote_catalog = Arc::new(RemoteCatalogHttp::new(catalog_client));

        // Recipe use cases
        let search_use_case = Arc::new(SearchRecipesUseCaseImpl {
            catalog: remote_catalog.clone(),
            logger: logger.clone(),
        });
        let trending_use_case = Arc::new(GetTrendingRecipesUseCaseImpl {
            catalog: remote_catalog.clone(),
            logger: logger.clone(),
        });
        let get_local_use_case = Arc::new(GetLocalRecipesUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository.clone(),
            catalog: remote_catalog,
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            favorite_repository: favorite_repository.clone(),
            shopping_list: shopping_list.clone(),
            logger: logger.clone(),
        });

        // Favorite use cases
        let get_cookbook_use_case = Arc::new(GetCookbookUseCaseImpl {
            recipe_repository,
            favorite_repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let add_favorite_use_case = Arc::new(AddFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let remove_favorite_use_case = Arc::new(RemoveFavoriteUseCaseImpl {
            repository: favorite_repository,
            logger: logger.clone(),
        });

        // Shopping list use cases
        let view_full_use_case = Arc::new(ViewFullShoppingListUseCaseImpl {
            aggregator: shopping_list.clone(),
            logger: logger.clone(),
        });
        let view_outstanding_use_case = Arc::new(ViewOutstandingItemsUseCaseImpl {
            aggregator: shopping_list.clone(),
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterRecipeUseCaseImpl {
            aggregator: shopping_list.clone(),
            logger: logger.clone(),
        });
        let toggle_use_case = Arc::new(ToggleIngredientUseCaseImpl {
            aggregator: shopping_list.clone(),
            logger: logger.clone(),
        });
        let clear_checked_use_case = Arc::new(ClearCheckedItemsUseCaseImpl {
            aggregator: shopping_list.clone(),
            logger: logger.clone(),
        });
        let remove_recipe_use_case = Arc::new(RemoveRecipeFromListUseCaseImpl {
            aggregator: shopping_list,
            logger,
        });

        let recipe_api = crate::api::recipe::routes::RecipeApi::new(
            search_use_case,
            trending_use_case,
            get_local_use_case,
            get_by_id_use_case.clone(),
            create_use_case,
            update_use_case,
            delete_use_case,
        );

        let cookbook_api = crate::api::cookbook::routes::CookbookApi::new(
            get_cookbook_use_case,
            add_favorite_use_case,
            remove_favorite_use_case,
        );

        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            view_full_use_case,
            view_outstanding_use_case,
            register_use_case,
            toggle_use_case,
            clear_checked_use_case,
            remove_recipe_use_case,
            get_by_id_use_case,
        );

        Self {
            health_api,
            recipe_api,
            cookbook_api,
            shopping_list_api,
        }
    }
}
