pub mod application {
    pub mod favorite {
        pub mod add;
        pub mod get_cookbook;
        pub mod remove;
    }
    pub mod recipe {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_local;
        pub mod search;
        pub mod trending;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod clear_checked;
        pub mod register_recipe;
        pub mod remove_recipe;
        pub mod toggle;
        pub mod view_full;
        pub mod view_outstanding;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod recipe {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_local;
            pub mod search;
            pub mod trending;
            pub mod update;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod reconcile;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_cookbook;
            pub mod remove;
        }
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod check_state;
        pub mod errors;
        pub mod kv;
        pub mod model;
        pub mod use_cases {
            pub mod clear_checked;
            pub mod register_recipe;
            pub mod remove_recipe;
            pub mod toggle;
            pub mod view_full;
            pub mod view_outstanding;
        }
    }
}
