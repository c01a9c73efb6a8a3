pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod soft_delete;
        pub mod update;
        pub mod validate;

        #[cfg(test)]
        pub mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod soft_delete;
            pub mod update;
            pub mod validate;
        }
    }
    pub mod shared {
        pub mod pagination;
        pub mod validation;
    }
}
