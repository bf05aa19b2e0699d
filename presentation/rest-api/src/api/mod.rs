pub mod error;
pub mod tags;

pub mod cookbook {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_list {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
