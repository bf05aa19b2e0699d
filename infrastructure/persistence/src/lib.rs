pub mod db;
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod key_value {
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
