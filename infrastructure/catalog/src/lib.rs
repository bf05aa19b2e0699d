pub mod client;
pub mod dto;
pub mod remote_catalog;
