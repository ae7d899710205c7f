pub mod admin;
pub mod forge;
pub mod initdb;
