pub mod health;
pub mod storages;
