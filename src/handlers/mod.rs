// Handlers module
pub mod health;
pub mod storages;
