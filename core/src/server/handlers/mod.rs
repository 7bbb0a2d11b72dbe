pub mod classify;
pub mod health;
pub mod items;
pub mod taxonomy;
