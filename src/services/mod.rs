// Service exports
pub mod catalog;
pub mod whatsapp;

pub use catalog::{Catalog, CatalogError};
pub use whatsapp::{WhatsAppClient, WhatsAppError};
