pub mod catalog;
pub mod health;
pub mod pagination;
pub mod request_id;
