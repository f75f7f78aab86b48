pub mod carriers;
pub mod dispatch;
pub mod districts;
pub mod health;
pub mod shipments;
pub mod system;
