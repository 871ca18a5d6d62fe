pub mod entities;
pub mod handlers;
pub mod router;
pub mod validators;
