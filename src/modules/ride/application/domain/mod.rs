pub mod entities;
pub mod fare;
