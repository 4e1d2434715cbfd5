pub mod create_rating;

pub use create_rating::{create_rating_handler, CreateRatingRequest};
