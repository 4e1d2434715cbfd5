mod create_rating_service;

pub use create_rating_service::CreateRatingService;
