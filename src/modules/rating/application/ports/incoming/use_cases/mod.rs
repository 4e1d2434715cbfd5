mod create_rating;

pub use create_rating::{
    CreateRatingCommand, CreateRatingCommandError, CreateRatingError, CreateRatingUseCase,
};
