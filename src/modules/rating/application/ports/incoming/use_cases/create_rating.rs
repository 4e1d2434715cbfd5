use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::domain::entities::{Rating, Stars};
use crate::rating::application::ports::outgoing::NewRating;

#[derive(Debug, Clone)]
pub struct CreateRatingCommand {
    data: NewRating,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreateRatingCommandError {
    #[error("Ride, rated user and rating are required")]
    MissingFields,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("You cannot rate yourself")]
    SelfRating,
}

impl CreateRatingCommand {
    pub fn new(
        from: UserId,
        ride_id: Option<Uuid>,
        to_user_id: Option<Uuid>,
        rating: Option<i32>,
        review: Option<String>,
    ) -> Result<Self, CreateRatingCommandError> {
        let (Some(ride_id), Some(to_user_id), Some(rating)) = (ride_id, to_user_id, rating) else {
            return Err(CreateRatingCommandError::MissingFields);
        };

        let rating = Stars::new(rating).ok_or(CreateRatingCommandError::InvalidRating)?;

        let to_user_id = UserId::from(to_user_id);
        if to_user_id == from {
            return Err(CreateRatingCommandError::SelfRating);
        }

        Ok(Self {
            data: NewRating {
                ride_id,
                from_user_id: from,
                to_user_id,
                rating,
                review: review.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()),
            },
        })
    }

    pub fn ride_id(&self) -> Uuid {
        self.data.ride_id
    }

    pub fn data(&self) -> &NewRating {
        &self.data
    }

    pub fn into_data(self) -> NewRating {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CreateRatingError {
    #[error("Ride not found")]
    RideNotFound,

    #[error("You have already rated this user for this ride")]
    AlreadyRated,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRatingUseCase: Send + Sync {
    async fn execute(&self, command: CreateRatingCommand) -> Result<Rating, CreateRatingError>;
}
