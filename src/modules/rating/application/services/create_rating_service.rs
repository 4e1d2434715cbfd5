use async_trait::async_trait;

use crate::rating::application::domain::entities::Rating;
use crate::rating::application::ports::incoming::use_cases::{
    CreateRatingCommand, CreateRatingError, CreateRatingUseCase,
};
use crate::rating::application::ports::outgoing::{RatingRepository, RatingRepositoryError};
use crate::ride::application::ports::outgoing::RideQuery;

pub struct CreateRatingService<R, Q>
where
    R: RatingRepository,
    Q: RideQuery,
{
    repository: R,
    rides: Q,
}

impl<R, Q> CreateRatingService<R, Q>
where
    R: RatingRepository,
    Q: RideQuery,
{
    pub fn new(repository: R, rides: Q) -> Self {
        Self { repository, rides }
    }
}

#[async_trait]
impl<R, Q> CreateRatingUseCase for CreateRatingService<R, Q>
where
    R: RatingRepository + Send + Sync,
    Q: RideQuery + Send + Sync,
{
    async fn execute(&self, command: CreateRatingCommand) -> Result<Rating, CreateRatingError> {
        let ride_id = command.ride_id();

        self.rides
            .find_by_id(ride_id)
            .await
            .map_err(|e| CreateRatingError::RepositoryError(e.to_string()))?
            .ok_or(CreateRatingError::RideNotFound)?;

        let rating = self
            .repository
            .insert(command.into_data())
            .await
            .map_err(|e| match e {
                RatingRepositoryError::Duplicate => CreateRatingError::AlreadyRated,
                RatingRepositoryError::DatabaseError(msg) => CreateRatingError::RepositoryError(msg),
            })?;

        tracing::info!(
            ride_id = %ride_id,
            from_user_id = %rating.from_user_id,
            to_user_id = %rating.to_user_id,
            stars = rating.rating.value(),
            "Rating recorded"
        );

        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::rating::application::ports::outgoing::NewRating;
    use crate::ride::application::domain::entities::{Ride, RideStatus};
    use crate::ride::application::ports::outgoing::{RideQueryError, RideSearchCriteria};

    mock! {
        pub RatingRepoMock {}
        #[async_trait]
        impl RatingRepository for RatingRepoMock {
            async fn insert(&self, data: NewRating) -> Result<Rating, RatingRepositoryError>;
        }
    }

    mock! {
        pub RideQueryMock {}
        #[async_trait]
        impl RideQuery for RideQueryMock {
            async fn find_by_id(&self, ride_id: Uuid) -> Result<Option<Ride>, RideQueryError>;
            async fn search(&self, criteria: &RideSearchCriteria) -> Result<Vec<Ride>, RideQueryError>;
        }
    }

    fn ride(id: Uuid) -> Ride {
        Ride {
            id,
            driver_id: UserId::from(Uuid::new_v4()),
            from_location: "Pune".to_string(),
            to_location: "Nashik".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2030, 2, 1).unwrap(),
            departure_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            available_seats: 1,
            price_per_seat: 250.0,
            vehicle: Default::default(),
            notes: None,
            preferences: Default::default(),
            status: RideStatus::Completed,
            created_at: Utc::now(),
        }
    }

    fn rides_with(found: bool) -> MockRideQueryMock {
        let mut rides = MockRideQueryMock::new();
        rides
            .expect_find_by_id()
            .returning(move |id| Ok(found.then(|| ride(id))));
        rides
    }

    fn command(ride_id: Uuid) -> CreateRatingCommand {
        CreateRatingCommand::new(
            UserId::from(Uuid::new_v4()),
            Some(ride_id),
            Some(Uuid::new_v4()),
            Some(4),
            Some("On time".to_string()),
        )
        .unwrap()
    }

    fn stored(data: NewRating) -> Rating {
        Rating {
            id: Uuid::new_v4(),
            ride_id: data.ride_id,
            from_user_id: data.from_user_id,
            to_user_id: data.to_user_id,
            rating: data.rating,
            review: data.review,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_rating_stored() {
        let ride_id = Uuid::new_v4();

        let mut repo = MockRatingRepoMock::new();
        repo.expect_insert()
            .withf(move |data| data.ride_id == ride_id && data.rating.value() == 4)
            .times(1)
            .returning(|data| Ok(stored(data)));

        let mut rides = MockRideQueryMock::new();
        rides
            .expect_find_by_id()
            .with(eq(ride_id))
            .times(1)
            .returning(|id| Ok(Some(ride(id))));

        let service = CreateRatingService::new(repo, rides);

        let rating = service.execute(command(ride_id)).await.unwrap();

        assert_eq!(rating.ride_id, ride_id);
        assert_eq!(rating.review.as_deref(), Some("On time"));
    }

    #[tokio::test]
    async fn test_unknown_ride() {
        let mut repo = MockRatingRepoMock::new();
        repo.expect_insert().times(0);

        let service = CreateRatingService::new(repo, rides_with(false));

        let result = service.execute(command(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), CreateRatingError::RideNotFound);
    }

    #[tokio::test]
    async fn test_second_rating_is_refused() {
        let mut repo = MockRatingRepoMock::new();
        repo.expect_insert()
            .returning(|_| Err(RatingRepositoryError::Duplicate));

        let service = CreateRatingService::new(repo, rides_with(true));

        let result = service.execute(command(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), CreateRatingError::AlreadyRated);
    }
}
