use async_trait::async_trait;

use crate::ride::application::domain::fare::{FareBreakdown, FareError, FarePolicy};
use crate::ride::application::ports::incoming::use_cases::{
    QuoteFareCommand, QuoteFareError, QuoteFareUseCase,
};
use crate::ride::application::ports::outgoing::RideQuery;

pub struct QuoteFareService<Q>
where
    Q: RideQuery,
{
    query: Q,
    policy: FarePolicy,
}

impl<Q> QuoteFareService<Q>
where
    Q: RideQuery,
{
    pub fn new(query: Q, policy: FarePolicy) -> Self {
        Self { query, policy }
    }
}

#[async_trait]
impl<Q> QuoteFareUseCase for QuoteFareService<Q>
where
    Q: RideQuery + Send + Sync,
{
    async fn execute(&self, command: QuoteFareCommand) -> Result<FareBreakdown, QuoteFareError> {
        if command.seats() < 1 {
            return Err(QuoteFareError::InvalidSeats);
        }

        let ride = self
            .query
            .find_by_id(command.ride_id())
            .await
            .map_err(|e| QuoteFareError::QueryError(e.to_string()))?
            .ok_or(QuoteFareError::RideNotFound)?;

        if !ride.is_bookable() {
            return Err(QuoteFareError::RideNotBookable);
        }

        self.policy
            .quote(ride.price_per_seat, command.seats(), ride.available_seats)
            .map_err(|e| match e {
                FareError::InvalidSeats => QuoteFareError::InvalidSeats,
                FareError::InvalidPrice => QuoteFareError::InvalidPrice,
                FareError::SeatsUnavailable {
                    requested,
                    available,
                } => QuoteFareError::SeatsUnavailable {
                    requested,
                    available,
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::ride::application::domain::entities::{Ride, RideStatus};
    use crate::ride::application::ports::outgoing::{RideQueryError, RideSearchCriteria};

    mock! {
        pub QueryMock {}
        #[async_trait]
        impl RideQuery for QueryMock {
            async fn find_by_id(&self, ride_id: Uuid) -> Result<Option<Ride>, RideQueryError>;
            async fn search(&self, criteria: &RideSearchCriteria) -> Result<Vec<Ride>, RideQueryError>;
        }
    }

    fn ride(id: Uuid, status: RideStatus, seats: i32) -> Ride {
        Ride {
            id,
            driver_id: UserId::from(Uuid::new_v4()),
            from_location: "Pune".to_string(),
            to_location: "Mumbai".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            departure_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            available_seats: seats,
            price_per_seat: 350.0,
            vehicle: Default::default(),
            notes: None,
            preferences: Default::default(),
            status,
            created_at: Utc::now(),
        }
    }

    fn service_with(found: Option<Ride>) -> QuoteFareService<MockQueryMock> {
        let mut query = MockQueryMock::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(found.clone()));
        QuoteFareService::new(query, FarePolicy::default())
    }

    #[tokio::test]
    async fn test_quote_two_seats() {
        let id = Uuid::new_v4();
        let mut query = MockQueryMock::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |id| Ok(Some(ride(id, RideStatus::Active, 3))));

        let service = QuoteFareService::new(query, FarePolicy::default());

        let quote = service.execute(QuoteFareCommand::new(id, 2)).await.unwrap();

        assert_eq!(quote.fare, 700.0);
        assert_eq!(quote.tax, 130.0);
        assert_eq!(quote.total, 850.0);
    }

    #[tokio::test]
    async fn test_quote_zero_seats_skips_lookup() {
        let mut query = MockQueryMock::new();
        query.expect_find_by_id().times(0);

        let service = QuoteFareService::new(query, FarePolicy::default());

        let result = service.execute(QuoteFareCommand::new(Uuid::new_v4(), 0)).await;

        assert_eq!(result.unwrap_err(), QuoteFareError::InvalidSeats);
    }

    #[tokio::test]
    async fn test_quote_unknown_ride() {
        let service = service_with(None);

        let result = service.execute(QuoteFareCommand::new(Uuid::new_v4(), 1)).await;

        assert_eq!(result.unwrap_err(), QuoteFareError::RideNotFound);
    }

    #[tokio::test]
    async fn test_quote_cancelled_ride() {
        let id = Uuid::new_v4();
        let service = service_with(Some(ride(id, RideStatus::Cancelled, 3)));

        let result = service.execute(QuoteFareCommand::new(id, 1)).await;

        assert_eq!(result.unwrap_err(), QuoteFareError::RideNotBookable);
    }

    #[tokio::test]
    async fn test_quote_more_than_available() {
        let id = Uuid::new_v4();
        let service = service_with(Some(ride(id, RideStatus::Active, 2)));

        let result = service.execute(QuoteFareCommand::new(id, 3)).await;

        assert_eq!(
            result.unwrap_err(),
            QuoteFareError::SeatsUnavailable {
                requested: 3,
                available: 2
            }
        );
    }
}
