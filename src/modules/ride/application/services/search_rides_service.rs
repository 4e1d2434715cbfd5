use async_trait::async_trait;

use crate::ride::application::domain::entities::Ride;
use crate::ride::application::ports::incoming::use_cases::{
    SearchRidesError, SearchRidesQuery, SearchRidesUseCase,
};
use crate::ride::application::ports::outgoing::RideQuery;

pub struct SearchRidesService<Q>
where
    Q: RideQuery,
{
    query: Q,
}

impl<Q> SearchRidesService<Q>
where
    Q: RideQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchRidesUseCase for SearchRidesService<Q>
where
    Q: RideQuery + Send + Sync,
{
    async fn execute(&self, query: SearchRidesQuery) -> Result<Vec<Ride>, SearchRidesError> {
        self.query
            .search(query.criteria())
            .await
            .map_err(|e| SearchRidesError::QueryError(e.to_string()))
    }
}
