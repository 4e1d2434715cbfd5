use std::sync::Arc;

use crate::ride::application::ports::incoming::use_cases::{
    CreateRideUseCase, QuoteFareUseCase, SearchRidesUseCase,
};

#[derive(Clone)]
pub struct RideUseCases {
    pub create: Arc<dyn CreateRideUseCase + Send + Sync>,
    pub search: Arc<dyn SearchRidesUseCase + Send + Sync>,
    pub quote: Arc<dyn QuoteFareUseCase + Send + Sync>,
}
