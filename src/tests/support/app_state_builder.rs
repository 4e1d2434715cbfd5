use std::sync::Arc;

use actix_web::web;

use crate::driver_verification::application::driver_verification_use_cases::DriverVerificationUseCases;
use crate::driver_verification::application::ports::incoming::use_cases::{
    ListVerificationsUseCase, ReviewVerificationUseCase, SubmitVerificationUseCase,
};
use crate::otp::application::otp_use_cases::OtpUseCases;
use crate::otp::application::ports::incoming::use_cases::{IssueOtpUseCase, VerifyOtpUseCase};
use crate::rating::application::ports::incoming::use_cases::CreateRatingUseCase;
use crate::ride::application::ports::incoming::use_cases::{
    CreateRideUseCase, QuoteFareUseCase, SearchRidesUseCase,
};
use crate::ride::application::ride_use_cases::RideUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    otp: OtpUseCases,
    ride: RideUseCases,
    driver_verification: DriverVerificationUseCases,
    create_rating: Arc<dyn CreateRatingUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            otp: OtpUseCases {
                issue: Arc::new(StubIssueOtpUseCase),
                verify: Arc::new(StubVerifyOtpUseCase),
            },
            ride: RideUseCases {
                create: Arc::new(StubCreateRideUseCase),
                search: Arc::new(StubSearchRidesUseCase),
                quote: Arc::new(StubQuoteFareUseCase),
            },
            driver_verification: DriverVerificationUseCases {
                submit: Arc::new(StubSubmitVerificationUseCase),
                list: Arc::new(StubListVerificationsUseCase),
                review: Arc::new(StubReviewVerificationUseCase),
            },
            create_rating: Arc::new(StubCreateRatingUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_issue_otp(mut self, uc: impl IssueOtpUseCase + 'static) -> Self {
        self.otp.issue = Arc::new(uc);
        self
    }

    pub fn with_verify_otp(mut self, uc: impl VerifyOtpUseCase + 'static) -> Self {
        self.otp.verify = Arc::new(uc);
        self
    }

    pub fn with_create_ride(mut self, uc: impl CreateRideUseCase + 'static) -> Self {
        self.ride.create = Arc::new(uc);
        self
    }

    pub fn with_search_rides(mut self, uc: impl SearchRidesUseCase + 'static) -> Self {
        self.ride.search = Arc::new(uc);
        self
    }

    pub fn with_quote_fare(mut self, uc: impl QuoteFareUseCase + 'static) -> Self {
        self.ride.quote = Arc::new(uc);
        self
    }

    pub fn with_submit_driver_verification(
        mut self,
        uc: impl SubmitVerificationUseCase + 'static,
    ) -> Self {
        self.driver_verification.submit = Arc::new(uc);
        self
    }

    pub fn with_list_driver_verifications(
        mut self,
        uc: impl ListVerificationsUseCase + 'static,
    ) -> Self {
        self.driver_verification.list = Arc::new(uc);
        self
    }

    pub fn with_review_driver_verification(
        mut self,
        uc: impl ReviewVerificationUseCase + 'static,
    ) -> Self {
        self.driver_verification.review = Arc::new(uc);
        self
    }

    pub fn with_create_rating(mut self, uc: impl CreateRatingUseCase + 'static) -> Self {
        self.create_rating = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            otp: self.otp,
            ride: self.ride,
            driver_verification: self.driver_verification,
            create_rating_use_case: self.create_rating,
        })
    }
}
