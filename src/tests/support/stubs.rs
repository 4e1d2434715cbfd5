use async_trait::async_trait;

use crate::driver_verification::application::domain::entities::DriverVerification;
use crate::driver_verification::application::ports::incoming::use_cases::{
    ListVerificationsError, ListVerificationsQuery, ListVerificationsUseCase,
    ReviewVerificationCommand, ReviewVerificationError, ReviewVerificationUseCase,
    SubmitVerificationCommand, SubmitVerificationError, SubmitVerificationUseCase,
};
use crate::otp::application::ports::incoming::use_cases::{
    IssueOtpCommand, IssueOtpError, IssueOtpUseCase, IssuedOtp, VerifiedEmail, VerifyOtpCommand,
    VerifyOtpError, VerifyOtpUseCase,
};
use crate::rating::application::domain::entities::Rating;
use crate::rating::application::ports::incoming::use_cases::{
    CreateRatingCommand, CreateRatingError, CreateRatingUseCase,
};
use crate::ride::application::domain::entities::Ride;
use crate::ride::application::domain::fare::FareBreakdown;
use crate::ride::application::ports::incoming::use_cases::{
    CreateRideCommand, CreateRideError, CreateRideUseCase, QuoteFareCommand, QuoteFareError,
    QuoteFareUseCase, SearchRidesError, SearchRidesQuery, SearchRidesUseCase,
};

// Placeholders for use cases a test does not exercise.

const UNUSED: &str = "not used in this test";

pub struct StubIssueOtpUseCase;

#[async_trait]
impl IssueOtpUseCase for StubIssueOtpUseCase {
    async fn execute(&self, _: IssueOtpCommand) -> Result<IssuedOtp, IssueOtpError> {
        Err(IssueOtpError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubVerifyOtpUseCase;

#[async_trait]
impl VerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(&self, _: VerifyOtpCommand) -> Result<VerifiedEmail, VerifyOtpError> {
        Err(VerifyOtpError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubCreateRideUseCase;

#[async_trait]
impl CreateRideUseCase for StubCreateRideUseCase {
    async fn execute(&self, _: CreateRideCommand) -> Result<Ride, CreateRideError> {
        Err(CreateRideError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubSearchRidesUseCase;

#[async_trait]
impl SearchRidesUseCase for StubSearchRidesUseCase {
    async fn execute(&self, _: SearchRidesQuery) -> Result<Vec<Ride>, SearchRidesError> {
        Ok(vec![])
    }
}

pub struct StubQuoteFareUseCase;

#[async_trait]
impl QuoteFareUseCase for StubQuoteFareUseCase {
    async fn execute(&self, _: QuoteFareCommand) -> Result<FareBreakdown, QuoteFareError> {
        Err(QuoteFareError::RideNotFound)
    }
}

pub struct StubSubmitVerificationUseCase;

#[async_trait]
impl SubmitVerificationUseCase for StubSubmitVerificationUseCase {
    async fn execute(
        &self,
        _: SubmitVerificationCommand,
    ) -> Result<DriverVerification, SubmitVerificationError> {
        Err(SubmitVerificationError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubListVerificationsUseCase;

#[async_trait]
impl ListVerificationsUseCase for StubListVerificationsUseCase {
    async fn execute(
        &self,
        _: ListVerificationsQuery,
    ) -> Result<Vec<DriverVerification>, ListVerificationsError> {
        Ok(vec![])
    }
}

pub struct StubReviewVerificationUseCase;

#[async_trait]
impl ReviewVerificationUseCase for StubReviewVerificationUseCase {
    async fn execute(
        &self,
        _: ReviewVerificationCommand,
    ) -> Result<DriverVerification, ReviewVerificationError> {
        Err(ReviewVerificationError::NotFound)
    }
}

pub struct StubCreateRatingUseCase;

#[async_trait]
impl CreateRatingUseCase for StubCreateRatingUseCase {
    async fn execute(&self, _: CreateRatingCommand) -> Result<Rating, CreateRatingError> {
        Err(CreateRatingError::RepositoryError(UNUSED.to_string()))
    }
}
