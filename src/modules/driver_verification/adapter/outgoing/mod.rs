mod driver_verification_repository_postgres;
pub mod sea_orm_entity;

pub use driver_verification_repository_postgres::DriverVerificationRepositoryPostgres;
