mod email_verification_repository_postgres;
pub mod sea_orm_entity;

pub use email_verification_repository_postgres::EmailVerificationRepositoryPostgres;
