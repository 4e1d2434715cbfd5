mod rating_repository_postgres;
pub mod sea_orm_entity;

pub use rating_repository_postgres::RatingRepositoryPostgres;
