mod ride_query_postgres;
mod ride_repository_postgres;
pub mod sea_orm_entity;

pub use ride_query_postgres::RideQueryPostgres;
pub use ride_repository_postgres::RideRepositoryPostgres;
