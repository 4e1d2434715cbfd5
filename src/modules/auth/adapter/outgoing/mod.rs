pub mod jwt;
pub mod sea_orm_entity;
mod role_query_postgres;

pub use role_query_postgres::RoleQueryPostgres;
