pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_email_verifications_table;
mod m20250601_000002_create_rides_table;
mod m20250601_000003_create_user_roles_table;
mod m20250601_000004_create_driver_verifications_table;
mod m20250601_000005_create_ratings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_email_verifications_table::Migration),
            Box::new(m20250601_000002_create_rides_table::Migration),
            Box::new(m20250601_000003_create_user_roles_table::Migration),
            Box::new(m20250601_000004_create_driver_verifications_table::Migration),
            Box::new(m20250601_000005_create_ratings_table::Migration),
        ]
    }
}
