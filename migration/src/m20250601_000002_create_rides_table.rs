use sea_orm_migration::prelude::*;

const CREATE_INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_rides_driver_id ON rides (driver_id);
    CREATE INDEX IF NOT EXISTS idx_rides_status_departure ON rides (status, departure_date, departure_time);
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create rides table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Rides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rides::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Rides::DriverId).uuid().not_null())
                    .col(ColumnDef::new(Rides::FromLocation).string_len(255).not_null())
                    .col(ColumnDef::new(Rides::ToLocation).string_len(255).not_null())
                    .col(ColumnDef::new(Rides::DepartureDate).date().not_null())
                    .col(ColumnDef::new(Rides::DepartureTime).time().not_null())
                    .col(
                        ColumnDef::new(Rides::AvailableSeats)
                            .integer()
                            .not_null()
                            .check(Expr::col(Rides::AvailableSeats).between(0, 6)),
                    )
                    .col(
                        ColumnDef::new(Rides::PricePerSeat)
                            .double()
                            .not_null()
                            .check(Expr::col(Rides::PricePerSeat).gte(0)),
                    )
                    .col(ColumnDef::new(Rides::VehicleMake).string_len(100))
                    .col(ColumnDef::new(Rides::VehicleModel).string_len(100))
                    .col(ColumnDef::new(Rides::VehicleNumber).string_len(50))
                    .col(ColumnDef::new(Rides::Notes).text())
                    .col(
                        ColumnDef::new(Rides::NoSmoking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Rides::MusicOk)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rides::Ac).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Rides::PetsOk)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Rides::Luggage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Rides::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Rides::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(CREATE_INDEXES)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_rides_driver_id;
                DROP INDEX IF EXISTS idx_rides_status_departure;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rides::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Rides {
    Table,
    Id,
    DriverId,
    FromLocation,
    ToLocation,
    DepartureDate,
    DepartureTime,
    AvailableSeats,
    PricePerSeat,
    VehicleMake,
    VehicleModel,
    VehicleNumber,
    Notes,
    NoSmoking,
    MusicOk,
    Ac,
    PetsOk,
    Luggage,
    Status,
    CreatedAt,
}
