use sea_orm_migration::prelude::*;

const CREATE_INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_driver_verifications_user_id
    ON driver_verifications (user_id);

    CREATE UNIQUE INDEX IF NOT EXISTS idx_driver_verifications_user_open
    ON driver_verifications (user_id)
    WHERE status IN ('pending', 'verified');
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverVerifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DriverVerifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(DriverVerifications::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(DriverVerifications::LicenseNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DriverVerifications::LicenseImageUrl).text())
                    .col(ColumnDef::new(DriverVerifications::VehicleMake).string_len(100))
                    .col(ColumnDef::new(DriverVerifications::VehicleModel).string_len(100))
                    .col(ColumnDef::new(DriverVerifications::VehicleNumber).string_len(50))
                    .col(ColumnDef::new(DriverVerifications::YearsExperience).integer())
                    .col(
                        ColumnDef::new(DriverVerifications::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(DriverVerifications::RejectionReason).text())
                    .col(
                        ColumnDef::new(DriverVerifications::VerifiedAt)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(DriverVerifications::VerifiedBy).uuid())
                    .col(
                        ColumnDef::new(DriverVerifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A rejected record must carry its reason
                    .check(Expr::cust(
                        "status <> 'rejected' OR rejection_reason IS NOT NULL",
                    ))
                    .to_owned(),
            )
            .await?;

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
                DROP INDEX IF EXISTS idx_driver_verifications_user_open;
                DROP INDEX IF EXISTS idx_driver_verifications_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DriverVerifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DriverVerifications {
    Table,
    Id,
    UserId,
    LicenseNumber,
    LicenseImageUrl,
    VehicleMake,
    VehicleModel,
    VehicleNumber,
    YearsExperience,
    Status,
    RejectionReason,
    VerifiedAt,
    VerifiedBy,
    CreatedAt,
}
