use sea_orm_migration::prelude::*;

const CREATE_INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_email_verifications_lookup
    ON email_verifications (email, otp, verified, created_at DESC);
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailVerifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailVerifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(EmailVerifications::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailVerifications::Otp)
                            .char_len(6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailVerifications::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailVerifications::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EmailVerifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path of the verifier: (email, otp, verified) newest first
        manager
            .get_connection()
            .execute_unprepared(CREATE_INDEXES)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_email_verifications_lookup;")
            .await?;

        manager
            .drop_table(Table::drop().table(EmailVerifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailVerifications {
    Table,
    Id,
    Email,
    Otp,
    ExpiresAt,
    Verified,
    CreatedAt,
}
