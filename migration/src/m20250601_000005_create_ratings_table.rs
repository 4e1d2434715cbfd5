use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Ratings::RideId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::FromUserId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::ToUserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Ratings::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Ratings::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Ratings::Review).text())
                    .col(
                        ColumnDef::new(Ratings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_ride_id")
                            .from(Ratings::Table, Ratings::RideId)
                            .to(Rides::Table, Rides::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_ratings_ride_from_to_unique")
                            .col(Ratings::RideId)
                            .col(Ratings::FromUserId)
                            .col(Ratings::ToUserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    RideId,
    FromUserId,
    ToUserId,
    Rating,
    Review,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Rides {
    Table,
    Id,
}
