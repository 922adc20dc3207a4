use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("CREATE EXTENSION IF NOT EXISTS postgis")
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Lat).double().not_null())
                    .col(ColumnDef::new(Locations::Lng).double().not_null())
                    .col(
                        ColumnDef::new(Locations::Location)
                            .custom(Alias::new("geography(Point, 4326)"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Locations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Locations::Table, Locations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Radius queries go through ST_DWithin, which needs a GiST index.
        db.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_locations_location ON locations USING GIST (location)",
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .table(Locations::Table)
                    .col((Locations::UpdatedAt, IndexOrder::Desc))
                    .name("idx_locations_updated_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Locations {
    Table,
    UserId,
    Lat,
    Lng,
    Location,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
