use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `likes` and `passes` share one shape: a directed edge keyed by
/// `(self_id, target_id)`.
fn decision_table<T>(table: T) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Decision::SelfId).uuid().not_null())
        .col(ColumnDef::new(Decision::TargetId).uuid().not_null())
        .col(
            ColumnDef::new(Decision::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .primary_key(
            Index::create()
                .col(Decision::SelfId)
                .col(Decision::TargetId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, Decision::SelfId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, Decision::TargetId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(decision_table(Likes::Table)).await?;
        manager.create_table(decision_table(Passes::Table)).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
enum Likes {
    Table,
}

#[derive(Iden, Clone, Copy)]
enum Passes {
    Table,
}

#[derive(Iden)]
enum Decision {
    SelfId,
    TargetId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
