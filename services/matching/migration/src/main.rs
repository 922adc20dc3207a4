use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(swipe_matching_migration::Migrator).await;
}
