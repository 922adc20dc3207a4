use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_locations;
mod m20250601_000003_create_decisions;
mod m20250601_000004_create_coupons;
mod m20250601_000005_create_coupon_redemptions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_locations::Migration),
            Box::new(m20250601_000003_create_decisions::Migration),
            Box::new(m20250601_000004_create_coupons::Migration),
            Box::new(m20250601_000005_create_coupon_redemptions::Migration),
        ]
    }
}
