//! SeaORM entities for the matching service database.

pub mod coupon_redemptions;
pub mod coupons;
pub mod likes;
pub mod locations;
pub mod passes;
pub mod users;
