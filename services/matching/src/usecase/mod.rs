pub mod actor;
pub mod coupon;
pub mod decision;
pub mod location;
pub mod rate_limit;
pub mod recommendation;
pub mod subscription;
