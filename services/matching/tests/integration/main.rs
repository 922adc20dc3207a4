
mod decision_test;
mod location_test;
mod rate_limit_test;
mod router_test;
