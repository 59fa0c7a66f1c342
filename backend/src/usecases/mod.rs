pub mod images;
pub mod pricing_plans;
pub mod schedules;
