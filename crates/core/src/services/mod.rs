pub mod category_service;
pub mod currency_service;
pub mod dashboard_service;
pub mod summary_service;
