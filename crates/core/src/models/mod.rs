pub mod category;
pub mod chart;
pub mod currency;
pub mod dashboard;
pub mod records;
pub mod session;
pub mod summary;
