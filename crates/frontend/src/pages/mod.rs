//! Page components.

mod dashboard;

pub use dashboard::DashboardPage;
