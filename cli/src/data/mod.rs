pub mod dashboard;
pub mod demo;

pub use dashboard::DashboardModel;
pub use demo::DemoFeed;
