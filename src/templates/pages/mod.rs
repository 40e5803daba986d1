pub mod dashboard;
pub mod home;
pub mod property;

pub use crate::templates::components::review_card::ReviewRow;
pub use dashboard::{dashboard_page, DashboardVm};
pub use home::home_page;
pub use property::{property_page, PropertyVm};
