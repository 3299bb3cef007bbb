mod page_header;
mod plan_badge;
mod plan_overview;

pub use page_header::{PageHeader, PageHeaderProps};
pub use plan_badge::{PlanBadge, PlanBadgeProps};
pub use plan_overview::{PlanOverview, PlanOverviewProps};
