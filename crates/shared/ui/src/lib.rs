//! Presentational components. Every component is a pure function of its props: no
//! hooks, no context, no events.
//!
//! Server-side rendering goes through [`ssr::render_component`].

pub mod components;
pub mod ssr;

pub use crate::components::{
    PageHeader, PageHeaderProps, PlanBadge, PlanBadgeProps, PlanOverview, PlanOverviewProps,
};
