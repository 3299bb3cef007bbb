use crate::components::{PageHeader, PlanBadge};
use dioxus::prelude::*;
use sitely_domain::PlanType;

#[derive(Props, Clone, PartialEq)]
pub struct PlanOverviewProps {
    #[props(into)]
    pub title: String,
    pub description: Option<String>,
    pub plan: PlanType,
}

/// Dashboard heading with the current plan shown as the header action.
#[component]
pub fn PlanOverview(props: PlanOverviewProps) -> Element {
    rsx! {
        PageHeader {
            title: props.title,
            description: props.description,
            actions: rsx! { PlanBadge { plan: props.plan } },
        }
    }
}
