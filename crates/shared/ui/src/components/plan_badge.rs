use dioxus::prelude::*;
use sitely_domain::PlanType;

#[derive(Props, Clone, PartialEq)]
pub struct PlanBadgeProps {
    pub plan: PlanType,
}

/// Plan name plus the entitlements it grants.
#[component]
pub fn PlanBadge(props: PlanBadgeProps) -> Element {
    let features = props.plan.features();
    let label = label(props.plan);
    let sites = features.max_sites;
    let domain = yes_no(features.custom_domain);
    let templates = yes_no(features.advanced_templates);

    rsx! {
        div { class: "plan-badge plan-badge-{props.plan}",
            span { class: "plan-badge-label font-semibold", "{label}" }
            ul { class: "plan-badge-features text-xs",
                li { "Sites: {sites}" }
                li { "Custom domain: {domain}" }
                li { "Advanced templates: {templates}" }
            }
        }
    }
}

const fn label(plan: PlanType) -> &'static str {
    match plan {
        PlanType::Basic => "Basic",
        PlanType::Pro => "Pro",
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
