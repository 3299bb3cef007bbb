use dioxus::prelude::*;
use sitely_domain::PlanType;
use sitely_ui::ssr::{render_component, render_to_html};
use sitely_ui::{PageHeader, PlanOverview, PlanOverviewProps};

fn title_only() -> Element {
    rsx! { PageHeader { title: "My Sites" } }
}

fn full_header() -> Element {
    rsx! {
        PageHeader {
            title: "My Sites",
            description: "Manage your sites".to_owned(),
            actions: rsx! { button { class: "btn", "New site" } },
        }
    }
}

fn two_actions() -> Element {
    rsx! {
        PageHeader {
            title: "My Sites",
            actions: rsx! {
                button { "Import" }
                button { "Create" }
            },
        }
    }
}

#[test]
fn title_only_renders_no_description_or_actions() {
    let html = render_to_html(title_only);
    assert!(html.contains("My Sites"));
    assert!(html.contains("truncate"));
    assert!(!html.contains("<p"));
    assert!(!html.contains("page-header-actions"));
}

#[test]
fn full_header_renders_in_title_description_actions_order() {
    let html = render_to_html(full_header);
    let title = html.find("My Sites").expect("title rendered");
    let description = html.find("Manage your sites").expect("description rendered");
    let actions = html.find("page-header-actions").expect("actions region rendered");
    let action = html.find("New site").expect("action rendered");

    assert!(title < description);
    assert!(description < actions);
    assert!(actions < action);
}

#[test]
fn actions_keep_their_order() {
    let html = render_to_html(two_actions);
    let import = html.find("Import").expect("first action");
    let create = html.find("Create").expect("second action");
    assert!(import < create);
}

#[test]
fn plan_overview_shows_pro_entitlements() {
    let html = render_component(
        PlanOverview,
        PlanOverviewProps { title: "My Sites".to_owned(), description: None, plan: PlanType::Pro },
    );
    assert!(html.contains("plan-badge-pro"));
    assert!(html.contains("Sites: 10"));
    assert!(html.contains("Custom domain: yes"));
    assert!(html.contains("Advanced templates: yes"));
}

#[test]
fn plan_overview_shows_basic_entitlements() {
    let html = render_component(
        PlanOverview,
        PlanOverviewProps {
            title: "My Sites".to_owned(),
            description: Some("Manage your sites".to_owned()),
            plan: PlanType::Basic,
        },
    );
    assert!(html.contains("Manage your sites"));
    assert!(html.contains("Sites: 1"));
    assert!(html.contains("Custom domain: no"));
}
