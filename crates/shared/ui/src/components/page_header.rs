//! Page-level heading block.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Heading text; truncated with an ellipsis when it overflows.
    #[props(into)]
    pub title: String,
    /// Secondary line rendered under the title.
    pub description: Option<String>,
    /// Controls aligned opposite the title, rendered in the order given.
    pub actions: Option<Element>,
}

/// Title, optional description, optional actions. Absent parts render nothing.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header { class: "page-header flex items-center justify-between gap-4",
            div { class: "min-w-0 flex-1",
                h1 {
                    class: "page-header-title truncate text-2xl font-bold tracking-tight",
                    title: "{props.title}",
                    "{props.title}"
                }
                if let Some(description) = props.description {
                    p { class: "page-header-description text-sm text-base-content/60", "{description}" }
                }
            }
            if let Some(actions) = props.actions {
                div { class: "page-header-actions flex shrink-0 items-center gap-2", {actions} }
            }
        }
    }
}
