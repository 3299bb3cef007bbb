//! Server-side rendering helpers built on `dioxus-ssr`.

use dioxus::prelude::*;

/// Renders a root component with no props to an HTML string.
#[must_use]
pub fn render_to_html(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders `component` with `props` to an HTML string.
#[must_use]
pub fn render_component<P>(component: fn(P) -> Element, props: P) -> String
where
    P: Clone + 'static,
{
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
