//! Renders a formatted [`Markup`] tree as DOM nodes.

use leptos::prelude::*;

use crate::util::format::{Fragment, Markup};

/// Message text with bold, line breaks and inline code applied.
#[component]
pub fn FormattedText(markup: Markup) -> impl IntoView {
    markup.fragments().iter().map(fragment_view).collect_view()
}

fn fragment_view(fragment: &Fragment) -> AnyView {
    match fragment {
        Fragment::Text(text) => text.clone().into_any(),
        Fragment::Code(code) => view! { <code>{code.clone()}</code> }.into_any(),
        Fragment::Bold(children) => {
            view! { <strong>{children.iter().map(fragment_view).collect_view()}</strong> }
                .into_any()
        }
        Fragment::LineBreak => view! { <br/> }.into_any(),
    }
}
