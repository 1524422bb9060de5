use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Horizontal meter. Pass `value` as a percentage.
#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "bb-meter", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "bb-meter-fill", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}
