use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardFooter, CardHeader, CardTitle};

/// Dashboard summary tile.
#[component]
pub fn Widget(
    title: String,
    icon: Element,
    children: Element,
    action: Option<Element>,
) -> Element {
    rsx! {
        Card { class: "widget",
            CardHeader {
                div { class: "widget-heading",
                    span { class: "widget-icon", {icon} }
                    CardTitle { "{title}" }
                }
            }
            CardContent { {children} }
            if let Some(action) = action {
                CardFooter { {action} }
            }
        }
    }
}

/// Large headline number with a caption.
#[component]
pub fn WidgetStat(value: usize, label: String, #[props(default)] tone: String) -> Element {
    rsx! {
        div { class: "widget-stat", "data-tone": "{tone}", "{value}" }
        p { class: "widget-label", "{label}" }
    }
}
