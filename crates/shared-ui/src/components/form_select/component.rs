use dioxus::prelude::*;

/// Native `<select>` styled to match [`Input`](crate::Input).
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "bb-field",
            if !label.is_empty() {
                label { class: "bb-field-label",
                    "{label}"
                    if required {
                        span { class: "bb-field-required", " *" }
                    }
                }
            }
            select {
                class: "bb-select",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
