//! Blocking modal used for notices and confirmations.

use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

fn class_attr(class: &'static str) -> Attribute {
    Attribute::new("class", class, None, false)
}

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-overlay"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("bb-dialog".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-title"));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-description"));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-actions"));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

/// Confirming button; closes the dialog after `on_click`.
#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-confirm"));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    props.attributes.push(class_attr("bb-dialog-cancel"));

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}
