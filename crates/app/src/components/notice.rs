use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, GENERIC_ERROR_MESSAGE};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

/// A blocking message the user must acknowledge.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Something went wrong".to_string(),
            message: message.into(),
        }
    }

    /// Alert for a failed user action: the server's message, else `fallback`.
    pub fn failure(err: &AppError, fallback: &str) -> Self {
        let server_message = err.message.trim();
        let message = if err.kind == AppErrorKind::Network
            || server_message.is_empty()
            || server_message == GENERIC_ERROR_MESSAGE
        {
            fallback.to_string()
        } else {
            server_message.to_string()
        };
        Self::error(message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Shows `notice` while it is `Some`; dismissing clears it.
#[component]
pub fn NoticeDialog(mut notice: Signal<Option<Notice>>) -> Element {
    let current = notice.read().clone();
    let open = current.is_some();
    let Notice { title, message } = current.unwrap_or_else(|| Notice::info("", ""));

    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    notice.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Yes/no confirmation. `on_confirm` runs only on the confirming button.
#[component]
pub fn ConfirmDialog(
    mut open: Signal<bool>,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open: open(),
            on_open_change: move |v: bool| open.set(v),
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| {
                            open.set(false);
                            on_confirm.call(());
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
