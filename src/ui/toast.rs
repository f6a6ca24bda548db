// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Shared notification queue, provided once at the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            list: Signal::new(Vec::new()),
            next_id: Signal::new(1),
        }
    }

    /// The toast stays up until the returned guard is dropped.
    pub fn loading(&mut self, text: impl Into<String>) -> LoadingToast {
        let id = self.push(ToastKind::Loading, text.into());
        LoadingToast { toasts: *self, id }
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, text.into())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.list.with_mut(|l| l.retain(|t| t.id != id));
    }

    #[cfg(test)]
    pub(crate) fn count(&self, kind: ToastKind) -> usize {
        self.list.read().iter().filter(|t| t.kind == kind).count()
    }

    fn push(&mut self, kind: ToastKind, text: String) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.list.with_mut(|l| l.push(Toast { id, kind, text }));
        id
    }
}

/// Removes its loading toast on drop, so a cancelled resource task does not
/// leave one behind.
pub struct LoadingToast {
    toasts: Toasts,
    id: u64,
}

impl Drop for LoadingToast {
    fn drop(&mut self) {
        // The signal is gone once the app root unmounts.
        if let Ok(mut list) = self.toasts.list.try_write() {
            list.retain(|t| t.id != self.id);
        }
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let list = toasts.list.read().clone();
    rsx! {
        div {
            class: "toaster",
            for t in list {
                {
                    let id = t.id;
                    let class = match t.kind {
                        ToastKind::Loading => "toast loading",
                        ToastKind::Error => "toast error",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class,
                            span { "{t.text}" }
                            if t.kind == ToastKind::Error {
                                button {
                                    class: "toast-dismiss",
                                    onclick: move |_| toasts.dismiss(id),
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
