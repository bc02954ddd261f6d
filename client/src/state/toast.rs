//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Stays visible until replaced.
    Loading,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Loading => "toast toast--loading",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }

    pub fn auto_dismiss(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Swap the content of toast `id` in place, or queue it anew if it has
    /// already gone.
    pub fn replace(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message;
            }
            None => self.items.push(Toast { id, kind, message }),
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
