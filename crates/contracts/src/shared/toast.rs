#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

/// Older toasts are dropped beyond this count
pub const MAX_TOASTS: usize = 5;

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut state = ToastState::default();
        let a = state.push(ToastKind::Success, "successfully.added");
        let b = state.push(ToastKind::Error, "HTTP 500");
        assert_ne!(a, b);
        state.dismiss(a);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut state = ToastState::default();
        for i in 0..7 {
            state.push(ToastKind::Info, format!("m{}", i));
        }
        assert_eq!(state.items.len(), MAX_TOASTS);
        assert_eq!(state.items[0].message, "m2");
    }
}
