//! Modal stack for app-level overlays
//!
//! The reset confirmation belongs to the draft page; only overlays owned by
//! the app shell live here.

/// An overlay drawn on top of the draft page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// League settings overview ("customize")
    Settings,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal unless it is already on top
    pub fn push(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Settings);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Settings));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_same_modal_is_not_stacked_twice() {
        let mut stack = ModalStack::new();
        stack.push(Modal::QuitConfirm);
        stack.push(Modal::QuitConfirm);
        stack.pop();
        assert!(stack.is_empty());
    }
}
