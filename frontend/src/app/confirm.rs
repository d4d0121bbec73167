use common::MemoId;

pub(crate) const DELETE_PROMPT: &str = "Delete this memo?";

pub(crate) trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

pub(crate) struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub(crate) fn confirm_delete(confirm: &impl Confirm, id: MemoId) -> Option<MemoId> {
    confirm.confirm(DELETE_PROMPT).then_some(id)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Scripted {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirm for Scripted {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    #[test]
    fn accepted_confirmation_yields_id() {
        let dialog = Scripted::answering(true);
        assert_eq!(confirm_delete(&dialog, 1), Some(1));
        assert_eq!(*dialog.asked.borrow(), vec![DELETE_PROMPT.to_string()]);
    }

    #[test]
    fn declined_confirmation_yields_nothing() {
        let dialog = Scripted::answering(false);
        assert_eq!(confirm_delete(&dialog, 1), None);
        assert_eq!(dialog.asked.borrow().len(), 1);
    }
}
