use std::rc::Rc;

use common::{Memo, MemoCreate, MemoId};

use super::fetch::{MemoTransport, TransportError};

pub(crate) const LOAD_FAILED: &str = "Failed to load memos.";
pub(crate) const CREATE_FAILED: &str = "Failed to create memo.";
pub(crate) const DELETE_FAILED: &str = "Failed to delete memo.";

pub(crate) enum Msg {
    Load,
    Create(MemoCreate),
    Delete(MemoId),
    Loaded(Result<Vec<Memo>, TransportError>),
    Created(Result<Memo, TransportError>),
    Deleted(Result<(), TransportError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    List,
    Create(MemoCreate),
    Delete(MemoId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MemoState {
    memos: Rc<Vec<Memo>>,
    loading: bool,
    error: Option<String>,
}

impl Default for MemoState {
    fn default() -> Self {
        Self {
            memos: Rc::new(Vec::new()),
            loading: true,
            error: None,
        }
    }
}

impl MemoState {
    pub(crate) fn memos(&self) -> Rc<Vec<Memo>> {
        Rc::clone(&self.memos)
    }

    pub(crate) fn loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn apply(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Load => Some(self.start_load()),
            Msg::Create(payload) => Some(Effect::Create(payload)),
            Msg::Delete(id) => Some(Effect::Delete(id)),
            // overlapping loads land in completion order, last one wins
            Msg::Loaded(result) => {
                match result {
                    Ok(memos) => {
                        log::info!("event=memo_load status=ok count={}", memos.len());
                        self.memos = Rc::new(memos);
                    }
                    Err(error) => {
                        log::error!("event=memo_load status=error error={}", error);
                        self.error = Some(LOAD_FAILED.to_string());
                    }
                }
                self.loading = false;
                None
            }
            Msg::Created(result) => match result {
                Ok(memo) => {
                    log::info!("event=memo_create status=ok id={}", memo.id);
                    Some(self.start_load())
                }
                Err(error) => {
                    log::error!("event=memo_create status=error error={}", error);
                    self.error = Some(CREATE_FAILED.to_string());
                    None
                }
            },
            Msg::Deleted(result) => match result {
                Ok(()) => {
                    log::info!("event=memo_delete status=ok");
                    Some(self.start_load())
                }
                Err(error) => {
                    log::error!("event=memo_delete status=error error={}", error);
                    self.error = Some(DELETE_FAILED.to_string());
                    None
                }
            },
        }
    }

    fn start_load(&mut self) -> Effect {
        self.loading = true;
        self.error = None;
        Effect::List
    }
}

pub(crate) async fn perform<T: MemoTransport + ?Sized>(transport: &T, effect: Effect) -> Msg {
    match effect {
        Effect::List => Msg::Loaded(transport.list_memos().await),
        Effect::Create(payload) => Msg::Created(transport.create_memo(&payload).await),
        Effect::Delete(id) => Msg::Deleted(transport.delete_memo(id).await),
    }
}
