use std::rc::Rc;

use common::Memo;
use yew::prelude::*;

use super::{viewer, MemoIntents};

pub(crate) const EMPTY_MESSAGE: &str = "No memos yet.";

#[derive(Debug, PartialEq)]
pub(crate) enum Listing<'a> {
    Empty,
    Items(Vec<(String, &'a Memo)>),
}

pub(crate) fn listing(memos: &[Memo]) -> Listing<'_> {
    if memos.is_empty() {
        return Listing::Empty;
    }
    Listing::Items(
        memos
            .iter()
            .map(|memo| (memo.id.to_string(), memo))
            .collect(),
    )
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) memos: Rc<Vec<Memo>>,
    pub(crate) intents: MemoIntents,
}

#[function_component(Board)]
pub(crate) fn board(props: &Props) -> Html {
    match listing(&props.memos) {
        Listing::Empty => html! {
            <div style="padding: 16px; text-align: center;">{ EMPTY_MESSAGE }</div>
        },
        Listing::Items(items) => html! {
            <div>
                <h2>{ "Memos" }</h2>
                { for items.into_iter().map(|(key, memo)| html! {
                    <viewer::Viewer
                        key={key}
                        memo={memo.clone()}
                        on_delete={props.intents.on_delete.clone()}
                    />
                })}
            </div>
        },
    }
}
