use common::{Memo, MemoId};
use yew::prelude::*;

use super::confirm::{self, BrowserConfirm};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

// offset-bearing input is shown in local time, naive input as-is
pub(crate) fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&chrono::Local)
            .format(TIMESTAMP_FORMAT)
            .to_string();
    }
    match chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format(TIMESTAMP_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

pub(crate) fn visible_content(memo: &Memo) -> Option<&str> {
    memo.content.as_deref().filter(|content| !content.is_empty())
}

pub(crate) struct Viewer;

pub(crate) enum Msg {
    Delete,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) memo: Memo,
    pub(crate) on_delete: Callback<MemoId>,
}

impl Component for Viewer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Delete => {
                let props = ctx.props();
                if let Some(id) = confirm::confirm_delete(&BrowserConfirm, props.memo.id) {
                    props.on_delete.emit(id);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let memo = &ctx.props().memo;
        let content = visible_content(memo);
        html! {
            <div style="padding: 8px; border: 1px dashed black; margin-bottom: 8px;">
                <div>
                    <h3 style="display: inline;">{ &memo.title }</h3>
                    <button
                        aria-label="Delete memo"
                        onclick={link.callback(|_| Msg::Delete)}
                    >{ "Delete" }</button>
                </div>
                { for content.map(|content| html! {
                    <p style="white-space: pre-wrap;">{ content }</p>
                })}
                <small>{ format!("Created: {}", format_timestamp(&memo.created_at)) }</small>
            </div>
        }
    }
}
