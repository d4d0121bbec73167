mod board;
mod confirm;
mod controller;
mod fetch;
mod viewer;
mod writer;

use std::rc::Rc;

use common::{MemoCreate, MemoId};
use yew::prelude::*;

pub(crate) use controller::Msg;

use crate::config::ApiConfig;
use controller::{Effect, MemoState};
use fetch::{HttpTransport, MemoTransport};

#[derive(Clone, PartialEq)]
pub(crate) struct MemoIntents {
    pub(crate) on_create: Callback<MemoCreate>,
    pub(crate) on_delete: Callback<MemoId>,
}

pub(crate) struct App {
    state: MemoState,
    transport: Rc<dyn MemoTransport>,
    intents: MemoIntents,
}

impl App {
    fn run(&self, ctx: &Context<Self>, effect: Effect) {
        let link = ctx.link().clone();
        let transport = Rc::clone(&self.transport);
        wasm_bindgen_futures::spawn_local(async move {
            let completion = controller::perform(transport.as_ref(), effect).await;
            link.send_message(completion);
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();
        Self {
            state: MemoState::default(),
            transport: Rc::new(HttpTransport::new(ApiConfig::from_build_env())),
            intents: MemoIntents {
                on_create: link.callback(Msg::Create),
                on_delete: link.callback(Msg::Delete),
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Some(effect) = self.state.apply(msg) {
            self.run(ctx, effect);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let error = self.state.error().map(|error| {
            html! {
                <div role="alert" style="border: 1px solid red; color: darkred; padding: 8px; margin-bottom: 16px;">
                    { error }
                </div>
            }
        });
        let body = if self.state.loading() {
            html! { <div style="padding: 16px; text-align: center;">{ "Loading..." }</div> }
        } else {
            html! { <board::Board memos={self.state.memos()} intents={self.intents.clone()}/> }
        };
        html! {
            <div style="max-width: 48rem; margin: 0 auto; padding: 16px;">
                <h1>{ "Memos" }</h1>
                { for error }
                <writer::Writer intents={self.intents.clone()}/>
                { body }
            </div>
        }
    }
}
