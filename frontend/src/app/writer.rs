use common::MemoCreate;
use yew::prelude::*;

use super::MemoIntents;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Draft {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl Draft {
    // a blank title leaves the draft untouched
    pub(crate) fn submit(&mut self) -> Option<MemoCreate> {
        let payload = MemoCreate::from_form(&self.title, &self.content)?;
        *self = Self::default();
        Some(payload)
    }
}

pub(crate) struct Writer {
    draft: Draft,
}

pub(crate) enum Msg {
    TitleChanged(String),
    ContentChanged(String),
    Submit,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) intents: MemoIntents,
}

impl Component for Writer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: Draft::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TitleChanged(title) => {
                self.draft.title = title;
                true
            }
            Msg::ContentChanged(content) => {
                self.draft.content = content;
                true
            }
            Msg::Submit => match self.draft.submit() {
                Some(payload) => {
                    ctx.props().intents.on_create.emit(payload);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="border: 1px solid black; padding: 8px; margin-bottom: 16px;">
                <h2>{ "New memo" }</h2>
                <form onsubmit={link.callback(|ev: FocusEvent| {
                    ev.prevent_default();
                    Msg::Submit
                })}>
                    <div>
                        <label for="memo-title">{ "Title" }</label>
                        <input
                            id="memo-title"
                            type="text"
                            placeholder="Memo title"
                            required=true
                            value={self.draft.title.clone()}
                            oninput={link.callback(|ev: InputEvent| Msg::TitleChanged(
                                ev
                                    .target_dyn_into::<web_sys::HtmlInputElement>()
                                    .map(|h| h.value())
                                    .unwrap_or_default()
                            ))}
                        />
                    </div>
                    <div>
                        <label for="memo-content">{ "Content" }</label>
                        <textarea
                            id="memo-content"
                            rows="4"
                            placeholder="Memo content (optional)"
                            value={self.draft.content.clone()}
                            oninput={link.callback(|ev: InputEvent| Msg::ContentChanged(
                                ev
                                    .target_dyn_into::<web_sys::HtmlTextAreaElement>()
                                    .map(|h| h.value())
                                    .unwrap_or_default()
                            ))}
                        />
                    </div>
                    <button type="submit">{ "Add memo" }</button>
                </form>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use common::MemoContent;

    use super::*;

    fn draft(title: &str, content: &str) -> Draft {
        Draft {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn submit_trims_and_clears() {
        let mut form = draft("  Test Title ", " Test Content ");
        let payload = form.submit().expect("title is present");

        assert_eq!(payload.title(), "Test Title");
        assert_eq!(payload.content(), &MemoContent::Text("Test Content".into()));
        assert_eq!(form, Draft::default());
    }

    #[test]
    fn blank_content_is_submitted_as_null() {
        let mut form = draft("B", "");
        let payload = form.submit().expect("title is present");
        assert_eq!(payload.content(), &MemoContent::Null);
    }

    #[test]
    fn blank_title_submits_nothing_and_keeps_fields() {
        let mut form = draft("   ", "kept");
        assert_eq!(form.submit(), None);
        assert_eq!(form, draft("   ", "kept"));
    }
}
