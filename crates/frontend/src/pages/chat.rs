//! Assistant chat panel shown beside authenticated pages

use super::user_message;
use crate::services::use_services;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
struct ChatLine {
    speaker: Speaker,
    text: String,
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let services = use_services();
    let lines = use_state(Vec::<ChatLine>::new);
    let draft = use_state(String::new);
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_submit = {
        let lines = lines.clone();
        let draft = draft.clone();
        let sending = sending.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = draft.trim().to_string();
            if message.is_empty() || *sending {
                return;
            }

            let chat = services.chat.clone();
            let lines = lines.clone();
            let sending = sending.clone();
            let error = error.clone();
            draft.set(String::new());

            spawn_local(async move {
                sending.set(true);
                error.set(None);

                let mut history = (*lines).clone();
                history.push(ChatLine {
                    speaker: Speaker::User,
                    text: message.clone(),
                });
                lines.set(history.clone());

                match chat.send(&message).await {
                    Ok(reply) => {
                        history.push(ChatLine {
                            speaker: Speaker::Assistant,
                            text: reply,
                        });
                        lines.set(history);
                    }
                    Err(e) => {
                        tracing::warn!("Chat request failed: {e}");
                        error.set(Some(user_message(&e)));
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <aside>
            <h2>{"Assistant"}</h2>
            <ul>
                { for lines.iter().map(|line| {
                    let who = match line.speaker {
                        Speaker::User => "You",
                        Speaker::Assistant => "Assistant",
                    };
                    html! { <li><strong>{who}{": "}</strong>{line.text.clone()}</li> }
                }) }
            </ul>
            if let Some(error) = &*error {
                <p>{error.clone()}</p>
            }
            <form onsubmit={on_submit}>
                <input type="text" value={(*draft).clone()} oninput={on_input}
                    placeholder="Ask about a listing" disabled={*sending} />
            </form>
        </aside>
    }
}
