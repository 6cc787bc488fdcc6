use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    from_user: bool,
    text: String,
}

/// Offline canned replies. The assistant never leaves the tab.
fn canned_reply(prompt: &str) -> String {
    let lowered = prompt.to_lowercase();
    if lowered.contains("hello") || lowered.contains("hi") {
        return "Hello! I'm the built-in assistant. Ask me about this shell.".to_string();
    }
    if lowered.contains("wallpaper") {
        return "Open the Wallpaper app from the launcher to change the backdrop.".to_string();
    }
    if lowered.contains("tablet") {
        return "Tablet mode lives in quick settings, on the shelf's status pill.".to_string();
    }
    if lowered.contains("window") {
        return "Drag windows by their title bar; the shelf shows what's open.".to_string();
    }
    "I'm a demo running entirely in your browser, so my answers are canned. Try asking about windows, wallpaper, or tablet mode.".to_string()
}

#[component]
pub(super) fn AssistantApp() -> impl IntoView {
    let messages = create_rw_signal(vec![ChatMessage {
        from_user: false,
        text: "Hi! How can I help?".to_string(),
    }]);
    let draft = create_rw_signal(String::new());

    let send = move || {
        let prompt = draft.get_untracked();
        if prompt.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        messages.update(|log| {
            log.push(ChatMessage {
                from_user: true,
                text: prompt.clone(),
            });
            log.push(ChatMessage {
                from_user: false,
                text: canned_reply(&prompt),
            });
        });
    };

    view! {
        <div class="app app-assistant">
            <div class="assistant-log">
                <For
                    each={move || messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    let:entry
                >
                    <p class=if entry.1.from_user {
                        "assistant-message from-user"
                    } else {
                        "assistant-message"
                    }>
                        {entry.1.text}
                    </p>
                </For>
            </div>
            <div class="assistant-input-row">
                <input
                    type="text"
                    placeholder="Ask anything"
                    aria-label="Message the assistant"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button on:click=move |_| send()>"Send"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_gets_a_greeting_back() {
        assert!(canned_reply("Hello there").contains("Hello"));
    }

    #[test]
    fn topic_keywords_route_to_topic_replies() {
        assert!(canned_reply("how do I set a wallpaper?").contains("Wallpaper app"));
        assert!(canned_reply("what is TABLET mode").contains("quick settings"));
    }

    #[test]
    fn anything_else_gets_the_fallback() {
        assert!(canned_reply("weather tomorrow").contains("canned"));
    }
}
