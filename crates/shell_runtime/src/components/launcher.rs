use super::*;
use crate::apps;

#[component]
pub(super) fn Launcher() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let query = create_rw_signal(String::new());

    // Tablet mode with nothing running renders the launcher as a home screen
    // rather than a dismissable overlay.
    let home_screen = Signal::derive(move || {
        let shell = state.get();
        shell.tablet_mode && !shell.has_visible_window()
    });

    let dismiss = move |_| {
        if !home_screen.get_untracked() {
            runtime.dispatch_action(ShellAction::ToggleLauncher);
        }
    };

    view! {
        <div
            class=move || {
                if home_screen.get() {
                    "launcher home-screen"
                } else {
                    "launcher"
                }
            }
            on:mousedown=dismiss
        >
            <div
                class="launcher-panel"
                role="menu"
                aria-label="App launcher"
                on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <input
                    class="launcher-search"
                    type="text"
                    placeholder="Search apps"
                    aria-label="Search apps"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="launcher-grid">
                    <For
                        each=move || apps::search_catalog(&query.get())
                        key=|entry| entry.name
                        let:entry
                    >
                        <button
                            class=format!("launcher-tile {}", entry.accent)
                            on:click=move |_| {
                                runtime.dispatch_action(ShellAction::OpenApp {
                                    app_id: entry.app_id,
                                })
                            }
                        >
                            <span class="launcher-tile-glyph" aria-hidden="true">
                                {entry.glyph}
                            </span>
                            <span class="launcher-tile-label">{entry.name}</span>
                        </button>
                    </For>
                </div>
            </div>
        </div>
    }
}
