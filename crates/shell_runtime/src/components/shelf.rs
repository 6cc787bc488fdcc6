use super::*;
use crate::apps;
use crate::model::AppId;

#[component]
pub(super) fn Shelf() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <footer class="shelf" role="toolbar" aria-label="Shelf">
            <button
                class="shelf-launcher-button"
                aria-label="Open app launcher"
                aria-expanded=move || state.get().launcher_open
                on:click=move |_| runtime.dispatch_action(ShellAction::ToggleLauncher)
            >
                <span class="shelf-glyph" aria-hidden="true">"◉"</span>
            </button>

            <div class="shelf-pins" role="group" aria-label="Pinned apps">
                <For
                    each=move || state.get().pinned
                    key=|app_id| format!("{app_id:?}")
                    let:app_id
                >
                    <ShelfPin app_id=app_id />
                </For>
            </div>

            <button
                class="shelf-status-pill"
                aria-label="Open quick settings"
                aria-expanded=move || state.get().quick_settings_open
                on:click=move |_| runtime.dispatch_action(ShellAction::ToggleQuickSettings)
            >
                <span class="status-time">{move || state.get().clock.format_time()}</span>
                <span class="status-date">{move || state.get().clock.format_date()}</span>
            </button>
        </footer>
    }
}

#[component]
fn ShelfPin(app_id: AppId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let descriptor = apps::app_descriptor(app_id);

    let pin_class = move || {
        let shell = state.get();
        let mut class = format!("shelf-pin {}", descriptor.accent);
        if shell.is_app_open(app_id) {
            class.push_str(" open");
        }
        if shell.active_app() == Some(app_id) {
            class.push_str(" active");
        }
        class
    };

    view! {
        <button
            class=pin_class
            title=descriptor.name
            aria-label=descriptor.name
            on:click=move |_| runtime.dispatch_action(ShellAction::OpenApp { app_id })
        >
            <span class="shelf-pin-glyph" aria-hidden="true">{descriptor.glyph}</span>
            <span class="shelf-pin-dot" aria-hidden="true"></span>
        </button>
    }
}
