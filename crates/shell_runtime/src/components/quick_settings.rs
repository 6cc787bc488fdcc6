use super::*;

#[component]
pub(super) fn QuickSettings() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    // Cosmetic toggles stay component-local; only tablet mode and sign-out
    // reach the reducer.
    let wifi = create_rw_signal(true);
    let bluetooth = create_rw_signal(false);
    let do_not_disturb = create_rw_signal(false);
    let volume = create_rw_signal(70u8);
    let brightness = create_rw_signal(80u8);

    let tablet_mode = Signal::derive(move || state.get().tablet_mode);

    view! {
        <div class="quick-settings" role="dialog" aria-label="Quick settings">
            <div class="quick-settings-toggles">
                <QuickToggle label="Wi-Fi" value=wifi />
                <QuickToggle label="Bluetooth" value=bluetooth />
                <QuickToggle label="Do not disturb" value=do_not_disturb />
                <button
                    class=move || {
                        if tablet_mode.get() {
                            "quick-toggle pressed"
                        } else {
                            "quick-toggle"
                        }
                    }
                    aria-pressed=move || tablet_mode.get()
                    on:click=move |_| runtime.dispatch_action(ShellAction::ToggleTabletMode)
                >
                    "Tablet mode"
                </button>
            </div>

            <label class="quick-slider">
                "Volume"
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || volume.get().to_string()
                    on:input=move |ev| {
                        volume.set(event_target_value(&ev).parse().unwrap_or(70));
                    }
                />
            </label>
            <label class="quick-slider">
                "Brightness"
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || brightness.get().to_string()
                    on:input=move |ev| {
                        brightness.set(event_target_value(&ev).parse().unwrap_or(80));
                    }
                />
            </label>

            <button
                class="quick-sign-out"
                on:click=move |_| runtime.dispatch_action(ShellAction::SignOut)
            >
                "Sign out"
            </button>
        </div>
    }
}

#[component]
fn QuickToggle(label: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class=move || {
                if value.get() {
                    "quick-toggle pressed"
                } else {
                    "quick-toggle"
                }
            }
            aria-pressed=move || value.get()
            on:click=move |_| value.update(|on| *on = !*on)
        >
            {label}
        </button>
    }
}
