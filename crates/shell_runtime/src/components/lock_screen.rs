use super::*;

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    // Any password unlocks; the field exists for the ritual, not for security.
    let password = create_rw_signal(String::new());

    let unlock = move || runtime.dispatch_action(ShellAction::Unlock);

    view! {
        <div class="lock-screen">
            <div class="lock-clock">
                <span class="lock-time">{move || state.get().clock.format_time()}</span>
                <span class="lock-date">{move || state.get().clock.format_long_date()}</span>
            </div>
            <div class="lock-form">
                <div class="lock-avatar" aria-hidden="true">"G"</div>
                <span class="lock-user">"Guest"</span>
                <input
                    type="password"
                    placeholder="Password"
                    aria-label="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            unlock();
                        }
                    }
                />
                <button class="lock-unlock" on:click=move |_| unlock()>
                    "Unlock"
                </button>
            </div>
        </div>
    }
}
