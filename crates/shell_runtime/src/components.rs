//! Shell UI composition: boot, lock screen, window host, launcher,
//! quick settings, and shelf.

mod boot;
mod launcher;
mod lock_screen;
mod quick_settings;
mod shelf;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    boot::BootScreen, launcher::Launcher, lock_screen::LockScreen, quick_settings::QuickSettings,
    shelf::Shelf, window::WindowHost,
};

use crate::{
    model::ClockSnapshot, reducer::ShellAction, runtime_context::use_shell_runtime,
};

const BOOT_DURATION: Duration = Duration::from_millis(3500);

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the full shell: boot splash, then the lock screen or the desktop.
pub fn ShellRoot() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let booted = create_rw_signal(false);

    set_timeout(move || booted.set(true), BOOT_DURATION);

    if let Ok(interval) = set_interval_with_handle(
        move || {
            runtime.dispatch_action(ShellAction::Tick {
                clock: ClockSnapshot::now(),
            })
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let wallpaper_style =
        move || format!("background-image:url('{}');", state.get().wallpaper);

    view! {
        <div class="shell-root" style=wallpaper_style>
            <Show when=move || booted.get() fallback=|| view! { <BootScreen /> }>
                <Show when=move || !state.get().locked fallback=|| view! { <LockScreen /> }>
                    <WindowHost />
                    <Show when=move || state.get().launcher_open fallback=|| ()>
                        <Launcher />
                    </Show>
                    <Show when=move || state.get().quick_settings_open fallback=|| ()>
                        <QuickSettings />
                    </Show>
                    <Shelf />
                </Show>
            </Show>
        </div>
    }
}
