use super::*;
use crate::apps::{self, AppHostProps};
use crate::model::WindowId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    pointer_start: (i32, i32),
    origin_start: (i32, i32),
}

#[component]
pub(super) fn WindowHost() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <div class="window-layer">
            <For
                each=move || state.get().display_windows()
                key=|win| win.id.0
                let:win
            >
                <WindowFrame window_id=win.id />
            </For>
        </div>
    }
}

#[component]
fn WindowFrame(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || {
        state.get().windows.into_iter().find(|w| w.id == window_id)
    });
    let tablet_mode = Signal::derive(move || state.get().tablet_mode);

    // Drag geometry stays local until release; only the final position goes
    // through the reducer.
    let drag = create_rw_signal(None::<DragSession>);
    let live_origin = create_rw_signal(None::<(i32, i32)>);

    let host = AppHostProps {
        wallpaper: Signal::derive(move || state.get().wallpaper),
        on_set_wallpaper: Callback::new(move |url| {
            runtime.dispatch_action(ShellAction::SetWallpaper { url })
        }),
        on_install_app: Callback::new(move |app_id| {
            runtime.dispatch_action(ShellAction::InstallApp { app_id })
        }),
    };

    let focus = move |_| {
        if state.get_untracked().active_window != Some(window_id) {
            runtime.dispatch_action(ShellAction::FocusWindow { window_id });
        }
    };
    let minimize = move |_| runtime.dispatch_action(ShellAction::MinimizeWindow { window_id });
    let close = move |_| runtime.dispatch_action(ShellAction::CloseWindow { window_id });
    let toggle_maximize =
        move |_| runtime.dispatch_action(ShellAction::ToggleMaximize { window_id });

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || tablet_mode.get_untracked() {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        if win.maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::FocusWindow { window_id });
        drag.set(Some(DragSession {
            pointer_start: (ev.client_x(), ev.client_y()),
            origin_start: (win.rect.x, win.rect.y),
        }));
    };
    let update_move = move |ev: web_sys::PointerEvent| {
        if let Some(session) = drag.get_untracked() {
            let dx = ev.client_x() - session.pointer_start.0;
            let dy = ev.client_y() - session.pointer_start.1;
            live_origin.set(Some((
                session.origin_start.0 + dx,
                session.origin_start.1 + dy,
            )));
        }
    };
    let end_move = move |_: web_sys::PointerEvent| {
        if drag.get_untracked().is_none() {
            return;
        }
        drag.set(None);
        if let Some((x, y)) = live_origin.get_untracked() {
            live_origin.set(None);
            runtime.dispatch_action(ShellAction::MoveWindow { window_id, x, y });
        }
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let fullscreen = win.maximized || tablet_mode.get();
                let (x, y) = live_origin.get().unwrap_or((win.rect.x, win.rect.y));
                let style = if fullscreen {
                    format!("z-index:{};", win.z_index)
                } else {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        x, y, win.rect.w, win.rect.h, win.z_index
                    )
                };
                let active_class = if state.get().active_window == Some(win.id) {
                    " active"
                } else {
                    ""
                };
                let maximized_class = if fullscreen { " maximized" } else { "" };
                let window_record = win.clone();

                view! {
                    <section
                        class=format!("shell-window{}{}", active_class, maximized_class)
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=win.title.clone()
                    >
                        <Show when=move || !tablet_mode.get() fallback=|| ()>
                            <header
                                class="titlebar"
                                on:pointerdown=begin_move
                                on:pointermove=update_move
                                on:pointerup=end_move
                                on:pointercancel=end_move
                            >
                                <span class="titlebar-title">{win.title.clone()}</span>
                                <div class="titlebar-controls">
                                    <button
                                        aria-label="Minimize window"
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            minimize(ev);
                                        }
                                    >
                                        "–"
                                    </button>
                                    <button
                                        aria-label=if win.maximized {
                                            "Restore window"
                                        } else {
                                            "Maximize window"
                                        }
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            toggle_maximize(ev);
                                        }
                                    >
                                        "▢"
                                    </button>
                                    <button
                                        aria-label="Close window"
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            close(ev);
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </header>
                        </Show>
                        <div class="window-body">
                            {apps::render_window_contents(&window_record, host)}
                        </div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}
