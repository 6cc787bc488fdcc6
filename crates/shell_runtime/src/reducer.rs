//! Reducer actions, side-effect intents, and transition logic for the shell.

use thiserror::Error;

use crate::apps;
use crate::model::{
    AppId, ClockSnapshot, ShellState, WindowId, WindowRecord, WindowRect, CASCADE_ORIGIN_PX,
    CASCADE_STEP_PX,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open an app, focusing its existing window if one is already open.
    OpenApp {
        /// App to open or refocus.
        app_id: AppId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Focus (and raise) a window, restoring it if minimized.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and windowed. No-op in tablet mode.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Commit a drag's final window position.
    MoveWindow {
        /// Window that was dragged.
        window_id: WindowId,
        /// New left offset in pixels.
        x: i32,
        /// New top offset in pixels.
        y: i32,
    },
    /// Toggle the app launcher open/closed.
    ToggleLauncher,
    /// Toggle the quick-settings panel open/closed.
    ToggleQuickSettings,
    /// Flip tablet mode and re-shape every open window for the new mode.
    ToggleTabletMode,
    /// Set the desktop wallpaper.
    SetWallpaper {
        /// Wallpaper image URL.
        url: String,
    },
    /// Pin an app to the shelf if not already pinned.
    InstallApp {
        /// App to pin.
        app_id: AppId,
    },
    /// Unlock the session from the lock screen.
    Unlock,
    /// Lock the session and discard the window set.
    SignOut,
    /// Refresh the rendered wall clock.
    Tick {
        /// New clock snapshot.
        clock: ClockSnapshot,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_shell`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Persist the selected wallpaper URL.
    PersistWallpaper(String),
    /// Persist the tablet-mode flag.
    PersistTabletMode(bool),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ShellError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The session is locked and the action is not allowed from the lock screen.
    #[error("session is locked")]
    Locked,
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side effects.
///
/// This function is the authoritative transition engine for window lifecycle,
/// surface visibility, and session lock state. Every successful transition ends
/// with one [`reconcile`] pass, which is the only place the tablet-mode policy
/// and the active-window invariant are enforced.
///
/// # Errors
///
/// Returns [`ShellError::WindowNotFound`] when an action references a window
/// that is not present, and [`ShellError::Locked`] for any action other than
/// unlock or clock ticks while the session is locked. Errors leave the state
/// untouched.
pub fn reduce_shell(
    state: &mut ShellState,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ShellError> {
    if state.locked && !matches!(action, ShellAction::Unlock | ShellAction::Tick { .. }) {
        return Err(ShellError::Locked);
    }

    let mut effects = Vec::new();
    match action {
        ShellAction::OpenApp { app_id } => {
            let top = state.max_z().saturating_add(1);
            if let Some(index) = state.windows.iter().position(|w| w.app_id == app_id) {
                let window_id = state.windows[index].id;
                let window = &mut state.windows[index];
                window.minimized = false;
                window.z_index = top;
                state.active_window = Some(window_id);
            } else {
                let window_id = next_window_id(state);
                let cascade = CASCADE_ORIGIN_PX + CASCADE_STEP_PX * state.windows.len() as i32;
                let record = WindowRecord {
                    id: window_id,
                    app_id,
                    title: apps::app_descriptor(app_id).name.to_string(),
                    rect: WindowRect::at(cascade, cascade),
                    z_index: top,
                    minimized: false,
                    maximized: state.tablet_mode,
                };
                state.windows.push(record);
                state.active_window = Some(window_id);
            }
            state.launcher_open = false;
        }
        ShellAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::MinimizeWindow { window_id } => {
            find_window_mut(state, window_id)?.minimized = true;
        }
        ShellAction::FocusWindow { window_id } => {
            let top = state.max_z().saturating_add(1);
            let window = find_window_mut(state, window_id)?;
            window.minimized = false;
            window.z_index = top;
            state.active_window = Some(window_id);
            state.launcher_open = false;
        }
        ShellAction::ToggleMaximize { window_id } => {
            let tablet_mode = state.tablet_mode;
            let window = find_window_mut(state, window_id)?;
            if !tablet_mode {
                window.maximized = !window.maximized;
            }
        }
        ShellAction::MoveWindow { window_id, x, y } => {
            let window = find_window_mut(state, window_id)?;
            window.rect.x = x;
            window.rect.y = y;
        }
        ShellAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
            state.quick_settings_open = false;
        }
        ShellAction::ToggleQuickSettings => {
            state.quick_settings_open = !state.quick_settings_open;
            state.launcher_open = false;
        }
        ShellAction::ToggleTabletMode => {
            state.tablet_mode = !state.tablet_mode;
            for window in &mut state.windows {
                window.maximized = state.tablet_mode;
            }
            state.launcher_open = false;
            effects.push(RuntimeEffect::PersistTabletMode(state.tablet_mode));
        }
        ShellAction::SetWallpaper { url } => {
            state.wallpaper = url.clone();
            effects.push(RuntimeEffect::PersistWallpaper(url));
        }
        ShellAction::InstallApp { app_id } => {
            if !state.pinned.contains(&app_id) {
                state.pinned.push(app_id);
            }
        }
        ShellAction::Unlock => {
            state.locked = false;
        }
        ShellAction::SignOut => {
            state.locked = true;
            state.windows.clear();
            state.active_window = None;
            state.launcher_open = false;
            state.quick_settings_open = false;
        }
        ShellAction::Tick { clock } => {
            state.clock = clock;
        }
    }

    reconcile(state);
    Ok(effects)
}

fn next_window_id(state: &mut ShellState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut ShellState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ShellError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ShellError::WindowNotFound)
}

/// Restores the cross-field invariants after a transition.
///
/// The active pointer may only reference an existing, non-minimized window;
/// it is cleared otherwise, never re-targeted. An idle unlocked tablet always
/// shows the launcher, and a locked session shows no overlay surfaces.
fn reconcile(state: &mut ShellState) {
    if let Some(active) = state.active_window {
        let visible = state
            .windows
            .iter()
            .any(|w| w.id == active && !w.minimized);
        if !visible {
            state.active_window = None;
        }
    }

    if state.locked {
        state.launcher_open = false;
        state.quick_settings_open = false;
    } else if state.tablet_mode && !state.has_visible_window() {
        state.launcher_open = true;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn unlocked() -> ShellState {
        let mut state = ShellState::default();
        state.locked = false;
        state
    }

    fn open(state: &mut ShellState, app_id: AppId) -> WindowId {
        reduce_shell(state, ShellAction::OpenApp { app_id }).expect("open app");
        state.active_window.expect("active window after open")
    }

    #[test]
    fn open_app_creates_cascaded_window_on_top() {
        let mut state = unlocked();

        let first = open(&mut state, AppId::Browser);
        let second = open(&mut state, AppId::Terminal);

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.active_window, Some(second));
        let rects: Vec<WindowRect> = state.windows.iter().map(|w| w.rect).collect();
        assert_eq!(rects[0], WindowRect { x: 60, y: 60, w: DEFAULT_WINDOW_WIDTH, h: DEFAULT_WINDOW_HEIGHT });
        assert_eq!(rects[1], WindowRect { x: 90, y: 90, w: DEFAULT_WINDOW_WIDTH, h: DEFAULT_WINDOW_HEIGHT });
        assert_eq!(state.window(first).unwrap().z_index, 1);
        assert_eq!(state.window(second).unwrap().z_index, 2);
    }

    #[test]
    fn reopening_an_app_refocuses_the_existing_window() {
        let mut state = unlocked();

        let browser = open(&mut state, AppId::Browser);
        let files = open(&mut state, AppId::Files);
        reduce_shell(&mut state, ShellAction::MinimizeWindow { window_id: browser })
            .expect("minimize");

        let refocused = open(&mut state, AppId::Browser);

        assert_eq!(refocused, browser);
        assert_eq!(state.windows.len(), 2);
        let record = state.window(browser).unwrap();
        assert!(!record.minimized);
        assert!(record.z_index > state.window(files).unwrap().z_index);
    }

    #[test]
    fn window_ids_are_never_reused() {
        let mut state = unlocked();

        let first = open(&mut state, AppId::Notes);
        reduce_shell(&mut state, ShellAction::CloseWindow { window_id: first }).expect("close");
        let second = open(&mut state, AppId::Notes);

        assert_ne!(first, second);
        assert!(second.0 > first.0);
    }

    #[test]
    fn open_from_launcher_closes_the_launcher() {
        let mut state = unlocked();
        reduce_shell(&mut state, ShellAction::ToggleLauncher).expect("open launcher");
        assert!(state.launcher_open);

        open(&mut state, AppId::Calculator);

        assert!(!state.launcher_open);
    }

    #[test]
    fn closing_the_active_window_does_not_promote_another() {
        let mut state = unlocked();

        open(&mut state, AppId::Browser);
        let terminal = open(&mut state, AppId::Terminal);

        reduce_shell(&mut state, ShellAction::CloseWindow { window_id: terminal })
            .expect("close");

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn minimizing_the_active_window_clears_the_active_pointer() {
        let mut state = unlocked();

        open(&mut state, AppId::Browser);
        let files = open(&mut state, AppId::Files);

        reduce_shell(&mut state, ShellAction::MinimizeWindow { window_id: files })
            .expect("minimize");

        assert_eq!(state.active_window, None);
        assert!(state.window(files).unwrap().minimized);
    }

    #[test]
    fn closing_a_background_window_keeps_the_active_pointer() {
        let mut state = unlocked();

        let browser = open(&mut state, AppId::Browser);
        let files = open(&mut state, AppId::Files);

        reduce_shell(&mut state, ShellAction::CloseWindow { window_id: browser })
            .expect("close");

        assert_eq!(state.active_window, Some(files));
    }

    #[test]
    fn focus_raises_and_restores_a_minimized_window() {
        let mut state = unlocked();

        let browser = open(&mut state, AppId::Browser);
        open(&mut state, AppId::Files);
        reduce_shell(&mut state, ShellAction::MinimizeWindow { window_id: browser })
            .expect("minimize");

        reduce_shell(&mut state, ShellAction::FocusWindow { window_id: browser })
            .expect("focus");

        let record = state.window(browser).unwrap();
        assert!(!record.minimized);
        assert_eq!(record.z_index, 3);
        assert_eq!(state.active_window, Some(browser));
    }

    #[test]
    fn z_indices_strictly_increase_across_focus_changes() {
        let mut state = unlocked();

        let browser = open(&mut state, AppId::Browser);
        let files = open(&mut state, AppId::Files);
        reduce_shell(&mut state, ShellAction::FocusWindow { window_id: browser })
            .expect("focus browser");
        reduce_shell(&mut state, ShellAction::FocusWindow { window_id: files })
            .expect("focus files");

        assert_eq!(state.window(browser).unwrap().z_index, 3);
        assert_eq!(state.window(files).unwrap().z_index, 4);
    }

    #[test]
    fn referencing_a_missing_window_reports_not_found() {
        let mut state = unlocked();
        let before = state.clone();

        let result = reduce_shell(
            &mut state,
            ShellAction::CloseWindow { window_id: WindowId(99) },
        );

        assert_eq!(result, Err(ShellError::WindowNotFound));
        assert_eq!(state, before);
    }

    #[test]
    fn actions_are_rejected_while_locked() {
        let mut state = ShellState::default();
        let before = state.clone();

        let result = reduce_shell(&mut state, ShellAction::OpenApp { app_id: AppId::Browser });

        assert_eq!(result, Err(ShellError::Locked));
        assert_eq!(state, before);
    }

    #[test]
    fn clock_ticks_are_allowed_while_locked() {
        let mut state = ShellState::default();
        let clock = ClockSnapshot { hour: 9, minute: 41, ..ClockSnapshot::default() };

        reduce_shell(&mut state, ShellAction::Tick { clock }).expect("tick");

        assert_eq!(state.clock, clock);
    }

    #[test]
    fn sign_out_clears_the_session_and_relocks() {
        let mut state = unlocked();
        open(&mut state, AppId::Browser);
        reduce_shell(&mut state, ShellAction::ToggleQuickSettings).expect("open quick settings");

        reduce_shell(&mut state, ShellAction::SignOut).expect("sign out");

        assert!(state.locked);
        assert!(state.windows.is_empty());
        assert_eq!(state.active_window, None);
        assert!(!state.launcher_open);
        assert!(!state.quick_settings_open);
    }

    #[test]
    fn unlock_in_tablet_mode_opens_the_launcher() {
        let mut state = ShellState::default();
        state.tablet_mode = true;

        reduce_shell(&mut state, ShellAction::Unlock).expect("unlock");

        assert!(!state.locked);
        assert!(state.launcher_open);
    }

    #[test]
    fn unlock_in_desktop_mode_keeps_the_launcher_closed() {
        let mut state = ShellState::default();

        reduce_shell(&mut state, ShellAction::Unlock).expect("unlock");

        assert!(!state.launcher_open);
    }

    #[test]
    fn toggle_maximize_flips_in_desktop_mode_and_keeps_geometry() {
        let mut state = unlocked();
        let browser = open(&mut state, AppId::Browser);
        let rect = state.window(browser).unwrap().rect;

        reduce_shell(&mut state, ShellAction::ToggleMaximize { window_id: browser })
            .expect("maximize");
        assert!(state.window(browser).unwrap().maximized);
        assert_eq!(state.window(browser).unwrap().rect, rect);

        reduce_shell(&mut state, ShellAction::ToggleMaximize { window_id: browser })
            .expect("restore");
        assert!(!state.window(browser).unwrap().maximized);
    }

    #[test]
    fn toggle_maximize_is_a_noop_in_tablet_mode() {
        let mut state = unlocked();
        state.tablet_mode = true;
        let browser = open(&mut state, AppId::Browser);
        assert!(state.window(browser).unwrap().maximized);

        reduce_shell(&mut state, ShellAction::ToggleMaximize { window_id: browser })
            .expect("toggle");

        assert!(state.window(browser).unwrap().maximized);
    }

    #[test]
    fn move_window_updates_only_the_origin() {
        let mut state = unlocked();
        let browser = open(&mut state, AppId::Browser);

        reduce_shell(
            &mut state,
            ShellAction::MoveWindow { window_id: browser, x: 200, y: 120 },
        )
        .expect("move");

        let rect = state.window(browser).unwrap().rect;
        assert_eq!((rect.x, rect.y), (200, 120));
        assert_eq!((rect.w, rect.h), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn launcher_and_quick_settings_are_mutually_exclusive() {
        let mut state = unlocked();

        reduce_shell(&mut state, ShellAction::ToggleLauncher).expect("launcher");
        reduce_shell(&mut state, ShellAction::ToggleQuickSettings).expect("quick settings");
        assert!(!state.launcher_open);
        assert!(state.quick_settings_open);

        reduce_shell(&mut state, ShellAction::ToggleLauncher).expect("launcher again");
        assert!(state.launcher_open);
        assert!(!state.quick_settings_open);
    }

    #[test]
    fn tablet_mode_maximizes_every_window_and_persists() {
        let mut state = unlocked();
        let browser = open(&mut state, AppId::Browser);
        let files = open(&mut state, AppId::Files);
        let browser_rect = state.window(browser).unwrap().rect;
        let files_rect = state.window(files).unwrap().rect;

        let effects = reduce_shell(&mut state, ShellAction::ToggleTabletMode).expect("tablet on");

        assert!(state.tablet_mode);
        assert!(state.window(browser).unwrap().maximized);
        assert!(state.window(files).unwrap().maximized);
        assert_eq!(state.window(browser).unwrap().rect, browser_rect);
        assert_eq!(state.window(files).unwrap().rect, files_rect);
        assert_eq!(effects, vec![RuntimeEffect::PersistTabletMode(true)]);

        let effects = reduce_shell(&mut state, ShellAction::ToggleTabletMode).expect("tablet off");

        assert!(!state.window(browser).unwrap().maximized);
        assert_eq!(state.window(browser).unwrap().rect, browser_rect);
        assert_eq!(state.window(files).unwrap().rect, files_rect);
        assert_eq!(effects, vec![RuntimeEffect::PersistTabletMode(false)]);
    }

    #[test]
    fn entering_tablet_mode_with_no_windows_opens_the_launcher() {
        let mut state = unlocked();

        reduce_shell(&mut state, ShellAction::ToggleTabletMode).expect("tablet on");

        assert!(state.launcher_open);
    }

    #[test]
    fn leaving_tablet_mode_closes_the_forced_launcher() {
        let mut state = unlocked();
        reduce_shell(&mut state, ShellAction::ToggleTabletMode).expect("tablet on");
        assert!(state.launcher_open);

        reduce_shell(&mut state, ShellAction::ToggleTabletMode).expect("tablet off");

        assert!(!state.launcher_open);
    }

    #[test]
    fn closing_the_last_tablet_window_reopens_the_launcher() {
        let mut state = unlocked();
        state.tablet_mode = true;
        let browser = open(&mut state, AppId::Browser);
        assert!(!state.launcher_open);

        reduce_shell(&mut state, ShellAction::CloseWindow { window_id: browser })
            .expect("close");

        assert!(state.launcher_open);
    }

    #[test]
    fn minimizing_the_last_tablet_window_reopens_the_launcher() {
        let mut state = unlocked();
        state.tablet_mode = true;
        let browser = open(&mut state, AppId::Browser);

        reduce_shell(&mut state, ShellAction::MinimizeWindow { window_id: browser })
            .expect("minimize");

        assert!(state.launcher_open);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn launcher_cannot_be_dismissed_on_an_idle_tablet() {
        let mut state = unlocked();
        state.tablet_mode = true;
        reduce_shell(&mut state, ShellAction::Tick { clock: ClockSnapshot::default() })
            .expect("tick");
        assert!(state.launcher_open);

        reduce_shell(&mut state, ShellAction::ToggleLauncher).expect("toggle");

        assert!(state.launcher_open);
    }

    #[test]
    fn quick_settings_on_an_idle_tablet_keeps_the_launcher_open() {
        let mut state = unlocked();
        state.tablet_mode = true;
        reduce_shell(&mut state, ShellAction::Tick { clock: ClockSnapshot::default() })
            .expect("tick");

        reduce_shell(&mut state, ShellAction::ToggleQuickSettings).expect("quick settings");

        assert!(state.quick_settings_open);
        assert!(state.launcher_open);
    }

    #[test]
    fn windows_opened_in_tablet_mode_start_maximized() {
        let mut state = unlocked();
        state.tablet_mode = true;

        let browser = open(&mut state, AppId::Browser);

        assert!(state.window(browser).unwrap().maximized);
        assert!(!state.launcher_open);
    }

    #[test]
    fn set_wallpaper_emits_a_persist_effect() {
        let mut state = unlocked();

        let effects = reduce_shell(
            &mut state,
            ShellAction::SetWallpaper { url: "https://example.com/w.jpg".to_string() },
        )
        .expect("set wallpaper");

        assert_eq!(state.wallpaper, "https://example.com/w.jpg");
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistWallpaper("https://example.com/w.jpg".to_string())]
        );
    }

    #[test]
    fn install_app_pins_once() {
        let mut state = unlocked();
        assert!(!state.pinned.contains(&AppId::Terminal));

        reduce_shell(&mut state, ShellAction::InstallApp { app_id: AppId::Terminal })
            .expect("install");
        reduce_shell(&mut state, ShellAction::InstallApp { app_id: AppId::Terminal })
            .expect("install again");

        let count = state.pinned.iter().filter(|a| **a == AppId::Terminal).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn at_most_one_window_per_app() {
        let mut state = unlocked();

        open(&mut state, AppId::Browser);
        open(&mut state, AppId::Browser);
        open(&mut state, AppId::Browser);

        assert_eq!(state.windows.len(), 1);
    }
}
