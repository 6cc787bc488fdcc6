//! Runtime provider and context wiring for the shell.
//!
//! [`ShellProvider`] owns the single state signal and the dispatch callback.
//! Dispatch runs the reducer against a working copy, so an `Err` never leaves
//! partial mutations behind; reducer errors are logged and dropped.

use leptos::*;

use crate::{
    model::ShellState,
    persistence,
    reducer::{reduce_shell, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Reactive shell state signal.
    pub state: RwSignal<ShellState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and hydrates
/// persisted preferences.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(persistence::initial_state());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();

        match reduce_shell(&mut shell, action) {
            Ok(effects) => {
                if shell != previous {
                    state.set(shell);
                }
                for effect in &effects {
                    persistence::execute_effect(effect);
                }
            }
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    provide_context(ShellRuntimeContext { state, dispatch });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
