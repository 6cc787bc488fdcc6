//! Browser-hosted desktop shell runtime.
//!
//! State lives in a single [`model::ShellState`] value and only changes through
//! [`reducer::reduce_shell`]. The Leptos layers in [`components`] read the state
//! signal and dispatch [`reducer::ShellAction`] values; they never mutate shell
//! state directly.

pub mod apps;
pub mod components;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;

pub use components::ShellRoot;
pub use model::{AppId, ShellState, WindowId};
pub use reducer::{reduce_shell, RuntimeEffect, ShellAction, ShellError};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
