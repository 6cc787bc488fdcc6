//! Preference hydration and runtime-effect execution.
//!
//! Only two values survive a reload: the wallpaper URL and the tablet-mode
//! flag. Both are read once at provider construction and written best-effort
//! when the reducer emits the matching effect; failures are logged and
//! otherwise ignored.

use serde::{de::DeserializeOwned, Serialize};

use crate::model::ShellState;
use crate::reducer::RuntimeEffect;

const WALLPAPER_KEY: &str = "halcyon.wallpaper.v1";
const TABLET_MODE_KEY: &str = "halcyon.tablet_mode.v1";

/// Builds the boot-time shell state, layering persisted preferences over
/// [`ShellState::default`]. The session always boots locked.
pub fn initial_state() -> ShellState {
    let mut state = ShellState::default();
    if let Some(wallpaper) = load_pref::<String>(WALLPAPER_KEY) {
        state.wallpaper = wallpaper;
    }
    if let Some(tablet_mode) = load_pref::<bool>(TABLET_MODE_KEY) {
        state.tablet_mode = tablet_mode;
    }
    state
}

/// Executes one reducer side effect.
pub fn execute_effect(effect: &RuntimeEffect) {
    let result = match effect {
        RuntimeEffect::PersistWallpaper(url) => save_pref(WALLPAPER_KEY, url),
        RuntimeEffect::PersistTabletMode(enabled) => save_pref(TABLET_MODE_KEY, enabled),
    };
    if let Err(err) = result {
        leptos::logging::warn!("preference persist failed: {err}");
    }
}

fn load_pref<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let store = platform_prefs::LocalStoragePrefs::open()?;
        return platform_prefs::load_pref_typed(&store, key);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn save_pref<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let store = platform_prefs::LocalStoragePrefs::open()
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        return platform_prefs::save_pref_typed(&store, key, value);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
        Ok(())
    }
}
