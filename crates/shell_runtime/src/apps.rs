//! Static app catalog and the window-contents dispatch for every hosted app.

mod assistant;
mod browser;
mod calculator;
mod files;
mod settings;
mod store;
mod terminal;
mod wallpaper_picker;

use leptos::*;

use crate::model::{AppId, WindowRecord};

use self::{
    assistant::AssistantApp, browser::BrowserApp, calculator::CalculatorApp, files::FilesApp,
    settings::SettingsApp, store::StoreApp, terminal::TerminalApp,
    wallpaper_picker::WallpaperPickerApp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub name: &'static str,
    /// Single-character launcher glyph.
    pub glyph: &'static str,
    /// CSS class selecting the icon tile color.
    pub accent: &'static str,
}

const APP_CATALOG: [AppDescriptor; 11] = [
    AppDescriptor {
        app_id: AppId::Browser,
        name: "Browser",
        glyph: "B",
        accent: "accent-blue",
    },
    AppDescriptor {
        app_id: AppId::Assistant,
        name: "Assistant",
        glyph: "A",
        accent: "accent-purple",
    },
    AppDescriptor {
        app_id: AppId::Files,
        name: "Files",
        glyph: "F",
        accent: "accent-amber",
    },
    AppDescriptor {
        app_id: AppId::Wallpaper,
        name: "Wallpaper",
        glyph: "W",
        accent: "accent-teal",
    },
    AppDescriptor {
        app_id: AppId::Settings,
        name: "Settings",
        glyph: "S",
        accent: "accent-slate",
    },
    AppDescriptor {
        app_id: AppId::Store,
        name: "Store",
        glyph: "S",
        accent: "accent-pink",
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        name: "Terminal",
        glyph: "T",
        accent: "accent-green",
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        name: "Calculator",
        glyph: "C",
        accent: "accent-orange",
    },
    AppDescriptor {
        app_id: AppId::Camera,
        name: "Camera",
        glyph: "C",
        accent: "accent-red",
    },
    AppDescriptor {
        app_id: AppId::Notes,
        name: "Notes",
        glyph: "N",
        accent: "accent-yellow",
    },
    AppDescriptor {
        app_id: AppId::Gallery,
        name: "Gallery",
        glyph: "G",
        accent: "accent-indigo",
    },
];

pub const WALLPAPERS: [&str; 7] = [
    "https://images.unsplash.com/photo-1477346611705-65d1883cee1e?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1505765050516-f72dcac9c60e?auto=format&fit=crop&w=2070&q=80",
];

pub fn default_wallpaper() -> &'static str {
    WALLPAPERS[0]
}

pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    match app_id {
        AppId::Browser => &APP_CATALOG[0],
        AppId::Assistant => &APP_CATALOG[1],
        AppId::Files => &APP_CATALOG[2],
        AppId::Wallpaper => &APP_CATALOG[3],
        AppId::Settings => &APP_CATALOG[4],
        AppId::Store => &APP_CATALOG[5],
        AppId::Terminal => &APP_CATALOG[6],
        AppId::Calculator => &APP_CATALOG[7],
        AppId::Camera => &APP_CATALOG[8],
        AppId::Notes => &APP_CATALOG[9],
        AppId::Gallery => &APP_CATALOG[10],
    }
}

/// Apps pinned to the shelf for a fresh session.
pub fn default_pinned_apps() -> Vec<AppId> {
    vec![
        AppId::Browser,
        AppId::Assistant,
        AppId::Files,
        AppId::Wallpaper,
        AppId::Settings,
        AppId::Store,
    ]
}

/// Case-insensitive substring search over catalog display names.
pub fn search_catalog(query: &str) -> Vec<AppDescriptor> {
    let needle = query.trim().to_lowercase();
    app_catalog()
        .iter()
        .copied()
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .collect()
}

/// Props the window host hands to every mounted app view. Nothing else crosses
/// the host/app boundary.
#[derive(Clone, Copy)]
pub struct AppHostProps {
    pub wallpaper: Signal<String>,
    pub on_set_wallpaper: Callback<String>,
    pub on_install_app: Callback<AppId>,
}

pub fn render_window_contents(window: &WindowRecord, host: AppHostProps) -> View {
    match window.app_id {
        AppId::Browser => view! { <BrowserApp /> }.into_view(),
        AppId::Assistant => view! { <AssistantApp /> }.into_view(),
        AppId::Files => view! { <FilesApp /> }.into_view(),
        AppId::Wallpaper => view! { <WallpaperPickerApp host=host /> }.into_view(),
        AppId::Settings => view! { <SettingsApp /> }.into_view(),
        AppId::Store => view! { <StoreApp host=host /> }.into_view(),
        AppId::Terminal => view! { <TerminalApp /> }.into_view(),
        AppId::Calculator => view! { <CalculatorApp /> }.into_view(),
        AppId::Camera => render_app_placeholder("Camera"),
        AppId::Notes => render_app_placeholder("Notes"),
        AppId::Gallery => render_app_placeholder("Gallery"),
    }
}

fn render_app_placeholder(name: &'static str) -> View {
    view! {
        <div class="app app-placeholder">
            <p><strong>{name}</strong></p>
            <p>"This app has no desktop build yet."</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_has_one_descriptor_per_app() {
        for entry in app_catalog() {
            let matches = app_catalog()
                .iter()
                .filter(|other| other.app_id == entry.app_id)
                .count();
            assert_eq!(matches, 1, "duplicate descriptor for {:?}", entry.app_id);
        }
    }

    #[test]
    fn every_app_resolves_its_own_descriptor() {
        for entry in app_catalog() {
            assert_eq!(app_descriptor(entry.app_id), entry);
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let hits = search_catalog("TERM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].app_id, AppId::Terminal);
    }

    #[test]
    fn empty_query_returns_the_whole_catalog() {
        assert_eq!(search_catalog("").len(), app_catalog().len());
        assert_eq!(search_catalog("   ").len(), app_catalog().len());
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert_eq!(search_catalog("zzzz"), Vec::new());
    }

    #[test]
    fn default_pins_are_catalog_members() {
        for app_id in default_pinned_apps() {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
    }
}
