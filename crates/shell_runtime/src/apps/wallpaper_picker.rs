use leptos::*;

use crate::apps::{AppHostProps, WALLPAPERS};

#[component]
pub(super) fn WallpaperPickerApp(host: AppHostProps) -> impl IntoView {
    view! {
        <div class="app app-wallpaper">
            <p class="wallpaper-hint">"Pick a backdrop. The choice survives a reload."</p>
            <div class="wallpaper-grid">
                {WALLPAPERS
                    .iter()
                    .copied()
                    .map(|url| {
                        let current = host.wallpaper;
                        let selected = move || current.get() == url;
                        view! {
                            <button
                                class=move || {
                                    if selected() {
                                        "wallpaper-swatch selected"
                                    } else {
                                        "wallpaper-swatch"
                                    }
                                }
                                aria-pressed=selected
                                style=format!("background-image:url('{url}');")
                                on:click=move |_| host.on_set_wallpaper.call(url.to_string())
                            >
                                <span class="visually-hidden">"Use this wallpaper"</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
