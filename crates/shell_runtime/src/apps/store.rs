use leptos::*;

use crate::apps::{self, AppHostProps};
use crate::model::AppId;

#[component]
pub(super) fn StoreApp(host: AppHostProps) -> impl IntoView {
    // Install state is presentation-only; the shell tracks the real pin list.
    let installed = create_rw_signal({
        let mut ids = apps::default_pinned_apps();
        ids.push(AppId::Store);
        ids
    });
    let query = create_rw_signal(String::new());

    let install = move |app_id: AppId| {
        if installed.get_untracked().contains(&app_id) {
            return;
        }
        installed.update(|ids| ids.push(app_id));
        host.on_install_app.call(app_id);
    };

    view! {
        <div class="app app-store">
            <div class="store-header">
                <strong>"App Store"</strong>
                <input
                    class="store-search"
                    type="text"
                    placeholder="Search for apps"
                    aria-label="Search the store"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <div class="store-grid">
                <For
                    each=move || apps::search_catalog(&query.get())
                    key=|entry| entry.name
                    let:entry
                >
                    <div class="store-card">
                        <div class=format!("store-card-icon {}", entry.accent) aria-hidden="true">
                            {entry.glyph}
                        </div>
                        <div class="store-card-body">
                            <strong>{entry.name}</strong>
                            <span class="store-card-blurb">"Native app for Halcyon OS."</span>
                        </div>
                        <button
                            class=move || {
                                if installed.get().contains(&entry.app_id) {
                                    "store-install installed"
                                } else {
                                    "store-install"
                                }
                            }
                            disabled=move || installed.get().contains(&entry.app_id)
                            on:click=move |_| install(entry.app_id)
                        >
                            {move || {
                                if installed.get().contains(&entry.app_id) {
                                    "Installed"
                                } else {
                                    "Install"
                                }
                            }}
                        </button>
                    </div>
                </For>
            </div>
        </div>
    }
}
