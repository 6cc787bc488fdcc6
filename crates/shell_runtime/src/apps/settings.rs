use leptos::*;

struct SettingsRow {
    label: &'static str,
    value: &'static str,
}

struct SettingsSection {
    title: &'static str,
    rows: &'static [SettingsRow],
}

const SECTIONS: [SettingsSection; 3] = [
    SettingsSection {
        title: "About",
        rows: &[
            SettingsRow { label: "Device", value: "Halcyon OS (browser tab)" },
            SettingsRow { label: "Version", value: "0.1.0" },
            SettingsRow { label: "User", value: "Guest" },
        ],
    },
    SettingsSection {
        title: "Display",
        rows: &[
            SettingsRow { label: "Resolution", value: "Follows the tab" },
            SettingsRow { label: "Night light", value: "Off" },
        ],
    },
    SettingsSection {
        title: "Network",
        rows: &[
            SettingsRow { label: "Wi-Fi", value: "HomeNet (simulated)" },
            SettingsRow { label: "Bluetooth", value: "Off" },
        ],
    },
];

#[component]
pub(super) fn SettingsApp() -> impl IntoView {
    view! {
        <div class="app app-settings">
            {SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section class="settings-section">
                            <h3>{section.title}</h3>
                            {section
                                .rows
                                .iter()
                                .map(|row| {
                                    view! {
                                        <div class="settings-row">
                                            <span class="settings-label">{row.label}</span>
                                            <span class="settings-value">{row.value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
