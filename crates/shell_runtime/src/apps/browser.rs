use leptos::*;

const HOME_URL: &str = "https://example.com";

/// Adds a scheme when the address bar input lacks one.
fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return HOME_URL.to_string();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}

#[component]
pub(super) fn BrowserApp() -> impl IntoView {
    let address = create_rw_signal(HOME_URL.to_string());
    let current_url = create_rw_signal(HOME_URL.to_string());

    let navigate = move || {
        let url = normalize_url(&address.get_untracked());
        address.set(url.clone());
        current_url.set(url);
    };

    view! {
        <div class="app app-browser">
            <div class="browser-toolbar">
                <input
                    class="browser-address"
                    type="text"
                    aria-label="Address bar"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            navigate();
                        }
                    }
                />
                <button on:click=move |_| navigate()>"Go"</button>
            </div>
            <iframe
                class="browser-frame"
                src=move || current_url.get()
                title="Browser content"
            ></iframe>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_get_a_scheme() {
        assert_eq!(normalize_url("example.org"), "https://example.org");
    }

    #[test]
    fn explicit_schemes_are_preserved() {
        assert_eq!(normalize_url("http://example.org"), "http://example.org");
        assert_eq!(normalize_url(" https://example.org "), "https://example.org");
    }

    #[test]
    fn empty_input_goes_home() {
        assert_eq!(normalize_url("  "), HOME_URL);
    }
}
