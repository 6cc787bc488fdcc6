use leptos::*;
use leptos_meta::*;
use shell_runtime::{ShellProvider, ShellRoot};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Halcyon OS" />
        <Meta name="description" content="A desktop OS shell that lives in a browser tab." />

        <main class="site-root">
            <ShellProvider>
                <ShellRoot />
            </ShellProvider>
        </main>
    }
}
