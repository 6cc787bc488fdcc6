use super::*;

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    view! {
        <div class="boot-screen" role="status" aria-label="Starting up">
            <div class="boot-logo" aria-hidden="true">"✦"</div>
            <div class="boot-title">"Halcyon OS"</div>
            <div class="boot-progress">
                <div class="boot-progress-bar"></div>
            </div>
        </div>
    }
}
