//! Loading Component

use leptos::*;

/// Full-page spinner shown while the dashboard waits on the store.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
