//! Error Message Component

use leptos::*;

/// Error panel rendered in place of the dashboard content.
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh] px-4">
            <div class="bg-red-50 border border-red-200 rounded-xl p-6 max-w-md text-center">
                <div class="text-3xl mb-2">"⚠️"</div>
                <p class="text-red-700 font-medium">{message}</p>
            </div>
        </div>
    }
}
