//! Header Component
//!
//! Static brand banner. No state, no props.

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex items-center gap-3">
                    <span class="text-3xl text-blue-600">"🌬"</span>
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">"Vento"</h1>
                        <p class="text-sm text-gray-600">"Barranquilla, Colombia"</p>
                    </div>
                </div>
            </div>
        </header>
    }
}
