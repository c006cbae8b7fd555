//! App Root Component
//!
//! Provides the store client to the component tree and sets up routing.

use leptos::*;
use leptos_router::*;

use crate::api::StoreClient;
use crate::components::Header;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App(client: StoreClient) -> impl IntoView {
    // Make the store client available to all components
    provide_context(client);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50">
                <Header />

                <main>
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Página no encontrada"</h1>
            <A href="/" class="text-blue-600 hover:underline">
                "Volver al panel"
            </A>
        </div>
    }
}
