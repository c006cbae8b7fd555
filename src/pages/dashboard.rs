//! Dashboard Page
//!
//! Loads the observation count on mount and renders loading, error, or
//! content states. One request per mount; the state machine is terminal once
//! resolved and only a full remount restarts it.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::api::StoreClient;
use crate::components::{ErrorMessage, LoadingSpinner, StatCard};

/// Data-loading lifecycle of the dashboard.
#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(u64),
    Failed(String),
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = use_context::<StoreClient>().expect("StoreClient not found");

    let state = create_rw_signal(LoadState::Loading);

    // Discard the response if the view is torn down before it arrives.
    let cancelled = Rc::new(Cell::new(false));
    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.set(true));
    }

    // Fetch the record count on mount
    let client_for_effect = client.clone();
    let cancelled_for_effect = cancelled.clone();
    create_effect(move |_| {
        let client = client_for_effect.clone();
        let cancelled = cancelled_for_effect.clone();
        spawn_local(async move {
            let next = match client.count_observations().await {
                Ok(count) => LoadState::Loaded(count.unwrap_or(0)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to count observations: {}", e).into(),
                    );
                    LoadState::Failed(e.user_message())
                }
            };

            if !cancelled.get() {
                state.set(next);
            }
        });
    });

    view! {
        {move || match state.get() {
            LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
            LoadState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
            LoadState::Loaded(count) => view! { <DashboardContent count=count /> }.into_view(),
        }}
    }
}

/// Stat grid and placeholder panels, shown once the count is available.
#[component]
fn DashboardContent(count: u64) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h2 class="text-xl font-semibold text-gray-900 mb-2">"Panel de Control"</h2>
                <p class="text-gray-600">
                    "Predicción mensual a largo plazo de vientos en Barranquilla"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatCard title="Velocidad Media" value="--" unit="m/s" icon="🌬" />
                <StatCard title="Velocidad Máxima" value="--" unit="m/s" icon="🌀" />
                <StatCard title="Dirección Dominante" value="--" unit="°" icon="🧭" />
                <StatCard
                    title="Registros"
                    value=format_count(count)
                    unit="datos"
                    icon="📈"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <PlaceholderPanel
                    title="Tendencia de Velocidad Mensual"
                    body="Gráfico de tendencia en desarrollo"
                />
                <PlaceholderPanel
                    title="Rosa de Vientos"
                    body="Rosa de vientos en desarrollo"
                />
            </div>
        </div>
    }
}

/// Panel for a visualization that is not implemented yet.
#[component]
fn PlaceholderPanel(
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{title}</h3>
            <div class="h-80 flex items-center justify-center text-gray-500">{body}</div>
        </div>
    }
}

/// Thousands-grouped display string, e.g. 1234 -> "1,234".
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_zero() {
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_format_count_no_grouping_below_thousand() {
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
