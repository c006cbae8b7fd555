//! Stat Card Component
//!
//! Pure rendering of a labeled value with a unit and an optional trend line.
//! The caller formats the value, including the "--" placeholder when data is
//! unavailable.

use leptos::*;

/// Percentage change against the previous month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    /// Text rendered under the value, e.g. "↓ 5% vs mes anterior".
    pub fn label(&self) -> String {
        let arrow = if self.is_positive { "↑" } else { "↓" };
        format!("{} {}% vs mes anterior", arrow, self.value.abs())
    }
}

#[component]
pub fn StatCard(
    /// Stat label (e.g. "Velocidad Media")
    #[prop(into)]
    title: String,
    /// Display value, already formatted by the caller
    #[prop(into)]
    value: String,
    /// Unit label shown next to the value
    #[prop(into)]
    unit: String,
    /// Icon glyph
    #[prop(into)]
    icon: String,
    /// Optional change vs the previous month
    #[prop(optional)]
    trend: Option<Trend>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <p class="text-sm font-medium text-gray-600">{title}</p>
                    <div class="mt-2 flex items-baseline gap-2">
                        <p class="text-3xl font-bold text-gray-900">{value}</p>
                        <span class="text-lg text-gray-500">{unit}</span>
                    </div>
                    {trend.map(|t| {
                        let color = if t.is_positive {
                            "mt-2 text-sm text-green-600"
                        } else {
                            "mt-2 text-sm text-red-600"
                        };
                        view! { <p class=color>{t.label()}</p> }
                    })}
                </div>
                <div class="p-3 bg-blue-50 rounded-lg text-2xl">{icon}</div>
            </div>
        </div>
    }
}
