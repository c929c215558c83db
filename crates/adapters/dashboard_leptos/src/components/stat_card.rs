//! Stat card component for one figure of the statistics panel.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// The label shown under the value.
    #[prop(into)]
    label: String,
    /// Reactive value, re-read whenever the stats change.
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
