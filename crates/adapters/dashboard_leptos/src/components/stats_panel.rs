use leptos::prelude::*;

use super::StatCard;
use crate::view::use_view;

/// Totals reported by the backend with the last device snapshot.
#[component]
pub fn StatsPanel() -> impl IntoView {
    let stats = use_view().stats;

    view! {
        <section class="stats">
            <StatCard
                label="Total devices"
                value=Signal::derive(move || stats.get().total.to_string())
            />
            <StatCard
                label="Online"
                value=Signal::derive(move || stats.get().online.to_string())
            />
            <StatCard
                label="Device types"
                value=Signal::derive(move || stats.get().device_types.to_string())
            />
            <StatCard
                label="Available RGB"
                value=Signal::derive(move || stats.get().available_rgb.to_string())
            />
        </section>
    }
}
