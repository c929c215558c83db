use espdash_app::render::DeviceListView;
use leptos::prelude::*;

use super::{DeviceCard, Loading};
use crate::view::use_view;

/// The device grid, or a placeholder before the first poll and when no
/// device is connected.
#[component]
pub fn DeviceList() -> impl IntoView {
    let devices = use_view().devices;

    view! {
        <section class="devices">
            {move || match devices.get() {
                None => view! { <Loading message="Loading devices\u{2026}"/> }.into_any(),
                Some(DeviceListView::Empty) => view! {
                    <p class="no-devices">{DeviceListView::EMPTY_MESSAGE}</p>
                }
                .into_any(),
                Some(DeviceListView::Cards(cards)) => view! {
                    <div class="devices-grid">
                        {cards.into_iter().map(|card| view! { <DeviceCard card/> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
