//! One card per device, laid out from the `render` view-model.

use espdash_app::render::{CardAction, DeviceCard as Card, RgbPanel};
use espdash_domain::color::RgbColor;
use espdash_domain::command::DeviceCommand;
use leptos::prelude::*;

use super::{ColorPicker, use_color_picker};
use crate::{Dashboard, use_dashboard};

fn dispatch(
    dashboard: Dashboard,
    picker: ColorPicker,
    action: CardAction,
    device_id: String,
    color: RgbColor,
) {
    match action {
        CardAction::QueryStatus => dashboard.spawn(move |c| async move {
            c.send_command(&device_id, DeviceCommand::Status).await;
        }),
        CardAction::Restart => dashboard.spawn(move |c| async move {
            c.send_command(&device_id, DeviceCommand::Restart).await;
        }),
        CardAction::PickColor => picker.open(device_id, color),
        CardAction::ResetButton => dashboard.spawn(move |c| async move {
            c.reset_button(&device_id).await;
        }),
        CardAction::MixColors => dashboard.spawn(|c| async move { c.mix_colors().await }),
    }
}

#[component]
fn RgbDetails(panel: RgbPanel) -> impl IntoView {
    view! {
        <div class="device-info">
            <span>"Availability:"</span>
            <strong>{panel.availability_label}</strong>
        </div>
        <div class="device-info">
            <span>"LED:"</span>
            <strong style:color=panel.led.color>{panel.led.label}</strong>
        </div>
        <div class="device-info">
            <span>"Color:"</span>
            <div class="rgb-value">
                <div class="rgb-color-indicator" style:background-color=panel.color.to_css()></div>
                <strong>{panel.color.to_string()}</strong>
            </div>
        </div>
    }
}

#[component]
pub fn DeviceCard(card: Card) -> impl IntoView {
    let dashboard = use_dashboard();
    let picker = use_color_picker();
    let class = if card.online {
        "device-card online"
    } else {
        "device-card offline"
    };
    let color = card.rgb.as_ref().map_or(RgbColor::BLACK, |rgb| rgb.color);
    let actions = card
        .actions
        .iter()
        .map(|&action| {
            let device_id = card.id.clone();
            let class = format!("btn btn-{}", action.style());
            view! {
                <button
                    class=class
                    on:click=move |_| dispatch(dashboard, picker, action, device_id.clone(), color)
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=class>
            <div class="device-header">
                <span class="device-icon">{card.icon}</span>
                <div>
                    <div class="device-name">{card.id.clone()}</div>
                    <div class="device-type">{card.type_name}</div>
                </div>
            </div>
            <div class="device-info">
                <span>"Status:"</span>
                <strong style:color=card.status.color>{card.status.label}</strong>
            </div>
            <div class="device-info">
                <span>"IP:"</span>
                <strong>{card.ip}</strong>
            </div>
            <div class="device-info">
                <span>"Last seen:"</span>
                <strong>{card.last_seen.to_string()}</strong>
            </div>
            {card.rgb.map(|panel| view! { <RgbDetails panel/> })}
            <div class="device-actions">{actions}</div>
        </div>
    }
}
