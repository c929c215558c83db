//! Color picker dialog for RGB controllers.

use espdash_domain::color::RgbColor;
use leptos::prelude::*;

use crate::use_dashboard;

/// Which device the dialog is open for, and the color being edited.
#[derive(Debug, Clone, Copy)]
pub struct ColorPicker {
    device: RwSignal<Option<String>>,
    value: RwSignal<String>,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self {
            device: RwSignal::new(None),
            value: RwSignal::new(RgbColor::BLACK.to_hex()),
        }
    }

    /// Open the dialog for `device_id`, starting from its current color.
    pub fn open(self, device_id: String, current: RgbColor) {
        self.value.set(current.to_hex());
        self.device.set(Some(device_id));
    }

    pub fn close(self) {
        self.device.set(None);
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_color_picker() -> ColorPicker {
    expect_context::<ColorPicker>()
}

#[component]
pub fn ColorModal() -> impl IntoView {
    let picker = use_color_picker();
    let dashboard = use_dashboard();

    let apply = move |_| {
        let Some(device_id) = picker.device.get_untracked() else {
            return;
        };
        match RgbColor::from_hex(&picker.value.get_untracked()) {
            Ok(color) => dashboard.spawn(move |c| async move {
                c.set_color(&device_id, color).await;
            }),
            Err(err) => tracing::warn!(error = %err, "color picker returned an invalid value"),
        }
        picker.close();
    };

    view! {
        <Show when=move || picker.device.with(Option::is_some)>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"\u{1f3a8} Choose color"</h2>
                    <p class="modal-device">{move || picker.device.get().unwrap_or_default()}</p>
                    <input
                        type="color"
                        prop:value=move || picker.value.get()
                        on:input=move |ev| picker.value.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| picker.close()>
                            "Cancel"
                        </button>
                        <button class="btn btn-success" on:click=apply>
                            "Apply"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
