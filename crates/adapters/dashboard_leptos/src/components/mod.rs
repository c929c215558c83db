mod color_modal;
mod controls;
mod device_card;
mod device_list;
mod loading;
mod stat_card;
mod stats_panel;
mod status_bar;
mod toast;

pub use color_modal::{ColorModal, ColorPicker, use_color_picker};
pub use controls::Controls;
pub use device_card::DeviceCard;
pub use device_list::DeviceList;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use stats_panel::StatsPanel;
pub use status_bar::StatusBar;
pub use toast::Toasts;
