//! # espdash-domain
//!
//! Pure domain model for the espdash device dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, relative-time buckets
//! - Define **Devices** (networked peripherals reported by the backend) and
//!   their aggregate **Stats**
//! - Define **RGB colors** and **device commands**
//! - Define **Notifications** and the client-local **system status**
//! - Describe the **wire shapes** exchanged with the device-management API
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

mod de;
pub mod error;
pub mod time;

pub mod api;
pub mod color;
pub mod command;
pub mod device;
pub mod notification;
pub mod stats;
pub mod system;
