//! Generate the 192x192 and 512x512 PNG icons of a progressive web app from a
//! single source image.

pub mod error;
pub mod icon_gen;

pub use error::{ResizeError, REMEDIATION_HINT};
pub use icon_gen::{resize_icon, resize_icon_in, IconTarget, PWA_ICONS};
