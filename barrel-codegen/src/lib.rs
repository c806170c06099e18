//! Barrel file model and rendering.
//!
//! A barrel is built from a directory listing according to a [`Mode`],
//! holds one [`ReExport`] per qualifying entry and renders to the text of
//! the index file.

mod barrel;
mod export;
mod extension;
mod mode;

pub use barrel::Barrel;
pub use export::ReExport;
pub use extension::{Extension, ParseExtensionError};
pub use mode::Mode;
