//! Renderers.
//!
//! - [`Painter`]: applies theme values to a live [`Document`]
//! - [`CssExporter`]: renders a whole theme as stylesheet text
//! - [`Target`] / [`Slot`]: how both address an element and its parts

mod document;
mod export;
mod live;
mod target;

pub use document::{Document, MemoryDocument};
pub use export::CssExporter;
pub use live::{ApplyOutcome, ApplyReport, Painter};
pub use target::{Selector, Slot, Target};
