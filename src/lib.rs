//! Cross-browser scrollbar styling.
//!
//! [`generate`] turns [`StyleOptions`] into stylesheet text and needs no
//! document. [`Injector`] writes that text into a document through a
//! [`StyleHost`] and hands back a [`Cancel`] to remove it.

pub mod color;
pub mod css;
pub mod error;
pub mod inject;
pub mod options;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::to_translucent;
pub use css::{generate, generate_scoped, ScrollbarColors};
pub use error::{InjectError, OptionsError};
pub use inject::memory::{ElementRef, MemoryDocument};
pub use inject::{Cancel, Injector, StyleGuard, StyleHost, Target, GLOBAL_STYLE_ID};
pub use options::StyleOptions;

/// Inject global scrollbar styles into `host`.
pub fn apply<H: StyleHost>(host: &H, opts: &StyleOptions) -> Cancel<H> {
    Injector::new(host.clone()).apply(opts)
}

/// Inject scrollbar styles scoped to one element of `host`.
pub fn apply_to<H: StyleHost>(
    host: &H,
    target: impl Into<Target<H::Element>>,
    opts: &StyleOptions,
) -> Cancel<H> {
    Injector::new(host.clone()).apply_to(target.into(), opts)
}
