//! Style injection and cleanup.
//!
//! An [`Injector`] writes generated CSS into a style node identified by a
//! string key and returns a [`Cancel`] handle that removes it again.
//!
//! Two scopes exist:
//!   - global: the key is always [`GLOBAL_STYLE_ID`], so applying again
//!     replaces the previous node and at most one global node is ever live;
//!   - element: each call gets a random key plus a derived class that is
//!     added to the target, and the rules only match that element's subtree.
//!
//! Cancellation targets the key, not the node instance. A cancel handle from
//! an older global apply removes whichever global node is current.

pub mod memory;
#[cfg(feature = "wasm")]
pub mod web;

use rand::{thread_rng, Rng};

use crate::css::{generate, generate_scoped};
use crate::error::{InjectError, Result};
use crate::options::StyleOptions;

/// Key of the single document-wide style node.
pub const GLOBAL_STYLE_ID: &str = "stylistic-scroll-styles";

/// Prefix shared by element style keys and their classes.
pub const ID_PREFIX: &str = "stylistic-scroll";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// The document operations the injector needs.
///
/// Implemented by [`memory::MemoryDocument`] and, with the `wasm` feature,
/// by `web_sys::Document`.
pub trait StyleHost: Clone {
    type Element: Clone;

    /// Remove the node carrying `id`, if any. Returns whether one was removed.
    fn remove_by_id(&self, id: &str) -> bool;

    /// Attach a new style node with the given key and text.
    fn append_style(&self, id: &str, css: &str) -> Result<()>;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Remove `class` from `element`. A no-op if it is not attached.
    fn remove_class(&self, element: &Self::Element, class: &str);
}

/// What an element-scoped injection applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    /// Resolved with `query_selector` at apply time.
    Selector(String),
    Handle(E),
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

/// Generate a fresh element style key: `stylistic-scroll-<9 base-36 chars>`.
///
/// Collisions are possible in principle; no uniqueness check is made.
pub fn element_style_id() -> String {
    let mut rng = thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{ID_PREFIX}-{suffix}")
}

/// Class applied to the target of an element injection keyed `style_id`.
pub fn class_for(style_id: &str) -> String {
    format!("{ID_PREFIX}-{style_id}")
}

pub struct Injector<H: StyleHost> {
    host: H,
}

impl<H: StyleHost> Injector<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Style every scrollbar in the document, replacing any earlier global
    /// injection. Failures are logged and yield a no-op cancel.
    pub fn apply(&self, opts: &StyleOptions) -> Cancel<H> {
        self.try_apply(opts).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "StylisticScroll: global styles not applied");
            Cancel::noop()
        })
    }

    pub fn try_apply(&self, opts: &StyleOptions) -> Result<Cancel<H>> {
        if self.host.remove_by_id(GLOBAL_STYLE_ID) {
            tracing::debug!(id = GLOBAL_STYLE_ID, "replacing global scrollbar styles");
        }
        self.host.append_style(GLOBAL_STYLE_ID, &generate(opts))?;
        tracing::debug!(id = GLOBAL_STYLE_ID, "injected global scrollbar styles");

        Ok(Cancel::active(self.host.clone(), GLOBAL_STYLE_ID.to_string(), None))
    }

    /// Style the scrollbars of a single element. An unresolvable target is
    /// logged and leaves the document untouched.
    pub fn apply_to(&self, target: Target<H::Element>, opts: &StyleOptions) -> Cancel<H> {
        self.try_apply_to(target, opts).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "StylisticScroll: element styles not applied");
            Cancel::noop()
        })
    }

    pub fn try_apply_to(&self, target: Target<H::Element>, opts: &StyleOptions) -> Result<Cancel<H>> {
        let element = self.resolve(target)?;

        let style_id = element_style_id();
        let class = class_for(&style_id);
        let css = generate_scoped(opts, &class);

        self.host.add_class(&element, &class)?;
        if let Err(e) = self.host.append_style(&style_id, &css) {
            self.host.remove_class(&element, &class);
            return Err(e);
        }
        tracing::debug!(id = %style_id, class = %class, "injected element scrollbar styles");

        Ok(Cancel::active(self.host.clone(), style_id, Some((element, class))))
    }

    fn resolve(&self, target: Target<H::Element>) -> Result<H::Element> {
        match target {
            Target::Handle(element) => Ok(element),
            Target::Selector(selector) => self
                .host
                .query_selector(&selector)
                .ok_or_else(|| InjectError::target_not_found(&selector)),
        }
    }
}

/// Reverses one injection. Safe to call any number of times.
pub struct Cancel<H: StyleHost> {
    injected: Option<Injected<H>>,
}

struct Injected<H: StyleHost> {
    host: H,
    style_id: String,
    class: Option<(H::Element, String)>,
}

impl<H: StyleHost> Cancel<H> {
    fn active(host: H, style_id: String, class: Option<(H::Element, String)>) -> Self {
        Self {
            injected: Some(Injected {
                host,
                style_id,
                class,
            }),
        }
    }

    /// A handle whose cancel does nothing.
    pub fn noop() -> Self {
        Self { injected: None }
    }

    pub fn is_noop(&self) -> bool {
        self.injected.is_none()
    }

    pub fn style_id(&self) -> Option<&str> {
        self.injected.as_ref().map(|i| i.style_id.as_str())
    }

    pub fn class_name(&self) -> Option<&str> {
        self.injected
            .as_ref()
            .and_then(|i| i.class.as_ref())
            .map(|(_, class)| class.as_str())
    }

    /// Remove the class (if still attached) and the style node (if still
    /// present).
    pub fn cancel(&self) {
        let Some(injected) = &self.injected else {
            return;
        };
        if let Some((element, class)) = &injected.class {
            injected.host.remove_class(element, class);
        }
        if injected.host.remove_by_id(&injected.style_id) {
            tracing::debug!(id = %injected.style_id, "removed scrollbar styles");
        }
    }

    /// Tie the injection to a scope: it is cancelled when the guard drops.
    pub fn into_guard(self) -> StyleGuard<H> {
        StyleGuard { cancel: Some(self) }
    }
}

/// Cancels its injection on drop.
pub struct StyleGuard<H: StyleHost> {
    cancel: Option<Cancel<H>>,
}

impl<H: StyleHost> StyleGuard<H> {
    /// Keep the styles alive past the guard; returns the plain handle.
    pub fn release(mut self) -> Cancel<H> {
        self.cancel.take().unwrap_or_else(Cancel::noop)
    }
}

impl<H: StyleHost> Drop for StyleGuard<H> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
