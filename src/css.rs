//! Scrollbar stylesheet generation.
//!
//! Produces either the styled form (WebKit pseudo-elements for the bar,
//! track, thumb and thumb hover, plus the standard `scrollbar-width` /
//! `scrollbar-color` pair for Firefox) or the hide block. Selectors target
//! every element (`*`) for the global form or a single generated class for
//! the element-scoped form.

use crate::color::to_translucent;
use crate::options::{StyleOptions, TRANSPARENT};

/// Which elements the generated rules match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Every element in the document (`*`).
    Global,
    /// Only elements carrying this class (`.name`).
    Class(&'a str),
}

impl Scope<'_> {
    fn selector(&self) -> String {
        match self {
            Scope::Global => "*".to_string(),
            Scope::Class(name) => format!(".{name}"),
        }
    }
}

/// The three colors substituted into the styled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbarColors {
    pub thumb: String,
    pub thumb_hover: String,
    pub track: String,
}

impl ScrollbarColors {
    pub fn derive(opts: &StyleOptions) -> Self {
        let thumb = if opts.thumb_opacity < 1.0 {
            to_translucent(&opts.color, opts.thumb_opacity)
        } else {
            opts.color.clone()
        };

        // Equal hover and base opacity falls back to the raw color, not the
        // translucent thumb color.
        let thumb_hover =
            if opts.thumb_hover_opacity < 1.0 && opts.thumb_hover_opacity != opts.thumb_opacity {
                to_translucent(&opts.color, opts.thumb_hover_opacity)
            } else {
                opts.color.clone()
            };

        // NaN opacity counts as not visible.
        let track_visible = opts.track_opacity > 0.0;
        let track = if !track_visible || opts.track_background == TRANSPARENT {
            TRANSPARENT.to_string()
        } else {
            to_translucent(&opts.track_background, opts.track_opacity)
        };

        Self {
            thumb,
            thumb_hover,
            track,
        }
    }
}

/// Generate the whole-document stylesheet.
pub fn generate(opts: &StyleOptions) -> String {
    render(opts, Scope::Global)
}

/// Generate a stylesheet whose rules only match elements with `class_name`.
pub fn generate_scoped(opts: &StyleOptions, class_name: &str) -> String {
    render(opts, Scope::Class(class_name))
}

pub fn render(opts: &StyleOptions, scope: Scope<'_>) -> String {
    let sel = scope.selector();
    if opts.hide_scrollbar {
        return hide_block(&sel);
    }

    let ScrollbarColors {
        thumb,
        thumb_hover,
        track,
    } = ScrollbarColors::derive(opts);
    let width = &opts.width;
    let radius = &opts.thumb_radius;

    format!(
        r#"
/* Webkit browsers (Chrome, Safari, Edge) - Gutter and Knob */
{sel}::-webkit-scrollbar {{
  width: {width};
  height: {width};
}}

{sel}::-webkit-scrollbar-track {{
  background: {track};
}}

{sel}::-webkit-scrollbar-thumb {{
  background: {thumb};
  border-radius: {radius};
}}

{sel}::-webkit-scrollbar-thumb:hover {{
  background: {thumb_hover};
}}

/* Firefox - thin scrollbar */
{sel} {{
  scrollbar-width: thin;
  scrollbar-color: {thumb} {track};
}}
"#
    )
}

fn hide_block(sel: &str) -> String {
    format!(
        r#"
/* Completely hide scrollbar - all browsers */
{sel} {{
  scrollbar-width: none; /* Firefox */
  -ms-overflow-style: none; /* IE and Edge */
}}

{sel}::-webkit-scrollbar {{
  display: none; /* Chrome, Safari, Opera */
}}
"#
    )
}
