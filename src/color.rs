//! Color normalization: turns a stylesheet color plus an opacity into a
//! translucent `rgba()` value where the input form allows it.
//!
//! Only hex (`#RGB`, `#RRGGBB`, with or without `#`) and `rgb()` inputs are
//! rewritten. `transparent`, `rgba()` and anything unrecognized, named colors
//! included, pass through untouched and the opacity is dropped. The browser
//! resolves named colors itself.

/// Apply `opacity` to `color`, producing an `rgba()` string when possible.
///
/// Never fails: malformed input is returned unchanged. The alpha is written
/// with `f64`'s `Display`, which agrees with JavaScript number formatting for
/// ordinary opacities (`0.5`, `1`, `0`) but prints very small values
/// positionally (`0.0000001` where JS gives `1e-7`).
pub fn to_translucent(color: &str, opacity: f64) -> String {
    if color == "transparent" || color.starts_with("rgba") {
        return color.to_string();
    }

    if let Some(inner) = color.strip_prefix("rgb(") {
        // Only the first `)` closes the channel list; trailing text is kept.
        return match inner.split_once(')') {
            Some((channels, rest)) => format!("rgba({channels}, {opacity}){rest}"),
            None => color.to_string(),
        };
    }

    match parse_hex(color) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {opacity})"),
        None => color.to_string(),
    }
}

/// Parse `#RGB` / `#RRGGBB` (leading `#` optional) into byte channels.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            Some((
                channel(&doubled[0..2])?,
                channel(&doubled[2..4])?,
                channel(&doubled[4..6])?,
            ))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        assert_eq!(to_translucent("#6366f1", 0.6), "rgba(99, 102, 241, 0.6)");
        assert_eq!(to_translucent("#FF0000", 0.25), "rgba(255, 0, 0, 0.25)");
    }

    #[test]
    fn three_digit_hex_expands() {
        assert_eq!(to_translucent("#abc", 0.5), "rgba(170, 187, 204, 0.5)");
        assert_eq!(to_translucent("#fff", 0.0), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(to_translucent("112233", 0.5), "rgba(17, 34, 51, 0.5)");
        assert_eq!(to_translucent("0f0", 0.1), "rgba(0, 255, 0, 0.1)");
    }

    #[test]
    fn transparent_and_rgba_pass_through() {
        for o in [0.0, 0.3, 0.99] {
            assert_eq!(to_translucent("transparent", o), "transparent");
        }
        assert_eq!(
            to_translucent("rgba(1, 2, 3, 0.4)", 0.9),
            "rgba(1, 2, 3, 0.4)"
        );
    }

    #[test]
    fn rgb_gains_alpha() {
        assert_eq!(to_translucent("rgb(10, 20, 30)", 0.5), "rgba(10, 20, 30, 0.5)");
        assert_eq!(to_translucent("rgb(10,20,30)", 0.75), "rgba(10,20,30, 0.75)");
    }

    #[test]
    fn rgb_keeps_text_after_closing_paren() {
        assert_eq!(to_translucent("rgb(1, 2, 3) ", 0.5), "rgba(1, 2, 3, 0.5) ");
        assert_eq!(
            to_translucent("rgb(1, 2, 3) !important", 0.25),
            "rgba(1, 2, 3, 0.25) !important"
        );
    }

    #[test]
    fn tiny_alpha_is_positional() {
        assert_eq!(to_translucent("#fff", 1e-7), "rgba(255, 255, 255, 0.0000001)");
    }

    // Documented limitation: these are left to the browser, opacity is lost.
    #[test]
    fn unrecognized_forms_pass_through() {
        assert_eq!(to_translucent("red", 0.5), "red");
        assert_eq!(to_translucent("#abcd", 0.5), "#abcd");
        assert_eq!(to_translucent("#12345", 0.5), "#12345");
        assert_eq!(to_translucent("#ggg", 0.5), "#ggg");
        assert_eq!(to_translucent("rgb(1, 2, 3", 0.5), "rgb(1, 2, 3");
        assert_eq!(to_translucent("", 0.5), "");
        assert_eq!(to_translucent("hsl(0, 100%, 50%)", 0.5), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn every_channel_value_is_exact() {
        for v in [0u8, 1, 15, 16, 127, 128, 200, 254, 255] {
            let hex = format!("#{v:02x}{:02x}{:02x}", 255 - v, v / 2);
            assert_eq!(
                to_translucent(&hex, 0.5),
                format!("rgba({v}, {}, {}, 0.5)", 255 - v, v / 2)
            );
        }
    }
}
