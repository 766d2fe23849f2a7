//! Terminal colours for the preview
//! CSS colour strings from a tooltip config are resolved to ratatui colours here.

use ratatui::style::Color;

use crate::tooltip::{TooltipConfig, DEFAULT_BG_COLOR, DEFAULT_TEXT_COLOR, INFO_GLYPH_COLOR};

/// CSS named colours understood by the preview (lowercase)
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("aqua", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("navy", (0, 0, 128)),
    ("purple", (128, 0, 128)),
    ("teal", (0, 128, 128)),
    ("orange", (255, 165, 0)),
    ("gold", (255, 215, 0)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("crimson", (220, 20, 60)),
    ("tomato", (255, 99, 71)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("orchid", (218, 112, 214)),
    ("khaki", (240, 230, 140)),
    ("beige", (245, 245, 220)),
    ("ivory", (255, 255, 240)),
    ("lavender", (230, 230, 250)),
    ("tan", (210, 180, 140)),
    ("chocolate", (210, 105, 30)),
    ("firebrick", (178, 34, 34)),
    ("darkred", (139, 0, 0)),
    ("darkgreen", (0, 100, 0)),
    ("darkblue", (0, 0, 139)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("darkslategray", (47, 79, 79)),
    ("dimgray", (105, 105, 105)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("lightblue", (173, 216, 230)),
    ("lightgreen", (144, 238, 144)),
    ("lightyellow", (255, 255, 224)),
    ("whitesmoke", (245, 245, 245)),
    ("gainsboro", (220, 220, 220)),
    ("dodgerblue", (30, 144, 255)),
    ("deepskyblue", (0, 191, 255)),
    ("skyblue", (135, 206, 235)),
    ("steelblue", (70, 130, 180)),
    ("royalblue", (65, 105, 225)),
    ("cornflowerblue", (100, 149, 237)),
    ("midnightblue", (25, 25, 112)),
    ("slateblue", (106, 90, 205)),
    ("seagreen", (46, 139, 87)),
    ("forestgreen", (34, 139, 34)),
    ("limegreen", (50, 205, 50)),
    ("darkorange", (255, 140, 0)),
    ("orangered", (255, 69, 0)),
    ("hotpink", (255, 105, 180)),
    ("deeppink", (255, 20, 147)),
    ("turquoise", (64, 224, 208)),
    ("rebeccapurple", (102, 51, 153)),
];

/// Colours for the preview chrome and the tooltip itself
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,           // Focus borders, key hints
    pub text: Color,             // Primary text
    pub text_dim: Color,         // Hints and idle status
    pub inactive: Color,         // Unfocused borders
    pub header: Color,           // Titles
    pub glyph: Color,            // Default info glyph
    pub tip_fg: Color,           // Overlay text
    pub tip_bg: Color,           // Overlay background
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
            glyph: parse_color(INFO_GLYPH_COLOR).unwrap_or(Color::Cyan),
            tip_fg: parse_color(DEFAULT_TEXT_COLOR).unwrap_or(Color::White),
            tip_bg: parse_color(DEFAULT_BG_COLOR).unwrap_or(Color::Blue),
        }
    }
}

impl Theme {
    /// Resolve the overlay colours from a config; unknown colours keep the defaults
    pub fn for_config(config: &TooltipConfig) -> Self {
        let mut theme = Self::default();

        match parse_color(&config.text_color) {
            Some(c) => theme.tip_fg = c,
            None => tracing::warn!("Unrecognized text color {:?}, using default", config.text_color),
        }
        match parse_color(&config.bg_color) {
            Some(c) => theme.tip_bg = c,
            None => tracing::warn!("Unrecognized background color {:?}, using default", config.bg_color),
        }

        theme
    }
}

/// Parse a CSS colour: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a named colour
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    if let Some(args) = s
        .strip_prefix("rgb(")
        .or_else(|| s.strip_prefix("RGB("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse().ok())
            .collect::<Option<_>>()?;
        return match parts[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }

    let name = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, (r, g, b))| Color::Rgb(*r, *g, *b))
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().strip_prefix('#')?;

    if !s.is_ascii() {
        return None;
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#029dd1"), Some(Color::Rgb(2, 157, 209)));
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("##fff"), None);
    }

    #[test]
    fn test_parse_named_is_case_insensitive() {
        assert_eq!(parse_color("dodgerBlue"), Some(Color::Rgb(30, 144, 255)));
        assert_eq!(parse_color("WHITE"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("notacolor"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color::Rgb(10, 20, 30)));
        assert_eq!(parse_color("rgb(10, 20)"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_theme_for_config() {
        let config = TooltipConfig {
            text_color: "black".into(),
            bg_color: "bogus".into(),
            ..TooltipConfig::default()
        };
        let theme = Theme::for_config(&config);
        assert_eq!(theme.tip_fg, Color::Rgb(0, 0, 0));
        assert_eq!(theme.tip_bg, Color::Rgb(30, 144, 255));
    }
}
