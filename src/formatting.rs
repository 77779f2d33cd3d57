use crate::config::DisplayConfig;

/// Glyphs used by the tab strip, rows and headers
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub connector: String,
    pub selector: String,
    pub chevron: String,
    pub back: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            connector: "┴".to_string(),
            selector: "►".to_string(),
            chevron: "›".to_string(),
            back: "‹".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            connector: "-".to_string(),
            selector: ">".to_string(),
            chevron: ">".to_string(),
            back: "<".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline matching its width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    use unicode_width::UnicodeWidthStr;

    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_header_unicode() {
        let display = DisplayConfig::default();
        assert_eq!(format_header("Tabs", false, &display), "Tabs\n────\n");
        assert_eq!(format_header("Tabs", true, &display), "Tabs\n════\n");
    }

    #[test]
    fn test_format_header_ascii() {
        let display = ascii_display();
        assert_eq!(
            format_header("Configuration", true, &display),
            "Configuration\n=============\n"
        );
    }

    #[test]
    fn test_format_header_uses_display_width() {
        let display = ascii_display();
        assert_eq!(format_header("Réglages", false, &display), "Réglages\n--------\n");
    }

    #[test]
    fn test_from_use_unicode() {
        assert_eq!(BoxChars::from_use_unicode(true).chevron, "›");
        assert_eq!(BoxChars::from_use_unicode(false).chevron, ">");
    }
}
