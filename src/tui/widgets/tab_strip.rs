use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

/// Horizontal tab strip: labels separated by a bar, with a rule underneath
///
/// When the labels do not fit, the strip starts from the first label that
/// still keeps the active one on screen. Keys go to the content pane below
/// the strip, so the active label uses the unfocused selection color.
#[derive(Clone, Debug)]
pub struct TabStripWidget {
    pub labels: Vec<String>,
    pub active: usize,
}

impl TabStripWidget {
    const GAP: usize = 3; // " │ "

    /// First label to draw so that `active` ends within `width`
    fn first_visible(&self, width: usize) -> usize {
        let mut first = 0;
        while first < self.active {
            let used: usize = self.labels[first..=self.active]
                .iter()
                .map(|label| label.width())
                .sum::<usize>()
                + Self::GAP * (self.active - first);
            if used <= width {
                break;
            }
            first += 1;
        }
        first
    }

    fn build_tab_line(&self, first: usize, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, label) in self.labels.iter().enumerate().skip(first) {
            if i > first {
                segments.push((separator.clone(), Style::default()));
            }
            let style = if i == self.active {
                Style::default()
                    .fg(config.unfocused_selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            segments.push((label.clone(), style));
        }
        segments
    }

    fn build_separator_line(&self, first: usize, width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        let mut pos = 0;

        for (i, label) in self.labels.iter().enumerate().skip(first) {
            if i > first {
                line.push_str(horizontal);
                line.push_str(&config.box_chars.connector);
                line.push_str(horizontal);
                pos += Self::GAP;
            }
            line.push_str(&horizontal.repeat(label.width()));
            pos += label.width();
        }
        if pos < width {
            line.push_str(&horizontal.repeat(width - pos));
        }
        line
    }
}

impl ElementWidget for TabStripWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }
        let first = self.first_visible(area.width as usize);

        let mut x = area.x;
        for (text, style) in self.build_tab_line(first, config) {
            if x >= area.right() {
                break;
            }
            let (end, _) = buf.set_stringn(x, area.y, &text, (area.right() - x) as usize, style);
            x = end;
        }

        let rule = self.build_separator_line(first, area.width as usize, config);
        buf.set_stringn(area.x, area.y + 1, rule, area.width as usize, Style::default());
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

/// Compact tab list: one row per tab with a chevron at the right edge
#[derive(Clone, Debug)]
pub struct TabListWidget {
    pub labels: Vec<String>,
    pub active: usize,
}

impl ElementWidget for TabListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 {
            return;
        }
        let chevron_x = area.right() - 2;
        let label_width = (area.width - 4) as usize;

        for (i, label) in self.labels.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let style = if i == self.active {
                buf.set_string(
                    area.x,
                    y,
                    &config.box_chars.selector,
                    Style::default().fg(config.selection_fg),
                );
                Style::default().fg(config.selection_fg)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x + 2, y, label, label_width, style);
            buf.set_string(chevron_x, y, &config.box_chars.chevron, Style::default());
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.labels.len() as u16)
    }
}
