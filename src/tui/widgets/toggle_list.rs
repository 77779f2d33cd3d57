/// ToggleListWidget - the General tab's option toggles
///
/// Each toggle takes two rows: selector, checkbox and name, then the
/// description indented under the name.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRow {
    pub name: &'static str,
    pub description: &'static str,
    pub value: bool,
}

#[derive(Clone, Debug)]
pub struct ToggleListWidget {
    pub rows: Vec<ToggleRow>,
    pub focused: usize,
}

impl ToggleListWidget {
    const DESCRIPTION_INDENT: u16 = 6;
}

/// Renders a checkbox; returns the width consumed
fn render_checkbox(value: bool, x: u16, y: u16, buf: &mut Buffer, config: &DisplayConfig) -> u16 {
    if value {
        let check = if config.use_unicode { "✔" } else { "X" };
        buf.set_string(x, y, "[", Style::default());
        buf.set_string(x + 1, y, check, Style::default().fg(config.selection_fg));
        buf.set_string(x + 2, y, "]", Style::default());
    } else {
        buf.set_string(x, y, "[ ]", Style::default());
    }
    3
}

impl ElementWidget for ToggleListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width <= Self::DESCRIPTION_INDENT {
            return;
        }
        for (i, row) in self.rows.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y >= area.bottom() {
                break;
            }

            let mut x = area.x;
            if i == self.focused {
                buf.set_string(
                    x,
                    y,
                    &config.box_chars.selector,
                    Style::default().fg(config.selection_fg),
                );
            }
            x += 2;
            x += render_checkbox(row.value, x, y, buf, config) + 1;
            buf.set_stringn(x, y, row.name, area.right().saturating_sub(x) as usize, Style::default());

            if y + 1 < area.bottom() {
                let x = area.x + Self::DESCRIPTION_INDENT;
                buf.set_stringn(
                    x,
                    y + 1,
                    row.description,
                    (area.right() - x) as usize,
                    Style::default().fg(ratatui::style::Color::DarkGray),
                );
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.rows.len() as u16 * 2)
    }
}
