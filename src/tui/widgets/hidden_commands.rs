use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::l10n::t;
use crate::manager::HiddenCommands;
use crate::tui::component::ElementWidget;

/// Hiding view: section switcher on top, hidden command ids of the selected section below
#[derive(Clone, Debug)]
pub struct HiddenCommandsWidget {
    pub hidden: HiddenCommands,
    pub selected_section: usize,
}

impl ElementWidget for HiddenCommandsWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        let mut x = area.x;

        for index in 0..HiddenCommands::SECTION_COUNT {
            let Some((title, _)) = self.hidden.section(index) else {
                continue;
            };
            let label = format!(" {} ", title);
            let style = if index == self.selected_section {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            if x >= area.right() {
                break;
            }
            buf.set_stringn(x, area.y, &label, (area.right() - x) as usize, style);
            x += label.width() as u16 + 1;
        }

        let Some((_, ids)) = self.hidden.section(self.selected_section) else {
            return;
        };
        let mut y = area.y + 2;
        if ids.is_empty() && y < area.bottom() {
            buf.set_stringn(area.x, y, t("No hidden commands."), width, Style::default());
        }
        for id in ids {
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(area.x, y, id, width, Style::default());
            y += 1;
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
