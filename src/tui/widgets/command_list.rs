use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style};

use crate::config::DisplayConfig;
use crate::l10n::t;
use crate::manager::CommandIconPair;
use crate::tui::component::ElementWidget;

/// Commands of one injection point, plus the jump hint when the viewer has one
#[derive(Clone, Debug)]
pub struct CommandListWidget {
    pub commands: Vec<CommandIconPair>,
    pub show_hider_hint: bool,
}

impl ElementWidget for CommandListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        let width = area.width as usize;
        let mut y = area.y;

        if self.commands.is_empty() {
            buf.set_stringn(area.x, y, t("No commands yet."), width, Style::default());
            y += 1;
        }
        for command in &self.commands {
            if y >= area.bottom() {
                return;
            }
            let line = format!("[{}] {}", command.icon, command.name);
            buf.set_stringn(area.x, y, line, width, Style::default());
            y += 1;
        }

        if self.show_hider_hint && y + 1 < area.bottom() {
            buf.set_stringn(
                area.x,
                y + 1,
                t("Press h to manage hidden commands"),
                width,
                Style::default().fg(Color::DarkGray),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
