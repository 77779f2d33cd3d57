//! Title, credits, back control and notice lines framing the panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::l10n::t;
use crate::tui::component::ElementWidget;

/// Panel name with the credits line under it
#[derive(Clone, Debug)]
pub struct TitleHeaderWidget {
    pub title: String,
}

impl ElementWidget for TitleHeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        buf.set_stringn(
            area.x,
            area.y,
            &self.title,
            width,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if area.height > 1 {
            CreditsWidget.render(Rect { y: area.y + 1, height: 1, ..area }, buf, config);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(3)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CreditsWidget;

impl ElementWidget for CreditsWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        buf.set_stringn(
            area.x,
            area.y,
            t("Made with care by the Commander contributors"),
            area.width as usize,
            Style::default().fg(Color::DarkGray),
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(*self)
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

/// The host back control as currently labelled
#[derive(Clone, Debug)]
pub struct BackControlWidget {
    pub label: String,
}

impl ElementWidget for BackControlWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let text = format!("{} {}", config.box_chars.back, self.label);
        buf.set_stringn(area.x, area.y, text, area.width as usize, Style::default());
        if area.height > 1 {
            buf.set_stringn(
                area.x,
                area.y + 1,
                config.box_chars.horizontal.repeat(area.width as usize),
                area.width as usize,
                Style::default(),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

/// Bottom line: the latest notice, or the add-button count
#[derive(Clone, Debug)]
pub struct NoticeLineWidget {
    pub message: Option<String>,
    pub is_error: bool,
    pub add_buttons: usize,
}

impl ElementWidget for NoticeLineWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let (text, style) = match &self.message {
            Some(message) if self.is_error => {
                (message.clone(), Style::default().fg(config.error_fg))
            }
            Some(message) => (message.clone(), Style::default()),
            None => (
                format!("Add-command buttons: {}", self.add_buttons),
                Style::default().fg(Color::DarkGray),
            ),
        };
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
