use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders a virtual element tree into a ratatui buffer
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, element: Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        Self::render_element(&element, area, buf, config);
    }

    fn render_element(element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match element {
            Element::Widget(widget) => widget.render(area, buf, config),
            Element::Container { children, layout } => {
                let chunks = Self::calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    Self::render_element(child, *chunk, buf, config);
                }
            }
            Element::Fragment(children) => {
                for child in children {
                    Self::render_element(child, area, buf, config);
                }
            }
            Element::None => {}
        }
    }

    fn calculate_layout(layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };
        RatatuiLayout::default()
            .direction(direction)
            .constraints(constraints.iter().map(|c| Self::convert_constraint(*c)))
            .split(area)
            .to_vec()
    }

    fn convert_constraint(constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Max(n) => RatatuiConstraint::Max(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::{horizontal, vertical, ElementWidget};
    use crate::tui::testing::assert_buffer;
    use ratatui::style::Style;

    #[derive(Clone)]
    struct Fill(&'static str);

    impl ElementWidget for Fill {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            for y in area.top()..area.bottom() {
                buf.set_string(area.x, y, self.0.repeat(area.width as usize), Style::default());
            }
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_render_nested_containers() {
        let tree = vertical(
            [Constraint::Length(1), Constraint::Min(0)],
            vec![
                Element::widget(Fill("a")),
                horizontal(
                    [Constraint::Length(2), Constraint::Min(0)],
                    vec![Element::widget(Fill("b")), Element::widget(Fill("c"))],
                ),
            ],
        );
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        Renderer::new().render(tree, area, &mut buf, &DisplayConfig::default());

        assert_buffer(&buf, &["aaaaa", "bbccc", "bbccc"]);
    }

    #[test]
    fn test_render_none_leaves_buffer_empty() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        Renderer::new().render(Element::None, area, &mut buf, &DisplayConfig::default());
        assert_buffer(&buf, &[""]);
    }
}
