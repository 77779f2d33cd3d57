//! Buffer helpers shared by widget and component tests.

use ratatui::{buffer::Buffer, layout::Rect};

use super::component::Element;
use super::renderer::Renderer;
use crate::config::DisplayConfig;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions; trailing spaces are ignored
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch",
            i
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Render an element tree into a fresh buffer
pub fn render_element(element: Element, width: u16, height: u16, config: &DisplayConfig) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Renderer::new().render(element, area, &mut buf, config);
    buf
}
