use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use crate::config::DisplayConfig;

/// A view component
///
/// Components are pure: given props (and optional local state) they produce
/// an [`Element`] tree. Anything that changes the world goes through an
/// [`Action`] and the reducer instead.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Local state type (if any)
    type State: Default;

    /// Create initial state from props
    fn init(_props: &Self::Props) -> Self::State {
        Self::State::default()
    }

    /// Render component given props and state
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Element in the virtual tree handed to the [`Renderer`](super::Renderer)
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// Groups children drawn over the same area
    Fragment(Vec<Element>),

    /// Nothing to render
    None,
}

impl Element {
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }
}

/// Layout for container elements
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
}

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Effect::Async(_) => f.write_str("Async(..)"),
        }
    }
}

/// A leaf of the element tree that draws itself into a buffer
pub trait ElementWidget: Send + Sync {
    /// Render this widget into `area`
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Rows this widget wants; `None` adapts to any height
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}

/// Vertical stack whose constraints come from each child's preferred height
///
/// The last child takes the remaining space.
pub fn stack(children: Vec<Element>) -> Element {
    let last = children.len().saturating_sub(1);
    let constraints = children
        .iter()
        .enumerate()
        .map(|(i, child)| match child {
            _ if i == last => Constraint::Min(0),
            Element::Widget(widget) => widget
                .preferred_height()
                .map(Constraint::Length)
                .unwrap_or(Constraint::Min(0)),
            Element::None => Constraint::Length(0),
            _ => Constraint::Min(0),
        })
        .collect();
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct FixedWidget(u16);

    impl ElementWidget for FixedWidget {
        fn render(&self, _area: Rect, _buf: &mut Buffer, _config: &DisplayConfig) {}

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }

        fn preferred_height(&self) -> Option<u16> {
            Some(self.0)
        }
    }

    #[test]
    fn test_vertical_helper() {
        let element = vertical(
            [Constraint::Length(10), Constraint::Min(5)],
            vec![Element::None, Element::None],
        );
        match element {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 2);
                assert_eq!(
                    layout,
                    ContainerLayout::Vertical(vec![Constraint::Length(10), Constraint::Min(5)])
                );
            }
            _ => panic!("Expected Container element"),
        }
    }

    #[test]
    fn test_stack_uses_preferred_heights() {
        let element = stack(vec![
            Element::widget(FixedWidget(2)),
            Element::None,
            Element::widget(FixedWidget(3)),
        ]);
        match element {
            Element::Container { layout, .. } => assert_eq!(
                layout,
                ContainerLayout::Vertical(vec![
                    Constraint::Length(2),
                    Constraint::Length(0),
                    Constraint::Min(0),
                ])
            ),
            _ => panic!("Expected Container element"),
        }
    }

    #[test]
    fn test_effect_debug_hides_future() {
        let effect = Effect::Batch(vec![
            Effect::None,
            Effect::Async(Box::pin(async { Action::Quit })),
        ]);
        assert_eq!(format!("{:?}", effect), "Batch([None, Async(..)])");
    }
}
