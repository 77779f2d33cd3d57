use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::{AppState, Notice};
use crate::tui::widgets::{BackControlWidget, NoticeLineWidget};

use super::settings_view::{SettingsView, SettingsViewProps};

/// Snapshot of the host the root component renders from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppProps {
    pub back_label: Option<String>,
    pub panel: Option<SettingsViewProps>,
    pub notice: Option<Notice>,
    pub add_buttons: usize,
}

impl AppProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            back_label: state.host.back_label(),
            panel: state.panel().map(|panel| {
                SettingsViewProps::from_panel(panel, &state.config, state.ui.focused_setting)
            }),
            notice: state.host.notice.clone(),
            add_buttons: state.host.add_buttons,
        }
    }
}

/// Root component: host back control, the settings surface and the notice line
pub struct App;

impl Component for App {
    type Props = AppProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let back = match &props.back_label {
            Some(label) => Element::widget(BackControlWidget {
                label: label.clone(),
            }),
            None => Element::None,
        };
        let back_height = if props.back_label.is_some() { 2 } else { 0 };

        let surface = match &props.panel {
            Some(panel) => SettingsView.view(panel, &()),
            None => Element::None,
        };

        let notice = Element::widget(NoticeLineWidget {
            message: props.notice.as_ref().map(|notice| notice.message.clone()),
            is_error: props.notice.as_ref().is_some_and(|notice| notice.is_error),
            add_buttons: props.add_buttons,
        });

        vertical(
            [
                Constraint::Length(back_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
            vec![back, surface, notice],
        )
    }
}
