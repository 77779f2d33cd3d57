use crate::config::Config;
use crate::manager::{CommandIconPair, HiddenCommands};
use crate::panel::{CreditsPlacement, FormFactor, HiderContent, Regions, SettingsPanel, TabContent};
use crate::settings::SettingKey;
use crate::tui::component::{stack, Component, Element};
use crate::tui::widgets::{
    CommandListWidget, CreditsWidget, HiddenCommandsWidget, TabListWidget, TabStripWidget,
    TitleHeaderWidget, ToggleListWidget, ToggleRow,
};

/// What the active tab's content shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentProps {
    General {
        rows: Vec<ToggleRow>,
        focused: usize,
    },
    Commands {
        commands: Vec<CommandIconPair>,
        show_hider_hint: bool,
    },
    Hider {
        hidden: HiddenCommands,
        selected_section: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsViewProps {
    pub title: String,
    pub form_factor: FormFactor,
    pub regions: Regions,
    pub labels: Vec<String>,
    pub active: usize,
    pub content: ContentProps,
}

impl SettingsViewProps {
    pub fn from_panel(panel: &SettingsPanel, config: &Config, focused_setting: usize) -> Self {
        let content = match &panel.active_tab().content {
            TabContent::General => ContentProps::General {
                rows: SettingKey::ALL
                    .iter()
                    .map(|key| ToggleRow {
                        name: key.name(),
                        description: key.description(),
                        value: config.settings.get(*key),
                    })
                    .collect(),
                focused: focused_setting,
            },
            TabContent::Commands {
                manager,
                hider_index,
            } => ContentProps::Commands {
                commands: config.commands.get(*manager).to_vec(),
                show_hider_hint: hider_index.is_some(),
            },
            TabContent::Hider => ContentProps::Hider {
                hidden: config.commands.hide.clone(),
                selected_section: panel
                    .hider()
                    .map(HiderContent::selected_section)
                    .unwrap_or_default(),
            },
        };

        Self {
            title: panel.name().to_string(),
            form_factor: panel.form_factor(),
            regions: panel.layout(),
            labels: panel
                .registry()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            active: panel.state().active_index(),
            content,
        }
    }
}

/// The panel: title header, tab strip and content, as the layout allows
pub struct SettingsView;

impl Component for SettingsView {
    type Props = SettingsViewProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let mut children = Vec::new();

        if props.regions.title_header {
            children.push(Element::widget(TitleHeaderWidget {
                title: props.title.clone(),
            }));
        }
        if props.regions.tab_strip {
            children.push(self.tab_strip(props));
        }
        if props.regions.content {
            children.push(self.content(&props.content));
        }
        if props.regions.credits == Some(CreditsPlacement::ContentArea) {
            children.push(Element::widget(CreditsWidget));
        }

        stack(children)
    }
}

impl SettingsView {
    fn tab_strip(&self, props: &SettingsViewProps) -> Element {
        match props.form_factor {
            FormFactor::Full => Element::widget(TabStripWidget {
                labels: props.labels.clone(),
                active: props.active,
            }),
            FormFactor::Compact => Element::widget(TabListWidget {
                labels: props.labels.clone(),
                active: props.active,
            }),
        }
    }

    fn content(&self, content: &ContentProps) -> Element {
        match content {
            ContentProps::General { rows, focused } => Element::widget(ToggleListWidget {
                rows: rows.clone(),
                focused: *focused,
            }),
            ContentProps::Commands {
                commands,
                show_hider_hint,
            } => Element::widget(CommandListWidget {
                commands: commands.clone(),
                show_hider_hint: *show_hider_hint,
            }),
            ContentProps::Hider {
                hidden,
                selected_section,
            } => Element::widget(HiddenCommandsWidget {
                hidden: hidden.clone(),
                selected_section: *selected_section,
            }),
        }
    }
}
