use anyhow::Result;
use std::fmt::Write;

use crate::config::Config;
use crate::formatting::format_header;
use crate::panel::{TabContent, TabRegistry};

/// Print the panel's tabs in order, with what each one shows
pub fn run(cfg: &Config) -> Result<()> {
    print!("{}", render(cfg, &TabRegistry::standard())?);
    Ok(())
}

fn describe(content: &TabContent) -> String {
    match content {
        TabContent::General => "plugin options".to_string(),
        TabContent::Commands {
            manager,
            hider_index: Some(section),
        } => format!("{} commands, opens hider section {}", manager, section),
        TabContent::Commands { manager, .. } => format!("{} commands", manager),
        TabContent::Hider => "hidden commands".to_string(),
    }
}

fn render(cfg: &Config, registry: &TabRegistry) -> Result<String> {
    let display = cfg.display();
    let mut out = format_header(
        &format!("{} ({} layout)", cfg.panel_name, cfg.form_factor),
        true,
        &display,
    );
    for (index, tab) in registry.tabs().iter().enumerate() {
        writeln!(out, "{:>2}  {:<14}{}", index + 1, tab.name, describe(&tab.content))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::ManagerKind;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&TabContent::General), "plugin options");
        assert_eq!(
            describe(&TabContent::Commands {
                manager: ManagerKind::StatusBar,
                hider_index: Some(1),
            }),
            "Statusbar commands, opens hider section 1"
        );
    }

    #[test]
    fn test_render_lists_every_tab() {
        let out = render(&Config::default(), &TabRegistry::standard()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Commander (full layout)");
        assert_eq!(lines.len(), 2 + 9);
        assert_eq!(lines[2], " 1  General       plugin options");
        assert_eq!(lines[10], " 9  Hide Commands hidden commands");
    }
}
