use anyhow::Result;
use std::fmt::Write;

use crate::config::{self, Config};
use crate::formatting::format_header;

/// Print the config file location and the resolved configuration
pub fn run(cfg: &Config) -> Result<()> {
    print!("{}", render(cfg)?);
    Ok(())
}

fn render(cfg: &Config) -> Result<String> {
    let display = cfg.display();
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    let mut out = String::new();
    writeln!(
        out,
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    )?;
    writeln!(out)?;
    out.push_str(&format_header("Current Configuration", true, &display));
    writeln!(out, "log_level: {}", cfg.log_level)?;
    writeln!(out, "log_file: {}", cfg.log_file)?;
    writeln!(out, "panel_name: {}", cfg.panel_name)?;
    writeln!(out, "form_factor: {}", cfg.form_factor)?;
    writeln!(out, "jump_delivery: {:?}", cfg.jump_delivery())?;
    writeln!(out, "use_unicode: {}", cfg.use_unicode)?;
    writeln!(out)?;
    out.push_str(&format_header("[settings]", false, &display));
    writeln!(out, "confirm_deletion: {}", cfg.settings.confirm_deletion)?;
    writeln!(out, "show_add_command: {}", cfg.settings.show_add_command)?;
    writeln!(out, "debug: {}", cfg.settings.debug)?;
    writeln!(out)?;
    out.push_str(&format_header("[theme]", false, &display));
    writeln!(out, "selection_fg: {:?}", cfg.theme.selection_fg)?;
    writeln!(
        out,
        "unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() {
            " (auto: 50% darker)"
        } else {
            ""
        }
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::FormFactor;

    #[test]
    fn test_render_lists_resolved_values() {
        let cfg = Config {
            form_factor: FormFactor::Compact,
            ..Config::default()
        };
        let out = render(&cfg).unwrap();

        assert!(out.starts_with("Configuration File: "));
        assert!(out.contains("Current Configuration\n═════════════════════\n"));
        assert!(out.contains("form_factor: compact\n"));
        assert!(out.contains("show_add_command: true\n"));
        assert!(out.contains("(auto: 50% darker)"));
    }
}
