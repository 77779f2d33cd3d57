//! Localized user-facing strings.
//!
//! Every label the panel shows goes through [`t`]. Only English ships for now,
//! so a lookup miss falls back to the key itself, which is the English text.

use phf::phf_map;

static EN: phf::Map<&'static str, &'static str> = phf_map! {
    "General" => "General",
    "Editor Menu" => "Editor Menu",
    "File Menu" => "File Menu",
    "Left Ribbon" => "Left Ribbon",
    "Right Ribbon" => "Right Ribbon",
    "Titlebar" => "Titlebar",
    "Statusbar" => "Statusbar",
    "Page Header" => "Page Header",
    "Hide Commands" => "Hide Commands",
    "Always ask before removing?" => "Always ask before removing?",
    "Always show a Popup to confirm deletion of a Command." =>
        "Always show a Popup to confirm deletion of a Command.",
    "Show \"Add Command\" Button" => "Show \"Add Command\" Button",
    "Show the \"Add Command\" Button in every Menu. Requires restart." =>
        "Show the \"Add Command\" Button in every Menu. Requires restart.",
    "Enable debugging" => "Enable debugging",
    "Enable console output." => "Enable console output.",
    "Please restart for these changes to take effect." =>
        "Please restart for these changes to take effect.",
    "No commands yet." => "No commands yet.",
    "Press h to manage hidden commands" => "Press h to manage hidden commands",
    "No hidden commands." => "No hidden commands.",
    "Settings saved" => "Settings saved",
    "Failed to save settings" => "Failed to save settings",
    "Made with care by the Commander contributors" =>
        "Made with care by the Commander contributors",
};

/// Look up the display string for `key`
pub fn t(key: &'static str) -> &'static str {
    EN.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_resolves() {
        assert_eq!(t("Hide Commands"), "Hide Commands");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("Not translated"), "Not translated");
    }
}
