// Light/dark palettes; lives for the page session only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_bg: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub panel_bg: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub rail: &'static str,
    pub accent: &'static str,
    pub leader_ring: &'static str,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Label of the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light Mode",
            ThemeMode::Light => "Dark Mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                page_bg: "#111827",
                text: "#ffffff",
                muted: "#9ca3af",
                panel_bg: "#1f2937",
                card_bg: "#1e293b",
                border: "#374151",
                rail: "#4b5563",
                accent: "#60a5fa",
                leader_ring: "#f87171",
            },
            ThemeMode::Light => Palette {
                page_bg: "#f3f4f6",
                text: "#111827",
                muted: "#4b5563",
                panel_bg: "#ffffff",
                card_bg: "#e5e7eb",
                border: "#d1d5db",
                rail: "#9ca3af",
                accent: "#2563eb",
                leader_ring: "#dc2626",
            },
        }
    }
}
