use serde::{Deserialize, Serialize};

/// Visual template. The first variant is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateChoice {
    #[default]
    Classic,
    Modern,
    Minimal,
}

/// How regions are arranged on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    SingleColumn,
    /// Sidebar with identity and skills beside a main region.
    TwoRegion,
}

/// Whether section headings carry the theme accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingEmphasis {
    Accent,
    Monochrome,
}

impl TemplateChoice {
    pub const ALL: [TemplateChoice; 3] = [
        TemplateChoice::Classic,
        TemplateChoice::Modern,
        TemplateChoice::Minimal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateChoice::Classic => "Classic",
            TemplateChoice::Modern => "Modern",
            TemplateChoice::Minimal => "Minimal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn layout(&self) -> LayoutMode {
        match self {
            TemplateChoice::Modern => LayoutMode::TwoRegion,
            TemplateChoice::Classic | TemplateChoice::Minimal => LayoutMode::SingleColumn,
        }
    }

    pub fn heading_emphasis(&self) -> HeadingEmphasis {
        match self {
            TemplateChoice::Classic | TemplateChoice::Modern => HeadingEmphasis::Accent,
            TemplateChoice::Minimal => HeadingEmphasis::Monochrome,
        }
    }
}

/// Heading color used when a template renders in monochrome.
pub const MONOCHROME: &str = "#111111";

/// Accent palette. The first variant is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeChoice {
    #[default]
    Teal,
    Navy,
    Burgundy,
    Forest,
    Charcoal,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 5] = [
        ThemeChoice::Teal,
        ThemeChoice::Navy,
        ThemeChoice::Burgundy,
        ThemeChoice::Forest,
        ThemeChoice::Charcoal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeChoice::Teal => "Teal",
            ThemeChoice::Navy => "Navy",
            ThemeChoice::Burgundy => "Burgundy",
            ThemeChoice::Forest => "Forest",
            ThemeChoice::Charcoal => "Charcoal",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThemeChoice::Teal => "hsl(168, 60%, 40%)",
            ThemeChoice::Navy => "hsl(220, 60%, 35%)",
            ThemeChoice::Burgundy => "hsl(345, 60%, 35%)",
            ThemeChoice::Forest => "hsl(150, 50%, 30%)",
            ThemeChoice::Charcoal => "hsl(0, 0%, 25%)",
        }
    }

    /// Looks up a theme by its persisted color value.
    pub fn from_color(color: &str) -> Option<Self> {
        let wanted = color.trim();
        Self::ALL.into_iter().find(|t| t.color() == wanted)
    }

    /// Accepts either a theme name or its color value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_color(value).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|t| t.name().eq_ignore_ascii_case(value.trim()))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeInfo {
    pub name: &'static str,
    pub color: &'static str,
}

pub fn palette() -> Vec<ThemeInfo> {
    ThemeChoice::ALL
        .iter()
        .map(|t| ThemeInfo {
            name: t.name(),
            color: t.color(),
        })
        .collect()
}
