//! Builds the display tree for a document under a template and theme.
//!
//! Sections with no underlying data are omitted in every template. Themes
//! only substitute the accent color; they never change what is rendered or
//! where.

use serde::Serialize;

use crate::models::resume::ResumeDocument;
use crate::render::template::{
    HeadingEmphasis, LayoutMode, TemplateChoice, ThemeChoice, MONOCHROME,
};

pub const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub template: TemplateChoice,
    pub layout: LayoutMode,
    pub accent: &'static str,
    pub regions: Vec<Region>,
}

#[cfg(test)]
impl RenderedDocument {
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }

    /// Section kinds in reading order across all regions.
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.regions
            .iter()
            .flat_map(|r| r.sections.iter().map(|s| s.kind))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub kind: RegionKind,
    /// Identity block; present in exactly one region.
    pub header: Option<Header>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub contact_lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub text: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Heading,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Entry {
        title: String,
        subtitle: String,
        /// Right-aligned detail such as dates.
        aside: String,
        body: String,
    },
    TagList {
        label: &'static str,
        items: Vec<String>,
    },
}

const SINGLE_COLUMN_ORDER: [SectionKind; 5] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Projects,
    SectionKind::Skills,
];
const SIDEBAR_ORDER: [SectionKind; 1] = [SectionKind::Skills];
const MAIN_ORDER: [SectionKind; 4] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Education,
];

pub fn render(doc: &ResumeDocument, template: TemplateChoice, theme: ThemeChoice) -> RenderedDocument {
    let heading_color = match template.heading_emphasis() {
        HeadingEmphasis::Accent => theme.color(),
        HeadingEmphasis::Monochrome => MONOCHROME,
    };
    let sections = |order: &[SectionKind]| -> Vec<Section> {
        order
            .iter()
            .filter_map(|&kind| build_section(doc, kind, heading_color))
            .collect()
    };

    let layout = template.layout();
    let regions = match layout {
        LayoutMode::SingleColumn => vec![Region {
            kind: RegionKind::Main,
            header: Some(build_header(doc)),
            sections: sections(&SINGLE_COLUMN_ORDER),
        }],
        LayoutMode::TwoRegion => vec![
            Region {
                kind: RegionKind::Sidebar,
                header: Some(build_header(doc)),
                sections: sections(&SIDEBAR_ORDER),
            },
            Region {
                kind: RegionKind::Main,
                header: None,
                sections: sections(&MAIN_ORDER),
            },
        ],
    };

    RenderedDocument {
        template,
        layout,
        accent: theme.color(),
        regions,
    }
}

fn build_header(doc: &ResumeDocument) -> Header {
    let p = &doc.personal;
    let name = if p.name.trim().is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        p.name.trim().to_string()
    };

    let github = labelled("GitHub", &doc.links.github);
    let linkedin = labelled("LinkedIn", &doc.links.linkedin);
    let lines = [
        join_present(&[p.email.as_str(), p.phone.as_str()]),
        join_present(&[p.location.as_str(), github.as_str(), linkedin.as_str()]),
    ];

    Header {
        name,
        contact_lines: lines.into_iter().filter(|l| !l.is_empty()).collect(),
    }
}

fn labelled(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{label}: {}", value.trim())
    }
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

fn build_section(doc: &ResumeDocument, kind: SectionKind, heading_color: &'static str) -> Option<Section> {
    let blocks: Vec<Block> = match kind {
        SectionKind::Summary => {
            let text = doc.summary.trim();
            if text.is_empty() {
                vec![]
            } else {
                vec![Block::Paragraph {
                    text: text.to_string(),
                }]
            }
        }
        SectionKind::Experience => doc
            .experience
            .iter()
            .map(|e| Block::Entry {
                title: e.company.clone(),
                subtitle: e.role.clone(),
                aside: e.duration.clone(),
                body: e.description.clone(),
            })
            .collect(),
        SectionKind::Education => doc
            .education
            .iter()
            .map(|e| Block::Entry {
                title: e.school.clone(),
                subtitle: e.degree.clone(),
                aside: e.year.clone(),
                body: String::new(),
            })
            .collect(),
        SectionKind::Projects => doc
            .projects
            .iter()
            .map(|p| Block::Entry {
                title: p.title.clone(),
                subtitle: p.tech.clone(),
                aside: String::new(),
                body: p.description.clone(),
            })
            .collect(),
        SectionKind::Skills => doc
            .skills
            .categories()
            .into_iter()
            .map(|(category, items)| Block::TagList {
                label: category.label(),
                items: items.to_vec(),
            })
            .collect(),
    };

    if blocks.is_empty() {
        return None;
    }
    Some(Section {
        kind,
        heading: Heading {
            text: kind.title(),
            color: heading_color,
        },
        blocks,
    })
}
