use super::shape;

/// Liturgical slot a section fills on the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    FirstReading,
    Psalm,
    SecondReading,
    Acclamation,
    Gospel,
    Unknown, // heading label missing from the lookup table, or content before any heading
}

/// One entry of a section's shaped text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TextBlock {
    Line(String),
    /// The verses sung between two repetitions of a psalm's refrain.
    Stanza(Vec<String>),
}

impl From<&str> for TextBlock {
    fn from(line: &str) -> Self {
        Self::Line(line.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub is_alternate: bool,
    pub reference: String,
    pub title: Option<String>,
    pub text: Vec<TextBlock>,
}

/// A section while the walk is still appending lines to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct OpenSection {
    pub(super) section_type: Option<SectionType>,
    pub(super) is_alternate: bool,
    pub(super) reference: Option<String>,
    pub(super) title: Option<String>,
    pub(super) lines: Vec<String>,
}

impl OpenSection {
    pub(super) fn new(section_type: SectionType, is_alternate: bool, reference: String) -> Self {
        Self {
            section_type: Some(section_type),
            is_alternate,
            reference: Some(reference),
            ..Self::default()
        }
    }

    /// True until a heading, title or line has touched this section.
    pub(super) fn is_empty(&self) -> bool {
        self.section_type.is_none()
            && !self.is_alternate
            && self.reference.is_none()
            && self.title.is_none()
            && self.lines.is_empty()
    }

    pub(super) fn section_type(&self) -> SectionType {
        self.section_type.unwrap_or(SectionType::Unknown)
    }

    /// Consumes the raw lines, replacing them with the text for this section's type.
    pub(super) fn close(self) -> Section {
        let section_type = self.section_type();
        Section {
            section_type,
            is_alternate: self.is_alternate,
            reference: self.reference.unwrap_or_default(),
            title: self.title,
            text: shape::shape(section_type, self.lines),
        }
    }
}
