use super::section::{OpenSection, SectionType};

/// What a block marker's left-hand label says about the section it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Heading {
    Known(SectionType),
    /// "Or:" - a substitute for the section just before it.
    Alternate,
    Unrecognized,
}

pub(super) fn classify(label: &str) -> Heading {
    match label.trim() {
        "First reading" => Heading::Known(SectionType::FirstReading),
        "Responsorial Psalm" => Heading::Known(SectionType::Psalm),
        "Second reading" => Heading::Known(SectionType::SecondReading),
        "Gospel Acclamation" => Heading::Known(SectionType::Acclamation),
        "Gospel" => Heading::Known(SectionType::Gospel),
        "Or:" => Heading::Alternate,
        _ => Heading::Unrecognized,
    }
}

/// Settles the type and alternate flag of a new section.
///
/// An alternate takes the type of `previous`, the most recently closed section. With nothing
/// before it there is no slot to substitute, so it becomes an `Unknown` alternate.
pub(super) fn resolve(
    label: &str,
    heading: Heading,
    previous: Option<&OpenSection>,
) -> (SectionType, bool) {
    match heading {
        Heading::Known(section_type) => (section_type, false),
        Heading::Alternate => match previous {
            Some(previous) => (previous.section_type(), true),
            None => {
                log::warn!("Alternate marker {label:?} has no preceding section to stand in for");
                (SectionType::Unknown, true)
            }
        },
        Heading::Unrecognized => {
            log::debug!("Unrecognized section heading {label:?}");
            (SectionType::Unknown, false)
        }
    }
}
