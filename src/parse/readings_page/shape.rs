use super::section::{SectionType, TextBlock};

/// Turns the raw lines collected for a section into its final text.
pub(super) fn shape(section_type: SectionType, lines: Vec<String>) -> Vec<TextBlock> {
    match section_type {
        SectionType::Psalm => psalm(lines),
        SectionType::Acclamation => acclamation(lines),
        SectionType::FirstReading
        | SectionType::SecondReading
        | SectionType::Gospel
        | SectionType::Unknown => lines.into_iter().map(TextBlock::Line).collect(),
    }
}

/// The refrain is taken to be the first line. Output is the refrain followed by every
/// non-empty run of lines between its repetitions.
// A psalm whose block does not open with its refrain gets split on its first verse instead.
fn psalm(lines: Vec<String>) -> Vec<TextBlock> {
    let Some(refrain) = lines.first().cloned() else {
        return Vec::new();
    };
    let stanzas = lines
        .split(|line| *line == refrain)
        .filter(|run| !run.is_empty())
        .map(|run| TextBlock::Stanza(run.to_vec()))
        .collect::<Vec<_>>();
    let mut text = Vec::with_capacity(stanzas.len() + 1);
    text.push(TextBlock::Line(refrain));
    text.extend(stanzas);
    text
}

/// Drops the framing first and last lines (the "Alleluia"s) around the verse.
fn acclamation(lines: Vec<String>) -> Vec<TextBlock> {
    let inner = lines.len().saturating_sub(2);
    lines
        .into_iter()
        .skip(1)
        .take(inner)
        .map(TextBlock::Line)
        .collect()
}
