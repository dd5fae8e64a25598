use scraper::ElementRef;

use crate::parse::text::{text_from_selection, trimmed_text};
use crate::static_selector;

// div classes universalis.com puts on verse and prose lines
const LINE_CLASSES: [&str; 4] = ["v", "vi", "p", "pi"];

/// A child of the readings container, reduced to what the walk cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Node {
    /// The header table that opens a new section, ex. `First reading | Rom 1:1-2`.
    BlockMarker { label: String, reference: String },
    Heading(String),
    Line(String),
}

impl Node {
    /// `None` for anything the walk skips over.
    pub(super) fn from_html_element(element: ElementRef<'_>) -> Option<Self> {
        static_selector!(
            LABEL_SELECTOR <- r#"th[align="left"]"#;
            REFERENCE_SELECTOR <- r#"th[align="right"]"#;
        );
        match element.value().name() {
            "table" => Some(Self::BlockMarker {
                label: text_from_selection(&LABEL_SELECTOR, element).unwrap_or_default(),
                reference: text_from_selection(&REFERENCE_SELECTOR, element).unwrap_or_default(),
            }),
            "h4" => Some(Self::Heading(trimmed_text(element))),
            "div" if element
                .value()
                .classes()
                .any(|class| LINE_CLASSES.contains(&class)) =>
            {
                Some(Self::Line(trimmed_text(element)))
            }
            _ => None,
        }
    }
}

/// The direct element children of `container`, in document order.
pub(super) fn nodes<'a>(container: ElementRef<'a>) -> impl Iterator<Item = Node> + 'a {
    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(Node::from_html_element)
}
