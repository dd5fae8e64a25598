use scraper::{ElementRef, Selector};

/// Every text node under `element`, concatenated and trimmed.
pub(super) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Trimmed text of the first descendant matching `selector`, or `None` when nothing matches.
pub(super) fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element.select(selector).next().map(trimmed_text)
}
