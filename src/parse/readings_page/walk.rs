use super::classify::{classify, resolve};
use super::node::Node;
use super::section::OpenSection;

/// Accumulator for the walk over the readings container.
///
/// Each [`Walk::step`] takes the state by value and hands back the next one, so the walk can be
/// driven one node at a time in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct Walk {
    open: OpenSection,
    closed: Vec<OpenSection>,
}

impl Walk {
    #[must_use]
    pub(super) fn step(self, node: Node) -> Self {
        let Self {
            mut open,
            mut closed,
        } = self;
        match node {
            Node::BlockMarker { label, reference } => {
                if !open.is_empty() {
                    closed.push(open);
                }
                let (section_type, is_alternate) = resolve(&label, classify(&label), closed.last());
                open = OpenSection::new(section_type, is_alternate, reference);
            }
            Node::Heading(title) => open.title = Some(title),
            Node::Line(line) => open.lines.push(line),
        }
        Self { open, closed }
    }

    /// Flushes the open section unless nothing was ever written to it.
    pub(super) fn finish(self) -> Vec<OpenSection> {
        let Self { open, mut closed } = self;
        if !open.is_empty() {
            closed.push(open);
        }
        closed
    }
}

pub(super) fn walk(nodes: impl IntoIterator<Item = Node>) -> Vec<OpenSection> {
    nodes.into_iter().fold(Walk::default(), Walk::step).finish()
}
