mod classify;
mod node;
mod readings;
mod section;
mod shape;
mod walk;

pub use readings::Readings;
pub use section::{Section, SectionType, TextBlock};
