mod error;
mod readings_page;
mod static_selector;
mod text;

pub use error::{Error, Result};
pub use readings_page::{Readings, Section, SectionType, TextBlock};
