use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled on first use and shared for the life of the program.
#[derive(Debug)]
pub(super) struct StaticSelector {
    compiled: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(super) const fn new(source: &'static str) -> Self {
        Self {
            compiled: OnceLock::new(),
            source,
        }
    }

    pub(super) fn get(&self) -> &Selector {
        // selectors are literals, so a failure here is a typo caught by the first test touching it
        self.compiled.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("invalid static selector {:?}: {e:?}", self.source))
        })
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

#[macro_export]
macro_rules! static_selector {
    ($($x: ident <- $sel: literal);+ $(;)?) => {
        $(
            static $x: $crate::parse::static_selector::StaticSelector =
                $crate::parse::static_selector::StaticSelector::new($sel);
        )+
    };
}
