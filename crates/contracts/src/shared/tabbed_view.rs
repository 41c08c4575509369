//! Single-selection tab state shared by every documentation page.
//!
//! A page declares its categories as a plain enum implementing [`TabCategory`];
//! [`TabSelection`] owns the one active value. Selector controls and content
//! panels are both generated from `TabCategory::ALL`, so neither side can
//! reference a category the other does not know about.

use std::fmt::Debug;

/// Closed set of tab categories belonging to one page.
pub trait TabCategory: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every category, in the order the selector row shows them.
    const ALL: &'static [Self];

    /// Category that is active when the page is opened.
    const DEFAULT: Self;

    /// Stable kebab-case identifier, used for DOM ids and `data-tab` attributes.
    fn key(&self) -> &'static str;

    /// Caption of the selector control.
    fn label(&self) -> &'static str;
}

/// Page-local selection state.
///
/// `revision` counts effective changes only, so a repeated `select` with the
/// active category leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection<C: TabCategory> {
    current: C,
    revision: u64,
}

impl<C: TabCategory> TabSelection<C> {
    pub fn new() -> Self {
        Self {
            current: C::DEFAULT,
            revision: 0,
        }
    }

    /// Make `category` the active tab.
    pub fn select(&mut self, category: C) {
        if self.current != category {
            self.current = category;
            self.revision += 1;
        }
    }

    pub fn current_selection(&self) -> C {
        self.current
    }

    /// Whether the selector control for `category` is highlighted.
    pub fn is_selected(&self, category: C) -> bool {
        self.current == category
    }

    /// Whether the content panel for `category` is shown.
    pub fn is_visible(&self, category: C) -> bool {
        self.is_selected(category)
    }

    /// Categories whose panel is currently shown. Always exactly one.
    pub fn visible_panels(&self) -> impl Iterator<Item = C> + '_ {
        C::ALL.iter().copied().filter(move |c| self.is_visible(*c))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<C: TabCategory> Default for TabSelection<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Basic,
        Advanced,
        Specialized,
    }

    impl TabCategory for Level {
        const ALL: &'static [Self] = &[Level::Basic, Level::Advanced, Level::Specialized];
        const DEFAULT: Self = Level::Basic;

        fn key(&self) -> &'static str {
            match self {
                Level::Basic => "basic",
                Level::Advanced => "advanced",
                Level::Specialized => "specialized",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Level::Basic => "Basic",
                Level::Advanced => "Advanced",
                Level::Specialized => "Specialized",
            }
        }
    }

    fn visible(sel: &TabSelection<Level>) -> Vec<Level> {
        sel.visible_panels().collect()
    }

    #[test]
    fn test_starts_on_default() {
        let sel = TabSelection::<Level>::new();
        assert_eq!(sel.current_selection(), Level::Basic);
        assert_eq!(visible(&sel), vec![Level::Basic]);
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn test_basic_advanced_specialized_walkthrough() {
        let mut sel = TabSelection::<Level>::default();
        assert!(sel.is_visible(Level::Basic));

        sel.select(Level::Advanced);
        assert!(sel.is_visible(Level::Advanced));
        assert!(!sel.is_visible(Level::Basic));
        assert_eq!(sel.revision(), 1);

        sel.select(Level::Advanced);
        assert_eq!(sel.current_selection(), Level::Advanced);
        assert_eq!(sel.revision(), 1);

        sel.select(Level::Specialized);
        assert_eq!(visible(&sel), vec![Level::Specialized]);
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn test_highlight_follows_selection() {
        let mut sel = TabSelection::<Level>::new();
        sel.select(Level::Specialized);
        let highlighted: Vec<_> = Level::ALL
            .iter()
            .copied()
            .filter(|c| sel.is_selected(*c))
            .collect();
        assert_eq!(highlighted, vec![Level::Specialized]);
    }

    #[test]
    fn test_back_to_default_is_a_change() {
        let mut sel = TabSelection::<Level>::new();
        sel.select(Level::Advanced);
        sel.select(Level::Basic);
        assert_eq!(sel.current_selection(), Level::Basic);
        assert_eq!(sel.revision(), 2);
    }
}
