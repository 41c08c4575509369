//! ViewModel for the tabbed content view

use contracts::shared::tabbed_view::{TabCategory, TabSelection};
use leptos::logging::log;
use leptos::prelude::*;

/// Reactive wrapper around [`TabSelection`].
///
/// Created inside the page component, so it lives exactly as long as the page
/// instance and starts over at the default category on every visit.
pub struct TabbedViewVm<C: TabCategory> {
    /// Selection state
    pub selection: RwSignal<TabSelection<C>>,
}

impl<C: TabCategory> Clone for TabbedViewVm<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TabCategory> Copy for TabbedViewVm<C> {}

impl<C: TabCategory> TabbedViewVm<C> {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(TabSelection::new()),
        }
    }

    /// Switch to `category`. Re-selecting the active tab does not notify subscribers.
    pub fn select(&self, category: C) {
        if self.selection.with_untracked(|s| s.is_selected(category)) {
            return;
        }
        log!("tab selected: {}", category.key());
        self.selection.update(|s| s.select(category));
    }

    /// Active category (tracked).
    pub fn current_selection(&self) -> C {
        self.selection.with(|s| s.current_selection())
    }

    /// Whether `category` is the active one (tracked).
    pub fn is_selected(&self, category: C) -> bool {
        self.selection.with(|s| s.is_selected(category))
    }

    /// Whether the panel for `category` is shown (tracked).
    pub fn is_visible(&self, category: C) -> bool {
        self.selection.with(|s| s.is_visible(category))
    }
}

impl<C: TabCategory> Default for TabbedViewVm<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::docs::{AggregationTopic, JoinKind};

    /// Reads `f` from inside a memo, the way a view's `class:` closure does.
    fn observed<T, F>(f: F) -> T
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Memo::new(move |_| f()).get_untracked()
    }

    #[test]
    fn test_select_updates_selection_once() {
        Owner::new().with(|| {
            let vm = TabbedViewVm::<JoinKind>::new();
            assert_eq!(observed(move || vm.current_selection()), JoinKind::Inner);

            vm.select(JoinKind::Outer);
            vm.select(JoinKind::Outer);

            assert!(observed(move || vm.is_selected(JoinKind::Outer)));
            assert!(!observed(move || vm.is_selected(JoinKind::Inner)));
            assert_eq!(vm.selection.with_untracked(|s| s.revision()), 1);
        });
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        Owner::new().with(|| {
            let vm = TabbedViewVm::<AggregationTopic>::new();
            let shown = move || -> Vec<AggregationTopic> {
                AggregationTopic::ALL
                    .iter()
                    .copied()
                    .filter(|&c| observed(move || vm.is_visible(c)))
                    .collect()
            };
            assert_eq!(shown(), vec![AggregationTopic::DEFAULT]);

            for category in AggregationTopic::ALL.iter().copied() {
                vm.select(category);
                assert_eq!(shown(), vec![category]);
            }
        });
    }

    #[test]
    fn test_instances_are_independent() {
        Owner::new().with(|| {
            let first = TabbedViewVm::<JoinKind>::new();
            let second = TabbedViewVm::<JoinKind>::new();

            first.select(JoinKind::Outer);

            assert_eq!(observed(move || first.current_selection()), JoinKind::Outer);
            assert_eq!(observed(move || second.current_selection()), JoinKind::Inner);
        });
    }
}
