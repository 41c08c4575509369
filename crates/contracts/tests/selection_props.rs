//! Property-based tests for the tab selection state.
//!
//! Drives every shipped page through arbitrary selection sequences and checks
//! that exactly one panel is visible after each step.

use contracts::docs::{AggregationPage, DocPage, JoinsPage, QueriesPage, SchemaPage};
use contracts::shared::tabbed_view::{TabCategory, TabSelection};
use proptest::prelude::*;

fn run_sequence<P: DocPage>(picks: &[usize]) -> Result<(), TestCaseError> {
    let all = P::Category::ALL;
    let mut sel = TabSelection::<P::Category>::new();

    prop_assert_eq!(sel.current_selection(), P::Category::DEFAULT);
    prop_assert_eq!(sel.visible_panels().count(), 1);

    for pick in picks {
        let category = all[pick % all.len()];
        let before = sel;
        sel.select(category);

        prop_assert_eq!(sel.current_selection(), category);
        let visible: Vec<_> = sel.visible_panels().collect();
        prop_assert_eq!(visible, vec![category]);

        if before.current_selection() == category {
            prop_assert_eq!(sel.revision(), before.revision());
        } else {
            prop_assert_eq!(sel.revision(), before.revision() + 1);
        }

        // selecting the same category again never changes anything
        let settled = sel;
        sel.select(category);
        prop_assert_eq!(sel, settled);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn queries_page_single_visible_panel(picks in prop::collection::vec(0usize..16, 0..40)) {
        run_sequence::<QueriesPage>(&picks)?;
    }

    #[test]
    fn schema_page_single_visible_panel(picks in prop::collection::vec(0usize..16, 0..40)) {
        run_sequence::<SchemaPage>(&picks)?;
    }

    #[test]
    fn joins_page_single_visible_panel(picks in prop::collection::vec(0usize..16, 0..40)) {
        run_sequence::<JoinsPage>(&picks)?;
    }

    #[test]
    fn aggregation_page_single_visible_panel(picks in prop::collection::vec(0usize..16, 0..40)) {
        run_sequence::<AggregationPage>(&picks)?;
    }
}

#[test]
fn every_selector_leads_to_a_panel() {
    fn panels_match_selectors<P: DocPage>() {
        for category in P::Category::ALL {
            let panel = P::panel(*category);
            assert!(!panel.heading.is_empty(), "{:?} has no heading", category);
            assert!(!panel.is_empty(), "{:?} has no body", category);
        }
    }

    panels_match_selectors::<QueriesPage>();
    panels_match_selectors::<SchemaPage>();
    panels_match_selectors::<JoinsPage>();
    panels_match_selectors::<AggregationPage>();
}
