#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn page_sections() -> Vec<Section> {
    vec![Section::new("home", 0.0), Section::new("work", 800.0), Section::new("contact", 1600.0)]
}

fn page_links() -> Vec<NavLink> {
    vec![NavLink::new("#home"), NavLink::new("#work"), NavLink::new("#contact")]
}

fn run(state: ScrollState, offset: f64, doc_height: f64, sections: &[Section], links: &[NavLink]) -> (ScrollState, Vec<Effect>) {
    let input = ScrollInput { offset, doc_height, sections, nav_links: links };
    evaluate(state, &input, &ScrollConfig::default())
}

fn class_on(effects: &[Effect], target: Target) -> Option<bool> {
    effects.iter().find_map(|effect| match effect {
        Effect::ToggleClass { target: t, on, .. } if *t == target => Some(*on),
        _ => None,
    })
}

fn active_links(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ToggleClass { target: Target::NavLink(i), on: true, .. } => Some(*i),
            _ => None,
        })
        .collect()
}

fn depth_events(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Track(event) if event.event == "scroll_75"))
        .count()
}

// =============================================================
// active_section
// =============================================================

#[test]
fn active_section_picks_last_match_not_first() {
    let sections = page_sections();
    assert_eq!(active_section(&sections, 880.0), "work");
}

#[test]
fn active_section_empty_above_all_sections() {
    let sections = vec![Section::new("intro", 200.0)];
    assert_eq!(active_section(&sections, 130.0), "");
}

#[test]
fn active_section_empty_without_sections() {
    assert_eq!(active_section(&[], 5000.0), "");
}

#[test]
fn active_section_boundary_is_inclusive() {
    let sections = page_sections();
    assert_eq!(active_section(&sections, 800.0), "work");
    assert_eq!(active_section(&sections, 799.0), "home");
}

#[test]
fn active_section_unsorted_offsets_last_in_document_order_wins() {
    let sections = vec![Section::new("late", 900.0), Section::new("early", 100.0)];
    assert_eq!(active_section(&sections, 1000.0), "early");
}

// =============================================================
// progress
// =============================================================

#[test]
fn progress_zero_when_page_cannot_scroll() {
    assert_eq!(progress(300.0, 0.0), 0.0);
    assert_eq!(progress(300.0, -20.0), 0.0);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(progress(1200.0, 1000.0), 1.0);
    assert_eq!(progress(500.0, 1000.0), 0.5);
}

// =============================================================
// NavLink
// =============================================================

#[test]
fn fragment_only_for_hash_links() {
    assert_eq!(NavLink::new("#work").fragment(), Some("work"));
    assert_eq!(NavLink::new("#").fragment(), None);
    assert_eq!(NavLink::new("/blog").fragment(), None);
    assert_eq!(NavLink::new("").fragment(), None);
}

// =============================================================
// evaluate: active navigation
// =============================================================

#[test]
fn offset_750_selects_section_at_800() {
    let (_, effects) = run(ScrollState::default(), 750.0, 3000.0, &page_sections(), &page_links());
    assert_eq!(active_links(&effects), vec![1]);
}

#[test]
fn offsets_within_one_section_agree() {
    let sections = page_sections();
    let links = page_links();
    let (_, a) = run(ScrollState::default(), 700.0, 10_000.0, &sections, &links);
    let (_, b) = run(ScrollState::default(), 1400.0, 10_000.0, &sections, &links);
    assert_eq!(active_links(&a), active_links(&b));
}

#[test]
fn top_of_page_has_no_active_link_when_first_section_is_low() {
    let sections = vec![Section::new("intro", 200.0), Section::new("work", 900.0)];
    let links = vec![NavLink::new("#intro"), NavLink::new("#work")];
    let (_, effects) = run(ScrollState::default(), 0.0, 2000.0, &sections, &links);
    assert!(active_links(&effects).is_empty());
    assert_eq!(class_on(&effects, Target::NavLink(0)), Some(false));
    assert_eq!(class_on(&effects, Target::NavLink(1)), Some(false));
}

#[test]
fn no_sections_marks_nothing_active() {
    let (_, effects) = run(ScrollState::default(), 500.0, 2000.0, &[], &page_links());
    assert!(active_links(&effects).is_empty());
}

#[test]
fn never_more_than_one_active_link() {
    let sections = page_sections();
    let links = page_links();
    for offset in (0..3000).step_by(37) {
        let (_, effects) = run(ScrollState { depth_tracked: true }, f64::from(offset), 3000.0, &sections, &links);
        assert!(active_links(&effects).len() <= 1, "offset {offset}");
    }
}

#[test]
fn external_links_are_left_untouched() {
    let links = vec![NavLink::new("/blog"), NavLink::new("#"), NavLink::new("#work")];
    let (_, effects) = run(ScrollState::default(), 750.0, 3000.0, &page_sections(), &links);
    assert_eq!(class_on(&effects, Target::NavLink(0)), None);
    assert_eq!(class_on(&effects, Target::NavLink(1)), None);
    assert_eq!(class_on(&effects, Target::NavLink(2)), Some(true));
}

#[test]
fn link_to_unknown_section_is_inactive() {
    let links = vec![NavLink::new("#missing")];
    let (_, effects) = run(ScrollState::default(), 750.0, 3000.0, &page_sections(), &links);
    assert_eq!(class_on(&effects, Target::NavLink(0)), Some(false));
}

// =============================================================
// evaluate: header and back-to-top thresholds
// =============================================================

#[test]
fn header_scrolled_is_strictly_above_ten() {
    let (_, at_10) = run(ScrollState::default(), 10.0, 5000.0, &[], &[]);
    let (_, at_11) = run(ScrollState::default(), 11.0, 5000.0, &[], &[]);
    assert_eq!(class_on(&at_10, Target::Header), Some(false));
    assert_eq!(class_on(&at_11, Target::Header), Some(true));
}

#[test]
fn back_to_top_is_strictly_above_420() {
    let (_, at_420) = run(ScrollState::default(), 420.0, 5000.0, &[], &[]);
    let (_, at_421) = run(ScrollState::default(), 421.0, 5000.0, &[], &[]);
    assert_eq!(class_on(&at_420, Target::BackToTop), Some(false));
    assert_eq!(class_on(&at_421, Target::BackToTop), Some(true));
}

#[test]
fn negative_offset_is_treated_as_zero() {
    let (_, effects) = run(ScrollState::default(), -40.0, 1000.0, &page_sections(), &page_links());
    assert_eq!(class_on(&effects, Target::Header), Some(false));
    assert_eq!(active_links(&effects), vec![0]);
}

// =============================================================
// evaluate: scroll-depth latch
// =============================================================

#[test]
fn depth_event_not_fired_below_threshold() {
    let (state, effects) = run(ScrollState::default(), 749.0, 1000.0, &[], &[]);
    assert!(!state.depth_tracked);
    assert_eq!(depth_events(&effects), 0);
}

#[test]
fn depth_event_fires_exactly_once() {
    let mut state = ScrollState::default();
    let mut fired = 0;
    for offset in [0.0, 500.0, 750.0, 1000.0, 0.0, 400.0, 900.0] {
        let (next, effects) = run(state, offset, 1000.0, &[], &[]);
        fired += depth_events(&effects);
        state = next;
    }
    assert_eq!(fired, 1);
    assert!(state.depth_tracked);
}

#[test]
fn depth_event_fires_at_exact_threshold() {
    let (state, effects) = run(ScrollState::default(), 750.0, 1000.0, &[], &[]);
    assert!(state.depth_tracked);
    assert_eq!(depth_events(&effects), 1);
}

#[test]
fn unscrollable_page_never_fires_depth_event() {
    let (state, effects) = run(ScrollState::default(), 0.0, 0.0, &[], &[]);
    assert!(!state.depth_tracked);
    assert_eq!(depth_events(&effects), 0);
}

// =============================================================
// evaluate: idempotence
// =============================================================

#[test]
fn repeated_evaluation_is_idempotent_once_latched() {
    let sections = page_sections();
    let links = page_links();
    let (state, _) = run(ScrollState::default(), 900.0, 1000.0, &sections, &links);
    let (again, first) = run(state, 900.0, 1000.0, &sections, &links);
    let (still, second) = run(again, 900.0, 1000.0, &sections, &links);
    assert_eq!(first, second);
    assert_eq!(again, still);
    assert_eq!(depth_events(&first), 0);
}
