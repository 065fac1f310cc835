#![forbid(unsafe_code)]

//! End-to-end homepage behavior through the scripted host.

use sprig_core::{ClassName, Dir, ElementId, HostOp, WatcherKind};
use sprig_harness::Timeline;
use sprig_home::{CounterHook, HomeHooks, HomepageController};
use sprig_i18n::{BilingualText, Language};

const TOGGLE: ElementId = ElementId::new(1);
const HERO: ElementId = ElementId::new(2);
const SECTION_A: ElementId = ElementId::new(3);
const SECTION_B: ElementId = ElementId::new(4);
const ITEM: ElementId = ElementId::new(5);
const COUNTER: ElementId = ElementId::new(8);
const EN_BLOCK: ElementId = ElementId::new(10);
const AR_BLOCK: ElementId = ElementId::new(11);
const TITLE: ElementId = ElementId::new(12);
const ANCHOR: ElementId = ElementId::new(20);
const ANCHOR_TARGET: ElementId = ElementId::new(21);
const DANGLING_ANCHOR: ElementId = ElementId::new(22);

/// A homepage with every hook wired, initialized in `language`.
fn homepage(language: Language) -> Timeline<HomepageController> {
    let hooks = HomeHooks::new()
        .with_language_toggle(TOGGLE)
        .with_hero_content(HERO)
        .with_section(SECTION_A)
        .with_section(SECTION_B)
        .with_item(ITEM)
        .with_counter(CounterHook::parse(COUNTER, "1000").expect("valid target"))
        .with_language_block(EN_BLOCK, Language::En)
        .with_language_block(AR_BLOCK, Language::Ar)
        .with_text(TITLE, BilingualText::new("Our Story", "قصتنا"))
        .with_anchor(ANCHOR, Some(ANCHOR_TARGET))
        .with_anchor(DANGLING_ANCHOR, None);
    let mut timeline = Timeline::new(HomepageController::new(hooks, language));
    timeline.init();
    timeline
}

/// Counter values emitted so far, parsed back out of the op log.
fn counter_values(timeline: &Timeline<HomepageController>) -> Vec<u64> {
    timeline
        .host()
        .ops()
        .iter()
        .filter_map(|op| match op {
            HostOp::SetText { el, text } if *el == COUNTER => {
                Some(text.replace(',', "").parse().expect("numeric counter text"))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn init_shows_only_the_detected_language() {
    let timeline = homepage(Language::En);
    let host = timeline.host();
    assert!(!host.has_class(EN_BLOCK, ClassName::Hidden));
    assert!(host.has_class(AR_BLOCK, ClassName::Hidden));
    assert_eq!(host.text_of(TITLE), Some("Our Story"));
    assert_eq!(host.dir(), Dir::Ltr);
    assert_eq!(host.lang(), Some("en"));
}

#[test]
fn arabic_start_flips_direction_and_content() {
    let timeline = homepage(Language::Ar);
    let host = timeline.host();
    assert!(host.has_class(EN_BLOCK, ClassName::Hidden));
    assert!(!host.has_class(AR_BLOCK, ClassName::Hidden));
    assert_eq!(host.text_of(TITLE), Some("قصتنا"));
    assert_eq!(host.dir(), Dir::Rtl);
    assert_eq!(host.lang(), Some("ar"));
}

#[test]
fn init_registers_watchers_and_candidates() {
    let timeline = homepage(Language::En);
    let host = timeline.host();
    for el in [SECTION_A, SECTION_B, ITEM] {
        assert!(host.has_class(el, ClassName::RevealCandidate));
        assert!(host.is_observed(WatcherKind::Reveal, el));
    }
    assert!(host.is_observed(WatcherKind::Counter, COUNTER));
}

#[test]
fn toggle_swaps_blocks_text_and_direction() {
    let mut timeline = homepage(Language::En);
    timeline.click(TOGGLE);
    let host = timeline.host();
    assert!(host.has_class(EN_BLOCK, ClassName::Hidden));
    assert!(!host.has_class(AR_BLOCK, ClassName::Hidden));
    assert_eq!(host.text_of(TITLE), Some("قصتنا"));
    assert_eq!(host.dir(), Dir::Rtl);
    assert_eq!(host.lang(), Some("ar"));
}

#[test]
fn double_toggle_restores_the_initial_page() {
    let mut timeline = homepage(Language::En);
    let before = (
        timeline.host().classes_of(EN_BLOCK),
        timeline.host().classes_of(AR_BLOCK),
        timeline.host().text_of(TITLE).map(str::to_owned),
        timeline.host().dir(),
        timeline.host().lang(),
    );
    timeline.click(TOGGLE);
    timeline.click(TOGGLE);
    let after = (
        timeline.host().classes_of(EN_BLOCK),
        timeline.host().classes_of(AR_BLOCK),
        timeline.host().text_of(TITLE).map(str::to_owned),
        timeline.host().dir(),
        timeline.host().lang(),
    );
    assert_eq!(before, after);
    assert_eq!(timeline.controller().language(), Language::En);
}

#[test]
fn empty_bilingual_value_keeps_previous_text() {
    let hooks = HomeHooks::new()
        .with_language_toggle(TOGGLE)
        .with_text(TITLE, BilingualText::new("Our Story", ""));
    let mut timeline = Timeline::new(HomepageController::new(hooks, Language::En));
    timeline.init();
    assert_eq!(timeline.host().text_of(TITLE), Some("Our Story"));

    timeline.host_mut().clear_ops();
    timeline.click(TOGGLE);
    assert_eq!(timeline.host().text_of(TITLE), Some("Our Story"));
    let title_writes = timeline
        .host()
        .ops()
        .iter()
        .filter(|op| matches!(op, HostOp::SetText { el, .. } if *el == TITLE))
        .count();
    assert_eq!(title_writes, 0);
}

#[test]
fn counter_ramp_is_monotone_and_converges_exactly() {
    let mut timeline = homepage(Language::En);
    timeline.enter_viewport(WatcherKind::Counter, COUNTER);
    assert!(
        !timeline.host().is_observed(WatcherKind::Counter, COUNTER),
        "counter watcher is one-shot"
    );

    // 2 s ramp at 16 ms per frame: one anchor frame plus 125 samples.
    let delivered = timeline.run_frames(200);
    assert_eq!(delivered, 126);
    assert_eq!(timeline.host().text_of(COUNTER), Some("1,000"));

    let values = counter_values(&timeline);
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&1000));
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(values.iter().all(|value| *value <= 1000));
}

#[test]
fn counter_ignores_repeat_viewport_entries() {
    let mut timeline = homepage(Language::En);
    timeline.enter_viewport(WatcherKind::Counter, COUNTER);
    timeline.run_frames(200);
    assert_eq!(timeline.host().text_of(COUNTER), Some("1,000"));

    timeline.host_mut().clear_ops();
    timeline.exit_viewport(WatcherKind::Counter, COUNTER);
    timeline.enter_viewport(WatcherKind::Counter, COUNTER);
    assert_eq!(timeline.run_frames(10), 0);
    assert!(timeline.host().ops().is_empty());
    assert_eq!(timeline.host().text_of(COUNTER), Some("1,000"));
}

#[test]
fn counter_text_uses_arabic_digits_under_arabic() {
    let mut timeline = homepage(Language::Ar);
    timeline.enter_viewport(WatcherKind::Counter, COUNTER);
    timeline.run_frames(200);
    assert_eq!(timeline.host().text_of(COUNTER), Some("١\u{66c}٠٠٠"));
}

#[test]
fn reveal_marks_once_and_stays_marked() {
    let mut timeline = homepage(Language::En);
    timeline.enter_viewport(WatcherKind::Reveal, SECTION_A);
    assert!(timeline.host().has_class(SECTION_A, ClassName::Revealed));
    assert!(
        timeline.host().is_observed(WatcherKind::Reveal, SECTION_A),
        "reveal watcher stays attached"
    );

    timeline.host_mut().clear_ops();
    timeline.exit_viewport(WatcherKind::Reveal, SECTION_A);
    timeline.enter_viewport(WatcherKind::Reveal, SECTION_A);
    assert!(timeline.host().ops().is_empty());
    assert!(timeline.host().has_class(SECTION_A, ClassName::Revealed));
}

#[test]
fn scroll_translates_the_hero_at_half_rate() {
    let mut timeline = homepage(Language::En);
    timeline.scroll(200.0);
    assert_eq!(timeline.host().translate_y(HERO), Some(-100.0));
    timeline.scroll(120.5);
    assert_eq!(timeline.host().translate_y(HERO), Some(-60.25));
}

#[test]
fn anchor_click_scrolls_to_resolved_target_only() {
    let mut timeline = homepage(Language::En);
    timeline.click(ANCHOR);
    assert_eq!(timeline.host().scroll_targets(), &[ANCHOR_TARGET]);
    timeline.click(DANGLING_ANCHOR);
    assert_eq!(timeline.host().scroll_targets(), &[ANCHOR_TARGET]);
}

#[test]
fn bare_page_still_gets_document_attributes() {
    let mut timeline = Timeline::new(HomepageController::new(HomeHooks::new(), Language::En));
    timeline.init();
    let ops = timeline.host().ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], HostOp::SetDocumentDir { dir: Dir::Ltr }));
    assert!(matches!(ops[1], HostOp::SetDocumentLang { tag: "en" }));
}
