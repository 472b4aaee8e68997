use super::*;

const MARGIN: f64 = 100.0;

fn two_sections() -> Vec<SectionBounds> {
    // A spans 0..100, B spans 120..300.
    vec![SectionBounds::new(0.0, 100.0), SectionBounds::new(120.0, 180.0)]
}

fn hrefs(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_owned())).collect()
}

// --- SectionBounds ---

#[test]
fn contains_is_inclusive_at_both_ends() {
    let section = SectionBounds::new(200.0, 50.0);
    assert!(section.contains(100.0, MARGIN));
    assert!(section.contains(150.0, MARGIN));
    assert!(!section.contains(99.9, MARGIN));
    assert!(!section.contains(150.1, MARGIN));
}

// --- active_section ---

#[test]
fn offset_150_selects_second_section() {
    assert_eq!(active_section(150.0, &two_sections(), MARGIN), Some(1));
}

#[test]
fn page_top_selects_first_section() {
    assert_eq!(active_section(0.0, &two_sections(), MARGIN), Some(0));
}

#[test]
fn overlap_resolves_to_later_section() {
    // A covers [-100, 400], B covers [20, 200]; both contain 20.
    let sections = vec![SectionBounds::new(0.0, 500.0), SectionBounds::new(120.0, 180.0)];
    assert_eq!(active_section(20.0, &sections, MARGIN), Some(1));
}

#[test]
fn past_all_sections_matches_nothing() {
    assert_eq!(active_section(1_000.0, &two_sections(), MARGIN), None);
}

#[test]
fn no_sections_matches_nothing() {
    assert_eq!(active_section(0.0, &[], MARGIN), None);
}

// --- link_for_section ---

#[test]
fn link_found_by_fragment() {
    let links = hrefs(&["#home", "#about", "#projects"]);
    assert_eq!(link_for_section(&links, "about"), Some(1));
}

#[test]
fn first_matching_link_wins() {
    let links = hrefs(&["#about", "#about"]);
    assert_eq!(link_for_section(&links, "about"), Some(0));
}

#[test]
fn missing_link_is_none() {
    let mut links = hrefs(&["#home"]);
    links.push(None);
    assert_eq!(link_for_section(&links, "contact"), None);
}

#[test]
fn prefix_match_is_not_enough() {
    let links = hrefs(&["#about-me"]);
    assert_eq!(link_for_section(&links, "about"), None);
}

// --- is_fragment_href ---

#[test]
fn fragment_hrefs_take_part() {
    assert!(is_fragment_href(Some("#about")));
    assert!(is_fragment_href(Some("#")));
}

#[test]
fn other_hrefs_are_skipped() {
    assert!(!is_fragment_href(Some("/cv.pdf")));
    assert!(!is_fragment_href(Some("https://example.com/#about")));
    assert!(!is_fragment_href(None));
}

// --- link_marks ---

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn offset_150_marks_only_second_link() {
    let marks = link_marks(150.0, &two_sections(), &ids(&["a", "b"]), &hrefs(&["#a", "#b"]), MARGIN);
    assert_eq!(marks, Some(vec![false, true]));
}

#[test]
fn link_order_does_not_follow_section_order() {
    let marks = link_marks(0.0, &two_sections(), &ids(&["a", "b"]), &hrefs(&["#b", "#a"]), MARGIN);
    assert_eq!(marks, Some(vec![false, true]));
}

#[test]
fn overlap_marks_later_section_link() {
    let sections = vec![SectionBounds::new(0.0, 500.0), SectionBounds::new(120.0, 180.0)];
    let marks = link_marks(20.0, &sections, &ids(&["a", "b"]), &hrefs(&["#a", "#b"]), MARGIN);
    assert_eq!(marks, Some(vec![false, true]));
}

#[test]
fn matched_section_without_link_clears_all() {
    let marks = link_marks(150.0, &two_sections(), &ids(&["a", "b"]), &hrefs(&["#a", "#c"]), MARGIN);
    assert_eq!(marks, Some(vec![false, false]));
}

#[test]
fn no_match_leaves_marks_alone() {
    let marks = link_marks(1_000.0, &two_sections(), &ids(&["a", "b"]), &hrefs(&["#a", "#b"]), MARGIN);
    assert_eq!(marks, None);
}

#[test]
fn duplicate_links_mark_only_the_first() {
    let marks = link_marks(150.0, &two_sections(), &ids(&["a", "b"]), &hrefs(&["#b", "#b"]), MARGIN);
    assert_eq!(marks, Some(vec![true, false]));
}

// --- scroll_top_visible ---

#[test]
fn scroll_top_hidden_at_threshold() {
    assert!(!scroll_top_visible(400.0, 400.0));
}

#[test]
fn scroll_top_visible_past_threshold() {
    assert!(scroll_top_visible(400.5, 400.0));
    assert!(scroll_top_visible(2_000.0, 400.0));
}

#[test]
fn scroll_top_hidden_near_top() {
    assert!(!scroll_top_visible(0.0, 400.0));
    assert!(!scroll_top_visible(399.0, 400.0));
}
