//! End-to-end tests against a wiki-style profile page.
//!
//! The fixture mirrors the layout of a talent page: a `#contents-index`
//! table of contents followed by `<h3><a name>` sections, each with an
//! `<h4>` subtitle and a nested `<ul>` outline captioned with member icons.

use std::io::Write;

use trailmap::outline::{
    DEFAULT_INDEX_SELECTOR, DETAILS_INDEX_SELECTOR, flatten_trails, trail_path,
};
use trailmap::{Error, LinkNode, ListTreeNode, Outline};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn load() -> Outline {
    Outline::open(fixture_path("outline.html")).expect("Failed to read fixture")
}

// ============================================================================
// Trails
// ============================================================================

#[test]
fn test_index_trails() {
    let outline = load();
    let trails = outline.trails_at(DEFAULT_INDEX_SELECTOR).unwrap();

    assert_eq!(trails.len(), 2);
    assert_eq!(trails[0], LinkNode::new("プロフィール", "profile"));

    let details = &trails[1];
    assert_eq!(details.title, "詳しく知りたい");
    assert_eq!(details.href, "details");

    let children = details.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].href, "how_to_ruri");
    assert_eq!(children[0].children(), &[LinkNode::new("ゲーム配信", "games")]);
    // "##collab" loses its whole leading run
    assert_eq!(children[1], LinkNode::new("コラボ", "collab"));
}

#[test]
fn test_details_sublist_selector() {
    let outline = load();
    let trails = outline.trails_at(DETAILS_INDEX_SELECTOR).unwrap();

    let hrefs: Vec<_> = trails.iter().map(|t| t.href.as_str()).collect();
    assert_eq!(hrefs, vec!["how_to_ruri", "collab"]);

    // The demo's default section is the first details entry
    let section = outline.resolve(&trails[0].href).unwrap();
    assert_eq!(section.tree_title, "まずはここから");
}

#[test]
fn test_breadcrumb_path() {
    let outline = load();
    let trails = outline.trails_at(DEFAULT_INDEX_SELECTOR).unwrap();

    let path = trail_path(&trails, "games").unwrap();
    let titles: Vec<_> = path.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["詳しく知りたい", "栞葉るりの楽しみ方", "ゲーム配信"]);
}

// ============================================================================
// Section resolution
// ============================================================================

#[test]
fn test_resolve_section() {
    let outline = load();
    let section = outline.resolve("how_to_ruri").unwrap();

    assert_eq!(section.tree_title, "まずはここから");
    assert_eq!(
        section.tree,
        vec![
            ListTreeNode::branch(
                "歌枠",
                vec![
                    ListTreeNode::leaf("初配信"),
                    ListTreeNode::leaf("コラボ歌枠"),
                ]
            ),
            ListTreeNode::branch("ゲーム", vec![ListTreeNode::leaf("Minecraft")]),
            ListTreeNode::leaf("雑談"),
        ]
    );

    let pairs: Vec<_> = section
        .count
        .iter()
        .map(|(k, &v)| (k.as_str(), v))
        .collect();
    assert_eq!(pairs, vec![("栞葉るり", 2), ("健屋花那", 2), ("", 1)]);
}

#[test]
fn test_resolve_accepts_leading_hash() {
    let outline = load();
    assert_eq!(
        outline.resolve("#profile").unwrap(),
        outline.resolve("profile").unwrap()
    );
}

#[test]
fn test_leaf_fragments_concatenated() {
    let outline = load();
    let section = outline.resolve("profile").unwrap();

    assert_eq!(section.tree_title, "基本情報");
    let titles: Vec<_> = section.tree.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["誕生日: 7月29日", "身長:150cm"]);
    assert!(section.count.is_empty());
}

#[test]
fn test_subtitle_scan_runs_past_next_section() {
    // The games section has no <h4> of its own; the scan keeps going and
    // picks up the following section's subtitle.
    let outline = load();
    let section = outline.resolve("games").unwrap();
    assert_eq!(section.tree_title, "コラボ一覧");
    assert_eq!(section.tree, vec![ListTreeNode::leaf("Apex Legends")]);
}

#[test]
fn test_section_without_list() {
    let outline = load();
    let err = outline.resolve("collab").unwrap_err();
    assert!(matches!(err, Error::SectionListMissing(ref h) if h == "collab"));
}

#[test]
fn test_unknown_anchor() {
    let outline = load();
    // "details" is linked from the index but has no anchor on the page
    let err = outline.resolve("details").unwrap_err();
    assert!(matches!(err, Error::AnchorNotFound(_)));
}

#[test]
fn test_every_trail_resolves_deterministically() {
    let outline = load();
    let trails = outline.trails_at(DEFAULT_INDEX_SELECTOR).unwrap();

    for node in flatten_trails(&trails) {
        let first = outline.resolve(&node.href).map_err(|e| e.to_string());
        let second = outline.resolve(&node.href).map_err(|e| e.to_string());
        assert_eq!(first, second, "resolution of {} is not stable", node.href);
    }
}

#[test]
fn test_section_json() {
    let outline = load();
    let section = outline.resolve("how_to_ruri").unwrap();
    let json = serde_json::to_string(&section).unwrap();

    assert!(json.starts_with(r#"{"treeTitle":"まずはここから","tree":[{"title":"歌枠","list":"#));
    assert!(json.ends_with(r#""count":{"栞葉るり":2,"健屋花那":2,"":1}}"#));
}

// ============================================================================
// Input decoding
// ============================================================================

#[test]
fn test_shift_jis_page() {
    let html = std::fs::read_to_string(fixture_path("outline.html")).unwrap();
    let html = html.replace(r#"<meta charset="UTF-8">"#, r#"<meta charset="Shift_JIS">"#);
    let (encoded, _, unmappable) = encoding_rs::SHIFT_JIS.encode(&html);
    assert!(!unmappable);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&encoded).unwrap();

    let outline = Outline::open(file.path()).unwrap();
    let section = outline.resolve("how_to_ruri").unwrap();
    assert_eq!(section.tree_title, "まずはここから");
    assert_eq!(section.count.get("健屋花那"), Some(&2));
}

#[test]
fn test_missing_file() {
    let err = Outline::open(fixture_path("does-not-exist.html")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
