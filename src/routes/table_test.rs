use super::*;

fn sample_table() -> RouteTable<&'static str> {
    RouteTable::new(vec![
        RouteEntry::new("/signin", "signin"),
        RouteEntry::new("/home", "home").private(),
        RouteEntry::new("/:id", "item").private().constrain("id", ParamRule::Digits),
        RouteEntry::new("/", "landing").exact(),
    ])
}

// =============================================================
// Construction
// =============================================================

#[test]
fn entries_preserve_construction_order() {
    let table = sample_table();
    let views: Vec<_> = table.entries().map(|e| e.view).collect();
    assert_eq!(views, vec!["signin", "home", "item", "landing"]);
    assert_eq!(table.len(), 4);
    assert!(!table.is_empty());
}

#[test]
fn try_new_rejects_duplicate_paths() {
    let result = RouteTable::try_new(vec![RouteEntry::new("/home", 1), RouteEntry::new("/home/", 2)]);
    assert_eq!(result.err(), Some(RouteError::DuplicatePath("/home/".to_owned())));
}

#[test]
fn try_new_rejects_constraint_on_unknown_param() {
    let result = RouteTable::try_new(vec![RouteEntry::new("/home", 1).constrain("id", ParamRule::Digits)]);
    assert!(matches!(result, Err(RouteError::InvalidPattern { .. })));
}

#[test]
#[should_panic(expected = "duplicate route path")]
fn new_panics_on_duplicate_paths() {
    let _ = RouteTable::new(vec![RouteEntry::new("/a", 1), RouteEntry::new("/a", 2)]);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_returns_first_match_in_order() {
    let table = RouteTable::new(vec![RouteEntry::new("/a", "first"), RouteEntry::new("/a/b", "second")]);
    assert_eq!(table.lookup("/a/b").map(|m| m.entry.view), Some("first"));
}

#[test]
fn lookup_exact_root_ignores_query() {
    let table = sample_table();
    let matched = table.lookup("/?q=1").unwrap();
    assert_eq!(matched.entry.view, "landing");
    assert!(!matched.is_private());
}

#[test]
fn lookup_captures_params() {
    let table = sample_table();
    let matched = table.lookup("/42").unwrap();
    assert_eq!(matched.entry.view, "item");
    assert_eq!(matched.param("id"), Some("42"));
}

#[test]
fn lookup_unmatched_returns_none() {
    let table = sample_table();
    assert!(table.lookup("/nope").is_none());
}

#[test]
fn lookup_on_empty_table_returns_none() {
    let table: RouteTable<()> = RouteTable::new(Vec::new());
    assert!(table.is_empty());
    assert!(table.lookup("/").is_none());
}
