use super::*;
use shared::domain::ScreenId;

fn navigator_at(location: &str) -> Navigator {
    Navigator::start(RouteTable::with_defaults().expect("table"), location)
}

#[test]
fn history_push_truncates_forward_entries() {
    let mut history = History::new("/a");
    history.push("/b");
    history.push("/c");
    assert_eq!(history.back(), Some("/b"));
    history.push("/d");
    assert_eq!(history.entries(), ["/a", "/b", "/d"]);
    assert!(!history.can_go_forward());
}

#[test]
fn history_replace_keeps_length() {
    let mut history = History::new("/");
    history.replace("/query");
    assert_eq!(history.entries(), ["/query"]);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.back(), None);
}

#[test]
fn normalizes_locations() {
    assert_eq!(
        normalize_location("/query?q=1#top").as_deref(),
        Some("/query?q=1#top")
    );
    assert_eq!(normalize_location("").as_deref(), Some("/"));
    assert_eq!(
        normalize_location("  /datasources ").as_deref(),
        Some("/datasources")
    );
    assert_eq!(
        normalize_location("/charts/../datasources").as_deref(),
        Some("/datasources")
    );
    assert_eq!(location_path("/query?q=sales").as_deref(), Some("/query"));
}

#[test]
fn rejects_locations_outside_the_app() {
    for raw in [
        "//inventory",
        "https://evil.example/datasources",
        "http://[bad",
        "query",
        "\\datasources",
        "/data\\sources",
    ] {
        assert_eq!(normalize_location(raw), None, "{raw}");
        assert_eq!(location_path(raw), None, "{raw}");
    }
}

#[test]
fn scheme_relative_location_is_not_found() {
    let mut navigator = navigator_at("/datasources");
    let nav = navigator.navigate("//inventory");
    assert_eq!(
        nav.view,
        ResolvedView::NotFound {
            path: "//inventory".into()
        }
    );
    assert!(!navigator.history().contains("/query"));
    assert_eq!(navigator.history().entries(), ["/datasources", "//inventory"]);
    assert!(!navigator.is_active("/query"));
}

#[test]
fn absolute_url_does_not_reach_its_path() {
    let mut navigator = navigator_at("/query");
    let nav = navigator.navigate("https://evil.example/datasources");
    assert_eq!(
        nav.view,
        ResolvedView::NotFound {
            path: "https://evil.example/datasources".into()
        }
    );
    assert!(!navigator.is_active("/datasources"));
}

#[test]
fn unparseable_start_location_is_not_found_not_root() {
    let navigator = navigator_at("http://[bad");
    let current = navigator.current();
    assert_eq!(
        current.view,
        ResolvedView::NotFound {
            path: "http://[bad".into()
        }
    );
    assert_eq!(current.redirected_from, None);
    assert_eq!(navigator.history().entries(), ["http://[bad"]);
}

#[test]
fn relative_and_backslash_locations_are_not_found() {
    let mut navigator = navigator_at("/query");
    assert!(navigator.navigate("query").view.is_not_found());
    assert!(navigator.navigate("\\datasources").view.is_not_found());
    assert_eq!(navigator.current().path, "\\datasources");
}

#[test]
fn dot_segments_collapse_before_matching() {
    let mut navigator = navigator_at("/query");
    let nav = navigator.navigate("/charts/../datasources");
    assert_eq!(nav.location, "/datasources");
    assert_eq!(nav.view.screen(), Some(ScreenId::DataSourceManager));
}

#[test]
fn start_at_root_replaces_root_with_query() {
    let navigator = navigator_at("/");
    let current = navigator.current();
    assert_eq!(current.location, "/query");
    assert_eq!(
        current.view,
        ResolvedView::Render {
            screen: ScreenId::QueryForm
        }
    );
    assert_eq!(current.redirected_from.as_deref(), Some("/"));
    assert_eq!(navigator.history().entries(), ["/query"]);
    assert!(!navigator.history().can_go_back());
}

#[test]
fn navigating_to_root_later_does_not_leave_root_in_history() {
    let mut navigator = navigator_at("/datasources");
    navigator.navigate("/");
    assert_eq!(navigator.current().path, "/query");
    assert!(!navigator.history().contains("/"));

    let back = navigator.back().expect("back");
    assert_eq!(back.path, "/datasources");
    assert_eq!(
        back.view,
        ResolvedView::Render {
            screen: ScreenId::DataSourceManager
        }
    );
}

#[test]
fn direct_navigation_has_no_redirect() {
    let navigator = navigator_at("/datasources");
    assert_eq!(navigator.current().redirected_from, None);
    assert_eq!(
        navigator.current().view.screen(),
        Some(ScreenId::DataSourceManager)
    );
}

#[test]
fn link_to_current_location_does_not_grow_history() {
    let mut navigator = navigator_at("/query");
    navigator.navigate("/query");
    navigator.navigate("/query");
    assert_eq!(navigator.history().entries(), ["/query"]);
}

#[test]
fn back_and_forward_resolve_entries() {
    let mut navigator = navigator_at("/");
    navigator.navigate("/datasources");
    assert_eq!(navigator.history().entries(), ["/query", "/datasources"]);

    assert_eq!(navigator.back().map(|nav| nav.path.clone()), Some("/query".into()));
    assert!(navigator.back().is_none());
    assert_eq!(
        navigator.forward().map(|nav| nav.path.clone()),
        Some("/datasources".into())
    );
    assert!(navigator.forward().is_none());
}

#[test]
fn unknown_and_disabled_paths_settle_on_not_found() {
    let mut navigator = navigator_at("/query");
    let nav = navigator.navigate("/reports");
    assert_eq!(
        nav.view,
        ResolvedView::NotFound {
            path: "/reports".into()
        }
    );
    assert!(!navigator.is_active("/reports"));
    assert!(!navigator.is_active("/query"));
}

#[test]
fn query_string_does_not_affect_matching() {
    let mut navigator = navigator_at("/query");
    let nav = navigator.navigate("/datasources?page=2");
    assert_eq!(nav.view.screen(), Some(ScreenId::DataSourceManager));
    assert_eq!(nav.location, "/datasources?page=2");
    assert!(navigator.is_active("/datasources"));
}
