use super::*;

fn entry(path: &'static str, name: RouteName, page: Page) -> RouteEntry {
    RouteEntry { path, name, page, title: "t" }
}

// =============================================================
// Canonical table
// =============================================================

#[test]
fn canonical_table_passes_validation() {
    let table = RouteTable::new(CANONICAL_ROUTES.to_vec(), NOT_FOUND_ROUTE, HistoryMode::Web);
    assert_eq!(table, Ok(RouteTable::canonical(HistoryMode::Web)));
}

#[test]
fn every_canonical_path_resolves_to_its_page() {
    let table = RouteTable::default();
    for route in CANONICAL_ROUTES {
        let resolved = table.resolve(route.path);
        assert_eq!(resolved.page, route.page, "path {}", route.path);
        assert_eq!(resolved.name, route.name);
    }
}

#[test]
fn canonical_paths_match_expected_pages() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/").page, Page::Home);
    assert_eq!(table.resolve("/menu").page, Page::Menu);
    assert_eq!(table.resolve("/login").page, Page::Login);
    assert_eq!(table.resolve("/register").page, Page::Register);
    assert_eq!(table.resolve("/orders").page, Page::UserOrders);
    assert_eq!(table.resolve("/admin/orders").page, Page::AdminOrders);
}

#[test]
fn every_name_maps_back_to_its_path() {
    let table = RouteTable::default();
    for route in CANONICAL_ROUTES {
        assert_eq!(table.path_for(route.name), Some(route.path));
    }
}

#[test]
fn not_found_has_no_path() {
    let table = RouteTable::default();
    assert_eq!(table.path_for(RouteName::NotFound), None);
    assert_eq!(table.href_for(RouteName::NotFound), None);
}

// =============================================================
// Matching rules
// =============================================================

#[test]
fn unmatched_paths_resolve_to_not_found() {
    let table = RouteTable::default();
    for path in ["/nope", "/admin", "/orders/42", "/admin/orders/extra", "/meni"] {
        assert_eq!(table.resolve(path).page, Page::NotFound, "path {path}");
        assert_eq!(table.match_path(path), None);
    }
}

#[test]
fn trailing_slash_is_optional() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/login/").page, Page::Login);
    assert_eq!(table.resolve("/admin/orders/").page, Page::AdminOrders);
}

#[test]
fn matching_ignores_ascii_case() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/LOGIN").page, Page::Login);
    assert_eq!(table.resolve("/Admin/Orders").page, Page::AdminOrders);
}

#[test]
fn matching_ignores_query_and_fragment() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/orders?page=2").page, Page::UserOrders);
    assert_eq!(table.resolve("/menu#drinks").page, Page::Menu);
}

#[test]
fn empty_location_is_root() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("").page, Page::Home);
}

#[test]
fn normalize_path_examples() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("login"), "/login");
    assert_eq!(normalize_path("/Login/?next=/"), "/login");
    assert_eq!(normalize_path("/admin/orders#top"), "/admin/orders");
}

// =============================================================
// History mode
// =============================================================

#[test]
fn web_mode_reads_pathname() {
    let table = RouteTable::canonical(HistoryMode::Web);
    assert_eq!(table.resolve_location("/orders", "#/login").page, Page::UserOrders);
    assert_eq!(table.href_for(RouteName::Login).as_deref(), Some("/login"));
}

#[test]
fn hash_mode_reads_fragment() {
    let table = RouteTable::canonical(HistoryMode::Hash);
    assert_eq!(table.resolve_location("/", "#/login").page, Page::Login);
    assert_eq!(table.resolve_location("/", "/register").page, Page::Register);
    assert_eq!(table.resolve_location("/", "").page, Page::Home);
    assert_eq!(table.resolve_location("/", "#/missing").page, Page::NotFound);
    assert_eq!(table.href_for(RouteName::AdminOrders).as_deref(), Some("#/admin/orders"));
}

#[test]
fn routed_path_reads_fragment_in_hash_mode() {
    let table = RouteTable::canonical(HistoryMode::Hash);
    assert_eq!(table.routed_path("/", "#/nope"), "/nope");
    assert_eq!(table.routed_path("/", "/orders"), "/orders");
    assert_eq!(table.routed_path("/shop/", "#"), "/");
    assert_eq!(table.routed_path("/", ""), "/");
    assert_eq!(table.resolve(table.routed_path("/", "#/nope")).page, Page::NotFound);
}

#[test]
fn routed_path_reads_pathname_in_web_mode() {
    let table = RouteTable::canonical(HistoryMode::Web);
    assert_eq!(table.routed_path("/nope", "#/login"), "/nope");
    assert_eq!(table.routed_path("/orders", ""), "/orders");
}

#[test]
fn default_history_mode_is_web() {
    assert_eq!(HistoryMode::default(), HistoryMode::Web);
    assert_eq!(RouteTable::default().history(), HistoryMode::Web);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn duplicate_path_is_rejected() {
    let result = RouteTable::new(
        vec![entry("/", RouteName::Home, Page::Home), entry("/", RouteName::Menu, Page::Menu)],
        NOT_FOUND_ROUTE,
        HistoryMode::Web,
    );
    assert_eq!(result, Err(RouteTableError::DuplicatePath("/")));
}

#[test]
fn duplicate_path_detection_uses_matching_rules() {
    let result = RouteTable::new(
        vec![entry("/orders", RouteName::UserOrders, Page::UserOrders), entry("/Orders/", RouteName::Menu, Page::Menu)],
        NOT_FOUND_ROUTE,
        HistoryMode::Web,
    );
    assert_eq!(result, Err(RouteTableError::DuplicatePath("/Orders/")));
}

#[test]
fn duplicate_name_is_rejected() {
    let result = RouteTable::new(
        vec![entry("/", RouteName::Home, Page::Home), entry("/home", RouteName::Home, Page::Home)],
        NOT_FOUND_ROUTE,
        HistoryMode::Web,
    );
    assert_eq!(result, Err(RouteTableError::DuplicateName(RouteName::Home)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "duplicate route name: Home"
    );
}

#[test]
fn entry_reusing_not_found_name_is_rejected() {
    let result = RouteTable::new(
        vec![entry("/404", RouteName::NotFound, Page::NotFound)],
        NOT_FOUND_ROUTE,
        HistoryMode::Web,
    );
    assert_eq!(result, Err(RouteTableError::DuplicateName(RouteName::NotFound)));
}

#[test]
fn relative_path_is_rejected() {
    let result = RouteTable::new(vec![entry("login", RouteName::Login, Page::Login)], NOT_FOUND_ROUTE, HistoryMode::Web);
    assert_eq!(result, Err(RouteTableError::RelativePath("login")));
}

#[test]
fn same_page_under_two_names_is_allowed() {
    let table = RouteTable::new(
        vec![
            entry("/", RouteName::Home, Page::Menu),
            entry("/menu", RouteName::Menu, Page::Menu),
        ],
        NOT_FOUND_ROUTE,
        HistoryMode::Web,
    )
    .unwrap();
    assert_eq!(table.resolve("/").page, Page::Menu);
    assert_eq!(table.resolve("/menu").page, Page::Menu);
}

#[test]
fn route_name_display_matches_symbolic_name() {
    assert_eq!(RouteName::UserOrders.to_string(), "UserOrders");
    assert_eq!(RouteName::AdminOrders.as_str(), "AdminOrders");
}
