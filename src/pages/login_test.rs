use super::*;

#[test]
fn admins_land_on_admin_orders() {
    assert_eq!(landing_after_login(true), RouteName::AdminOrders);
}

#[test]
fn users_land_on_their_orders() {
    assert_eq!(landing_after_login(false), RouteName::UserOrders);
}

#[test]
fn landing_routes_exist_in_canonical_table() {
    let routes = RouteTable::default();
    assert_eq!(routes.path_for(landing_after_login(true)), Some("/admin/orders"));
    assert_eq!(routes.path_for(landing_after_login(false)), Some("/orders"));
}
