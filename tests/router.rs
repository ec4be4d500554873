use yalla::ui::router::{DrawerRoute, Route, Router};

#[test]
fn test_initial_route_is_splash() {
    let router = Router::new();
    assert_eq!(router.current(), Route::Splash);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_navigate_pushes() {
    let mut router = Router::new();
    router.navigate(Route::Login);
    assert_eq!(router.current(), Route::Login);
    assert_eq!(router.depth(), 2);

    router.navigate(Route::CreateAccount);
    assert_eq!(router.current(), Route::CreateAccount);
    assert_eq!(router.depth(), 3);
}

#[test]
fn test_replace_swaps_without_growing() {
    let mut router = Router::new();
    router.replace(Route::Login);
    assert_eq!(router.current(), Route::Login);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_pop_returns_to_previous() {
    let mut router = Router::new();
    router.replace(Route::Login);
    router.navigate(Route::CreateAccount);

    assert!(router.pop());
    assert_eq!(router.current(), Route::Login);

    // The bottom entry can never be popped
    assert!(!router.pop());
    assert_eq!(router.current(), Route::Login);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_drawer_selection_has_no_stack_effect() {
    let mut router = Router::new();
    router.replace(Route::Login);
    router.navigate(Route::Drawer);
    let depth = router.depth();

    assert_eq!(router.drawer_route(), DrawerRoute::Search);
    router.select_drawer(DrawerRoute::Settings);
    assert_eq!(router.drawer_route(), DrawerRoute::Settings);
    assert_eq!(router.depth(), depth);
    assert_eq!(router.current(), Route::Drawer);

    router.select_drawer(DrawerRoute::Search);
    assert_eq!(router.drawer_route(), DrawerRoute::Search);
}

#[test]
fn test_entering_drawer_resets_selection() {
    let mut router = Router::new();
    router.navigate(Route::Drawer);
    router.select_drawer(DrawerRoute::Settings);

    router.pop();
    router.navigate(Route::Drawer);
    assert_eq!(router.drawer_route(), DrawerRoute::Search);
}

#[test]
fn test_route_tables_are_closed() {
    // Every destination is enumerable; unknown route names cannot exist
    assert_eq!(Route::all().len(), 4);
    assert_eq!(DrawerRoute::all().len(), 2);
    assert_eq!(DrawerRoute::Search.label(), "Home");
    assert_eq!(DrawerRoute::Settings.label(), "Settings");
}
