use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use yalla::stores::{StoreCatalog, StoreRecord};
use yalla::ui::core::{Action, Component};
use yalla::ui::screens::SearchScreen;

fn catalog() -> StoreCatalog {
    StoreCatalog::new(vec![
        StoreRecord {
            id: 1,
            name: "Tech World".to_string(),
            description: "x".repeat(80),
            comments: vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "four".to_string(),
            ],
            link: "https://www.techworld.com".to_string(),
        },
        StoreRecord {
            id: 2,
            name: "Fashion Fiesta".to_string(),
            description: "short".to_string(),
            comments: vec!["only".to_string()],
            link: "https://www.fashionfiesta.com".to_string(),
        },
    ])
    .unwrap()
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_first_load_shows_welcome_and_no_results() {
    let screen = SearchScreen::new(&catalog());
    assert!(screen.welcome_visible());
    assert!(screen.results().is_empty());
    assert_eq!(screen.query(), "");
}

#[test]
fn test_query_filters_by_name() {
    let mut screen = SearchScreen::new(&catalog());
    screen.set_query("tech");

    assert_eq!(screen.results().len(), 1);
    assert_eq!(screen.results()[0].id, 1);
    assert!(!screen.welcome_visible());
}

#[test]
fn test_welcome_dismissal_is_one_directional() {
    let mut screen = SearchScreen::new(&catalog());

    // A query with no matches does not dismiss the placeholder
    screen.set_query("zzz");
    assert!(screen.results().is_empty());
    assert!(screen.welcome_visible());

    // The first non-empty result set dismisses it for good
    screen.set_query("tech");
    assert!(!screen.welcome_visible());

    screen.set_query("");
    assert!(screen.results().is_empty());
    assert!(!screen.welcome_visible());
}

#[test]
fn test_empty_query_never_returns_full_corpus() {
    let mut screen = SearchScreen::new(&catalog());
    screen.set_query("tech");
    screen.set_query("");
    assert!(screen.results().is_empty());
}

#[test]
fn test_description_expansion_round_trip() {
    let mut screen = SearchScreen::new(&catalog());
    screen.set_query("tech");
    let record = screen.results()[0].clone();

    // Collapsed: first 50 characters plus ellipsis
    let collapsed = screen.display_description(&record);
    assert_eq!(collapsed, format!("{}...", "x".repeat(50)));

    screen.toggle_description(record.id);
    assert_eq!(screen.display_description(&record), "x".repeat(80));

    screen.toggle_description(record.id);
    assert_eq!(screen.display_description(&record), format!("{}...", "x".repeat(50)));
}

#[test]
fn test_comment_preview_and_expansion() {
    let mut screen = SearchScreen::new(&catalog());
    screen.set_query("tech");
    let record = screen.results()[0].clone();

    assert_eq!(screen.visible_comments(&record).len(), 2);
    screen.toggle_comments(record.id);
    assert_eq!(screen.visible_comments(&record).len(), 4);
    screen.toggle_comments(record.id);
    assert_eq!(screen.visible_comments(&record).len(), 2);
}

#[test]
fn test_expansion_is_per_record_and_per_field() {
    let mut screen = SearchScreen::new(&catalog());

    screen.toggle_description(1);
    assert!(screen.expansion(1).description);
    assert!(!screen.expansion(1).comments);
    assert!(!screen.expansion(2).description);

    screen.toggle_comments(2);
    assert!(screen.expansion(2).comments);
    assert!(!screen.expansion(2).description);
    assert!(screen.expansion(1).description);
}

#[test]
fn test_short_record_shows_all_comments_collapsed() {
    let screen = SearchScreen::new(&catalog());
    let records = catalog();
    let short = &records.records()[1];
    assert_eq!(screen.visible_comments(short).len(), 1);
}

#[test]
fn test_typing_builds_the_query() {
    let mut screen = SearchScreen::new(&catalog());
    for c in "fash".chars() {
        screen.handle_key_events(key(c));
    }
    assert_eq!(screen.query(), "fash");
    assert_eq!(screen.results().len(), 1);
    assert_eq!(screen.results()[0].id, 2);

    screen.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(screen.query(), "fas");
}

#[test]
fn test_open_link_for_selected_record() {
    let mut screen = SearchScreen::new(&catalog());

    // Nothing selected, nothing to open
    assert_eq!(screen.handle_key_events(ctrl('o')), Action::None);

    screen.set_query("tech");
    assert_eq!(
        screen.handle_key_events(ctrl('o')),
        Action::OpenUrl("https://www.techworld.com".to_string())
    );
}

#[test]
fn test_expansion_keys_affect_selected_record() {
    let mut screen = SearchScreen::new(&catalog());
    screen.set_query("tech");

    screen.handle_key_events(ctrl('d'));
    assert!(screen.expansion(1).description);

    screen.handle_key_events(ctrl('l'));
    assert!(screen.expansion(1).comments);
}
