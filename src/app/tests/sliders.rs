//! Slider key binding tests.

use ratatui::crossterm::event::KeyCode;

use super::helpers::*;
use crate::app::App;
use crate::core::ParamId;

fn app() -> App {
    create_test_app(StaticService::ok("x"))
}

fn value(app: &App, id: ParamId) -> f64 {
    app.params().get(id)
}

fn assert_value(app: &App, id: ParamId, expected: f64) {
    let actual = value(app, id);
    assert!(
        (actual - expected).abs() < 1e-9,
        "{id:?}: expected {expected}, got {actual}"
    );
}

fn type_keys(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn focus_starts_on_temperature() {
    assert_eq!(app().focus(), ParamId::Temperature);
}

#[test]
fn down_and_up_cycle_focus() {
    let mut app = app();

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.focus(), ParamId::TopK);
    app.handle_key(char_key('j'));
    assert_eq!(app.focus(), ParamId::MaxTokens);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), ParamId::Temperature);

    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.focus(), ParamId::MaxTokens);
    app.handle_key(char_key('k'));
    assert_eq!(app.focus(), ParamId::TopK);
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.focus(), ParamId::Temperature);
}

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn arrows_step_the_focused_parameter() {
    let mut app = app();

    app.handle_key(key(KeyCode::Right));
    assert_value(&app, ParamId::Temperature, 1.1);
    app.handle_key(char_key('h'));
    app.handle_key(key(KeyCode::Left));
    assert_value(&app, ParamId::Temperature, 0.9);

    app.handle_key(key(KeyCode::Down));
    app.handle_key(char_key('l'));
    assert_value(&app, ParamId::TopK, 41.0);
    assert_value(&app, ParamId::Temperature, 0.9);
}

#[test]
fn stepping_past_bounds_is_clamped() {
    let mut app = app();

    for _ in 0..50 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_value(&app, ParamId::Temperature, 2.0);

    for _ in 0..50 {
        app.handle_key(key(KeyCode::Left));
    }
    assert_value(&app, ParamId::Temperature, 0.1);
}

#[test]
fn home_and_end_jump_to_bounds() {
    let mut app = app();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));

    app.handle_key(key(KeyCode::End));
    assert_value(&app, ParamId::MaxTokens, 500.0);
    app.handle_key(key(KeyCode::Home));
    assert_value(&app, ParamId::MaxTokens, 10.0);
}

#[test]
fn repeated_steps_stay_free_of_float_noise() {
    let mut app = app();
    for _ in 0..7 {
        app.handle_key(key(KeyCode::Left));
    }
    assert_eq!(app.slider(ParamId::Temperature).display_value(), "0.3");
    assert!((app.params().snapshot().temperature - 0.3).abs() < f64::EPSILON);
}

// =============================================================================
// Typed Entry
// =============================================================================

#[test]
fn typing_a_digit_starts_an_entry() {
    let mut app = app();
    app.handle_key(char_key('1'));
    assert_eq!(app.entry(), Some("1"));
}

#[test]
fn typed_entry_commits_snapped_value() {
    let mut app = app();
    app.handle_key(key(KeyCode::Down));

    type_keys(&mut app, "73.6");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.entry(), None);
    assert_value(&app, ParamId::TopK, 74.0);
    assert!(!app.generation_state().is_loading(), "Enter must not generate");
}

#[test]
fn typed_entry_out_of_range_is_clamped() {
    let mut app = app();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));

    type_keys(&mut app, "-40");
    app.handle_key(key(KeyCode::Enter));
    assert_value(&app, ParamId::MaxTokens, 10.0);

    type_keys(&mut app, "9999");
    app.handle_key(key(KeyCode::Enter));
    assert_value(&app, ParamId::MaxTokens, 500.0);
}

#[test]
fn backspace_edits_the_entry() {
    let mut app = app();
    type_keys(&mut app, "1.55");
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.entry(), Some("1."));

    app.handle_key(key(KeyCode::Enter));
    assert_value(&app, ParamId::Temperature, 1.0);
}

#[test]
fn escape_cancels_the_entry() {
    let mut app = app();
    type_keys(&mut app, "1.7");
    app.handle_key(key(KeyCode::Esc));

    assert_eq!(app.entry(), None);
    assert_value(&app, ParamId::Temperature, 1.0);
}

#[test]
fn unparseable_entry_leaves_value_unchanged() {
    let mut app = app();
    app.handle_key(key(KeyCode::Right));

    type_keys(&mut app, "-.");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.entry(), None);
    assert_value(&app, ParamId::Temperature, 1.1);
}

#[test]
fn navigation_keys_are_ignored_during_entry() {
    let mut app = app();
    type_keys(&mut app, "2");
    app.handle_key(key(KeyCode::Down));
    app.handle_key(char_key('q'));

    assert_eq!(app.focus(), ParamId::Temperature);
    assert!(!app.should_quit());
    assert_eq!(app.entry(), Some("2"));
}

#[tokio::test]
async fn sliders_respond_while_loading() {
    let (service, _gates) = GatedService::new(1);
    let mut app = create_test_app(service);

    app.generate();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Right));

    assert!(app.generation_state().is_loading());
    assert_value(&app, ParamId::TopK, 41.0);
}

#[test]
fn q_quits_from_main_view() {
    let mut app = app();
    app.handle_key(char_key('q'));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_during_entry() {
    let mut app = app();
    type_keys(&mut app, "3");
    app.handle_key(ctrl_key('c'));
    assert!(app.should_quit());
}
