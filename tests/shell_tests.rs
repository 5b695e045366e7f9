use std::rc::Rc;

use chrono::NaiveDate;
use supertui::config::AppConfig;
use supertui::data::{InMemoryTaskSource, JsonTaskSource, TaskSource};
use supertui::shell::{self, ShellAction, ShellApp, ShellServices};
use supertui_tui::app::RunState;
use supertui_tui::event::{alt, key};
use supertui_tui::style::Modifier;
use supertui_tui::widget::StatusLevel;
use supertui_tui::{Event, KeyCode, MemoryTerminal, Rect};
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn shell_with(source: Rc<dyn TaskSource>, config: &AppConfig, auto_start: bool) -> ShellApp {
    let services = ShellServices::new(source, today(), config.global_keys().unwrap()).unwrap();
    let mut app = shell::build_application(config, services.clone()).unwrap();
    app.push_screen(shell::initial_screen(&services, auto_start)).unwrap();
    app
}

fn sample_shell(auto_start: bool) -> ShellApp {
    shell_with(Rc::new(InMemoryTaskSource::sample(today())), &AppConfig::default(), auto_start)
}

fn fixture_shell() -> ShellApp {
    shell_with(Rc::new(JsonTaskSource::new("tests/fixtures/tasks.json")), &AppConfig::default(), true)
}

fn titles(app: &ShellApp) -> Vec<String> {
    app.stack().titles().into_iter().map(String::from).collect()
}

fn flash(app: &ShellApp) -> Option<(String, StatusLevel)> {
    app.active_screen()
        .and_then(|screen| screen.chrome().status.flash_message())
        .map(|(message, level)| (message.to_string(), level))
}

fn press(app: &mut ShellApp, codes: &[KeyCode]) {
    for &code in codes {
        app.dispatch_key(&key(code));
    }
}

/// Text of the row drawn with the selection highlight inside `area`
fn highlighted_row(app: &mut ShellApp, area: Rect) -> Option<String> {
    app.render();
    let buf = app.renderer().next();
    (area.y..area.bottom())
        .find(|&y| {
            buf.get(area.x + 1, y)
                .is_some_and(|cell| cell.modifier.contains(Modifier::REVERSED))
        })
        .map(|y| buf.row_text(y))
}

#[test]
fn runs_headless_until_quit() {
    let mut app = sample_shell(true);
    let mut term = MemoryTerminal::new(100, 30).with_events([
        Event::Key(key(KeyCode::Tab)),
        Event::Resize { width: 90, height: 28 },
        Event::Key(key(KeyCode::Char('q'))),
    ]);

    app.run(&mut term).unwrap();

    assert_eq!(app.state(), RunState::Stopped);
    assert_eq!(app.depth(), 0);
    assert!(term.cursor_visible());
    let output = String::from_utf8_lossy(term.output()).to_string();
    assert!(output.contains("Dashboard"));
    assert!(output.contains("Summary"));
}

#[test]
fn idle_shell_opens_dashboard_and_back_resumes_it() {
    let mut app = sample_shell(false);
    assert_eq!(titles(&app), vec!["SuperTUI"]);

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(titles(&app), vec!["SuperTUI", "Dashboard"]);

    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(titles(&app), vec!["SuperTUI"]);
    assert!(app.is_running());

    // back on the last screen is ignored, quit unwinds everything
    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.depth(), 1);
    press(&mut app, &[KeyCode::Char('q')]);
    assert_eq!(app.state(), RunState::Stopped);
}

#[test]
fn task_list_keeps_selection_across_detail_screen() {
    let mut app = fixture_shell();
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(titles(&app), vec!["Dashboard", "Tasks"]);

    press(&mut app, &[KeyCode::Down, KeyCode::Down]);
    let list_area = Rect::new(0, 2, 40, 20);
    let before = highlighted_row(&mut app, list_area).unwrap();
    // to-do work sorts first, so the third row is the in-progress task
    assert!(before.contains("Draft landing page copy"));

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(titles(&app), vec!["Dashboard", "Tasks", "Task"]);
    assert_eq!(flash(&app), None);

    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(titles(&app), vec!["Dashboard", "Tasks"]);
    assert_eq!(highlighted_row(&mut app, list_area).unwrap(), before);
}

#[test]
fn menu_navigation_runs_third_item_and_repaints_dropdown() {
    let mut app = sample_shell(true);
    let mut out = Vec::new();
    app.draw(&mut out).unwrap();

    // View menu: Refresh, Settings, separator, Dark, ...
    press(&mut app, &[KeyCode::F(10), KeyCode::Right, KeyCode::Down, KeyCode::Down]);
    let dropdown = app
        .active_screen()
        .unwrap()
        .chrome()
        .menu_bar
        .dropdown_area()
        .unwrap();
    app.draw(&mut out).unwrap();
    let covered = |app: &ShellApp| {
        (dropdown.y..dropdown.bottom()).any(|y| app.renderer().current().row_text(y).contains("Ocean"))
    };
    assert!(covered(&app));

    app.theme_mut().set_preset("ocean").unwrap();
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.theme().theme().name, "dark");
    assert!(!app.active_screen().unwrap().chrome().menu_bar.is_open());
    let (message, level) = flash(&app).unwrap();
    assert_eq!(level, StatusLevel::Info);
    assert!(message.starts_with("Theme: dark"));

    app.draw(&mut out).unwrap();
    assert!(!covered(&app));
}

#[test]
fn settings_screen_applies_preset() {
    let mut app = sample_shell(true);
    app.dispatch_key(&alt('v'));
    press(&mut app, &[KeyCode::Char('s')]);
    assert_eq!(titles(&app), vec!["Dashboard", "Settings"]);

    // dark is preselected; the next preset is light
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.theme().theme().name, "light");
    assert_eq!(titles(&app), vec!["Dashboard", "Settings"]);
}

#[test]
fn refresh_reloads_and_reports() {
    let mut app = sample_shell(true);
    app.dispatch(ShellAction::Refresh);
    assert_eq!(flash(&app), Some(("Refreshed".to_string(), StatusLevel::Info)));
}

#[test]
fn missing_task_flashes_error_on_detail_screen() {
    let mut app = fixture_shell();
    app.dispatch(ShellAction::OpenTask(Uuid::nil()));
    assert_eq!(titles(&app), vec!["Dashboard", "Task"]);
    let (message, level) = flash(&app).unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(message.contains("no longer exists"));
}

#[test]
fn unreadable_task_file_keeps_shell_running() {
    let app = shell_with(
        Rc::new(JsonTaskSource::new("tests/fixtures/missing.json")),
        &AppConfig::default(),
        true,
    );
    assert!(app.is_running());
    let (message, level) = flash(&app).unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(message.contains("Dashboard"));
}

#[test]
fn help_lists_configured_keys() {
    let mut config = AppConfig::default();
    config.ui.quit_keys = vec!["ctrl+x".into()];
    let mut app = shell_with(Rc::new(InMemoryTaskSource::sample(today())), &config, true);

    press(&mut app, &[KeyCode::F(1)]);
    assert_eq!(titles(&app), vec!["Dashboard", "Help"]);
    app.render();
    let screen_text: String = (0..24).map(|y| app.renderer().next().row_text(y)).collect();
    assert!(screen_text.contains("ctrl+x"));

    // q is no longer a quit key
    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.is_running());
}

#[test]
fn theme_errors_become_flashes() {
    let mut app = sample_shell(true);
    app.dispatch(ShellAction::ApplyTheme("ultraviolet".into()));
    let (message, level) = flash(&app).unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(message.contains("ultraviolet"));
    assert_eq!(app.theme().theme().name, "dark");
}
