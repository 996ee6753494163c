pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match app.view {
            app::View::Form => match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.next_field(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_field(),

                // Slider adjustment
                KeyCode::Char('h') | KeyCode::Left => app.adjust_slider(-1.0),
                KeyCode::Char('l') | KeyCode::Right => app.adjust_slider(1.0),

                // Edit the selected numeric answer
                KeyCode::Enter | KeyCode::Char('e') => app.start_edit(),

                // Fill demo values
                KeyCode::Char('d') => app.fill_defaults(),

                // Scoring pass
                KeyCode::Char('c') => app.calculate(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            },
            app::View::Results => match key.code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Back to the form, answers intact
                KeyCode::Char('b') | KeyCode::Esc => app.back_to_form(),

                KeyCode::Char('?') => app.show_help(),

                _ => {}
            },
        },
        app::InputMode::Editing => match key.code {
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => app.pop_edit_char(),
            KeyCode::Char(c) => app.push_edit_char(c),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
