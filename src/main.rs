mod app;
mod cli;
mod command;
mod config;
mod error;
mod filter;
mod inspector;
mod media;
mod session;
mod ui;
mod utils;

use app::{App, ConfirmAction, FilterField, Screen};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let _log_guard = utils::init_logging();

    let config = config::AppConfig::load();
    let folder = cli::initial_folder(args.path.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app, load the starting folder and run
    let mut app = App::new(folder, config);
    app.refresh();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            match app.current_screen {
                Screen::Browse => ui::render_browse(f, app),
                Screen::Explorer => ui::render_explorer(f, app),
                Screen::Filters => ui::render_filters(f, app),
                Screen::Results => ui::render_results(f, app),
            }
            // Render confirmation dialog as overlay
            if app.confirm_dialog.is_some() {
                ui::render_confirm_dialog(f, app);
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyCode) {
    // Handle confirmation dialog
    if app.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    match app.current_screen {
        Screen::Browse => handle_browse_key(app, key),
        Screen::Explorer => handle_explorer_key(app, key),
        Screen::Filters => handle_filters_key(app, key),
        Screen::Results => handle_results_key(app, key),
    }
}

fn handle_confirm_dialog_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.confirm_dialog.take() {
                execute_confirm_action(app, action);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_dialog = None;
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.confirm_selection = !app.confirm_selection;
        }
        KeyCode::Enter => {
            if app.confirm_selection {
                // Yes
                if let Some(action) = app.confirm_dialog.take() {
                    execute_confirm_action(app, action);
                }
            } else {
                // No
                app.confirm_dialog = None;
            }
        }
        _ => {}
    }
}

fn execute_confirm_action(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::ExitApp => {
            app.should_quit = true;
        }
    }
}

fn handle_browse_key(app: &mut App, key: KeyCode) {
    if app.editing_path {
        match key {
            KeyCode::Enter => app.apply_path_input(),
            KeyCode::Esc => app.cancel_path_edit(),
            KeyCode::Backspace => {
                app.path_input.pop();
                app.path_invalid = false;
            }
            KeyCode::Char(c) => {
                app.path_input.push(c);
                app.path_invalid = false;
            }
            _ => {}
        }
        return;
    }

    // Clear any message when user takes action
    app.clear_message();

    match key {
        KeyCode::Char('q') => {
            app.confirm_dialog = Some(ConfirmAction::ExitApp);
            app.confirm_selection = false; // Default to "No"
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('e') => app.start_path_edit(),
        KeyCode::Char('o') => app.navigate_to_explorer(),
        KeyCode::Char('f') | KeyCode::Enter => app.navigate_to_filters(),
        KeyCode::Char('m') => app.toggle_multi_line(),
        KeyCode::Up | KeyCode::Char('k') => app.browse_move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.browse_move_down(),
        _ => {}
    }
}

fn handle_explorer_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.navigate_to_browse(),
        KeyCode::Up | KeyCode::Char('k') => app.explorer_move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.explorer_move_down(),
        KeyCode::Enter => app.enter_directory(),
        KeyCode::Char(' ') => app.select_explorer_dir(),
        _ => {}
    }
}

fn handle_filters_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.navigate_to_browse(),
        KeyCode::Tab | KeyCode::Down => app.filter_focus = app.filter_focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.filter_focus = app.filter_focus.prev(),
        KeyCode::Left | KeyCode::Right if app.filter_focus == FilterField::Title => {
            app.form.title_action = app.form.title_action.toggled();
        }
        KeyCode::Enter => match app.filter_focus {
            FilterField::Reset => app.reset_filters(),
            _ => app.generate(),
        },
        KeyCode::Char(' ') if app.filter_focus == FilterField::Reset => app.reset_filters(),
        KeyCode::Char(' ') if app.filter_focus == FilterField::Generate => app.generate(),
        KeyCode::Char(' ') if app.filter_focus == FilterField::Title => {
            app.form.title_action = app.form.title_action.toggled();
        }
        KeyCode::Backspace => {
            if let Some(entry) = app.form.entry_mut(app.filter_focus) {
                entry.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(entry) = app.form.entry_mut(app.filter_focus) {
                entry.push(c);
            }
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.navigate_to_filters(),
        KeyCode::Char('b') => app.navigate_to_browse(),
        KeyCode::Char('q') => {
            app.confirm_dialog = Some(ConfirmAction::ExitApp);
            app.confirm_selection = false;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.results_scroll = app.results_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.results_scroll = app.results_scroll.saturating_add(1);
        }
        KeyCode::PageUp => {
            app.results_scroll = app.results_scroll.saturating_sub(10);
        }
        KeyCode::PageDown => {
            app.results_scroll = app.results_scroll.saturating_add(10);
        }
        _ => {}
    }
}
