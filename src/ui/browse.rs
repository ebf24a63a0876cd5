use crate::app::App;
use crate::media::FileStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub fn render_browse(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    // Folder path entry
    let (path_title, path_style) = if app.editing_path {
        if app.path_invalid {
            (" Folder (not found) ", Style::default().fg(Color::Red))
        } else {
            (" Folder (editing) ", Style::default().fg(Color::Yellow))
        }
    } else {
        (" Folder ", Style::default().fg(Color::Cyan))
    };

    let path_text = if app.editing_path {
        format!("{}_", app.path_input)
    } else {
        app.path_input.clone()
    };

    let path = Paragraph::new(path_text).style(path_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if app.editing_path {
                path_style
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title(path_title),
    );
    f.render_widget(path, chunks[0]);

    // File grid
    let separator = app.track_separator();
    let rows: Vec<Row> = app
        .session
        .files
        .iter()
        .map(|file| {
            let (audio, subtitles, defaults) = match &file.status {
                FileStatus::Error { message } => (message.clone(), String::new(), String::new()),
                _ => (
                    file.audio_summary(separator),
                    file.subtitle_summary(separator),
                    file.defaults_summary(separator),
                ),
            };

            let height = [&audio, &subtitles, &defaults]
                .iter()
                .map(|s| s.lines().count().max(1))
                .max()
                .unwrap_or(1) as u16;

            let style = match &file.status {
                FileStatus::Error { .. } => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::White),
            };

            Row::new(vec![
                Cell::from(file.filename()),
                Cell::from(file.size_string()),
                Cell::from(file.modified_string()),
                Cell::from(file.title.clone()),
                Cell::from(audio),
                Cell::from(subtitles),
                Cell::from(defaults),
            ])
            .style(style)
            .height(height)
        })
        .collect();

    let header = Row::new(vec![
        "File", "Size", "Modified", "Title", "Audio", "Subtitles", "Defaults",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Percentage(24),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Percentage(14),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" Files ({}) ", app.session.files.len())),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(table, chunks[1], &mut app.table_state);

    // Message / dependency warning line
    let notice = if let Some(msg) = &app.message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else if !app.deps.all_ok() {
        Line::from(Span::styled(
            "Warning: mkvmerge/mkvpropedit not found in PATH",
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(notice).alignment(Alignment::Center), chunks[2]);

    // Help
    let help_text = if app.editing_path {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ])
    } else {
        Line::from(vec![
            Span::styled("f", Style::default().fg(Color::Yellow)),
            Span::raw(" Filters  "),
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(" Edit path  "),
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(" Open folder  "),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" Refresh  "),
            Span::styled("m", Style::default().fg(Color::Yellow)),
            Span::raw(" Multi-line  "),
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(" Navigate  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(help, chunks[3]);
}
