use crate::app::{App, FilterField};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_filters(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    // Audio column | Subtitle column
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let audio_fields = [
        (
            FilterField::AudioLanguages,
            format!(" Audio Languages ({}) ", app.session.catalog.audio_languages_line()),
            app.form.audio_languages.clone(),
        ),
        (
            FilterField::AudioName,
            " Audio Name contains ".to_string(),
            app.form.audio_name.clone(),
        ),
        (
            FilterField::AudioTypes,
            format!(" Audio Types ({}) ", app.session.catalog.audio_types_line()),
            app.form.audio_types.clone(),
        ),
        (
            FilterField::AudioIds,
            format!(" Audio Track IDs ({}) ", app.session.catalog.audio_ids_line()),
            app.form.audio_ids.clone(),
        ),
    ];

    let subtitle_fields = [
        (
            FilterField::SubtitleLanguages,
            format!(
                " Subtitle Languages ({}) ",
                app.session.catalog.subtitle_languages_line()
            ),
            app.form.subtitle_languages.clone(),
        ),
        (
            FilterField::SubtitleName,
            " Subtitle Name contains ".to_string(),
            app.form.subtitle_name.clone(),
        ),
        (
            FilterField::SubtitleTypes,
            format!(" Subtitle Types ({}) ", app.session.catalog.subtitle_types_line()),
            app.form.subtitle_types.clone(),
        ),
        (
            FilterField::SubtitleIds,
            format!(
                " Subtitle Track IDs ({}) ",
                app.session.catalog.subtitle_ids_line()
            ),
            app.form.subtitle_ids.clone(),
        ),
    ];

    render_column(f, columns[0], &audio_fields, app.filter_focus);
    render_column(f, columns[1], &subtitle_fields, app.filter_focus);

    // Title choice and buttons
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    let title_focused = app.filter_focus == FilterField::Title;
    let title_widget = Paragraph::new(format!("◀ {} ▶", app.form.title_action.display_name()))
        .alignment(Alignment::Center)
        .style(focus_style(title_focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(title_focused))
                .title(" Container Title "),
        );
    f.render_widget(title_widget, controls[0]);

    render_button(f, controls[1], " Reset ", app.filter_focus == FilterField::Reset);
    render_button(
        f,
        controls[2],
        " Generate ",
        app.filter_focus == FilterField::Generate,
    );

    // Help
    let help_text = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Move  "),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::raw(" Title choice  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Generate  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(help, chunks[2]);
}

fn render_column(
    f: &mut Frame,
    area: Rect,
    fields: &[(FilterField, String, String)],
    focus: FilterField,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    for (i, (field, label, value)) in fields.iter().enumerate() {
        let focused = *field == focus;
        let text = if focused {
            format!("{}_", value)
        } else {
            value.clone()
        };
        let widget = Paragraph::new(text).style(focus_style(focused)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(label.clone()),
        );
        f.render_widget(widget, rows[i]);
    }
}

fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
    f.render_widget(button, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
