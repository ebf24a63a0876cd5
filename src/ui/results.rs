use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_results(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .margin(1)
        .split(f.area());

    let lines: Vec<Line> = if app.output.is_empty() {
        vec![Line::from(Span::styled(
            "No commands generated (no loaded files).",
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        app.output
            .lines()
            .map(|line| {
                if line.starts_with('#') {
                    Line::from(Span::styled(
                        line.to_string(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    Line::from(line.to_string())
                }
            })
            .collect()
    };

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Command Lines "),
        );
    f.render_widget(text, chunks[0]);

    let help_text = Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Back to filters  "),
        Span::styled("b", Style::default().fg(Color::Yellow)),
        Span::raw(" Back to files"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(help, chunks[1]);
}
