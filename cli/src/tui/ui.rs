use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use energy_dash_core::{content, Classification, CommitOutcome, Field, Page, NOT_FOUND_MESSAGE};

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Header, body and footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new(content::APP_TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(rounded_block(""));
    f.render_widget(header, main_chunks[0]);

    // Navigation sidebar on the left, page on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(main_chunks[1]);

    draw_navigation(f, app, content_chunks[0]);
    match app.current_page() {
        Page::Home => draw_home(f, content_chunks[1]),
        Page::MachineLearning => draw_machine_learning(f, app, content_chunks[1]),
        Page::Presentation => draw_presentation(f, app, content_chunks[1]),
        Page::Authors => draw_authors(f, content_chunks[1]),
    }

    // Footer
    let help = match app.current_page() {
        Page::MachineLearning => {
            "1-4/Tab: Page | h/l: Column | j/k: Move | Enter: Choose | p: Predict | r: Reset | q: Quit"
        }
        _ => "1-4/Tab: Page | q: Quit",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn draw_navigation(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let label = format!("{} {}", i + 1, page.title());
            if *page == app.current_page() {
                Line::from(Span::styled(
                    format!(">> {}", label),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("   {}", label))
            }
        })
        .collect();

    let nav = Paragraph::new(lines).block(rounded_block(" Navigation "));
    f.render_widget(nav, area);
}

fn draw_home(f: &mut Frame, area: Rect) {
    let mut text = vec![
        Line::from(Span::styled(
            content::HOME_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for paragraph in content::HOME_PARAGRAPHS {
        text.push(Line::from(paragraph));
        text.push(Line::from(""));
    }

    let home = Paragraph::new(text)
        .block(rounded_block(" Energy Project "))
        .wrap(Wrap { trim: true });
    f.render_widget(home, area);
}

fn draw_presentation(f: &mut Frame, app: &App, area: Rect) {
    let text: Vec<Line> = content::presentation_lines(app.presentation_url.as_deref())
        .into_iter()
        .map(Line::from)
        .collect();

    let presentation = Paragraph::new(text)
        .block(rounded_block(" Presentation "))
        .wrap(Wrap { trim: true });
    f.render_widget(presentation, area);
}

fn draw_authors(f: &mut Frame, area: Rect) {
    let mut text = Vec::new();
    for author in content::AUTHORS {
        text.push(Line::from(Span::styled(
            author.name,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            author.profile_url,
            Style::default().fg(Color::Blue),
        )));
        text.push(Line::from(""));
    }

    let authors = Paragraph::new(text).block(rounded_block(" Authors "));
    f.render_widget(authors, area);
}

fn draw_machine_learning(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Region
            Constraint::Percentage(25), // Year
            Constraint::Percentage(25), // Month
        ])
        .split(chunks[0]);

    for (i, field) in [Field::Region, Field::Year, Field::Month].into_iter().enumerate() {
        draw_selection_column(f, app, field, i, columns[i]);
    }
    draw_result(f, app, chunks[1]);
}

fn draw_selection_column(f: &mut Frame, app: &mut App, field: Field, index: usize, area: Rect) {
    let chosen = app.chosen(field).map(str::to_string);
    let items: Vec<ListItem> = app
        .options(field)
        .into_iter()
        .map(|value| {
            let style = if chosen.as_deref() == Some(value.as_str()) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(value, style))
        })
        .collect();

    let title = format!(" Select a {} ", title_case(field));
    let border_style = if app.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(rounded_block(&title).border_style(border_style))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.list_states[index]);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let mut text = Vec::new();

    match &app.outcome {
        Some(CommitOutcome::Found(result)) => {
            text.push(Line::from(Span::styled(
                content::PREDICTION_METHOD_NOTE,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(Span::styled(
                result.headline(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(Span::styled(
                result.formatted_value(),
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            )));
            let kind_color = match result.classification {
                Classification::Historical => Color::Green,
                Classification::Projected => Color::Magenta,
            };
            text.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", result.classification.label()),
                    Style::default().fg(kind_color),
                ),
                Span::raw(result.caption()),
            ]));
        }
        Some(CommitOutcome::NotFound { .. }) => {
            text.push(Line::from(Span::styled(
                NOT_FOUND_MESSAGE,
                Style::default().fg(Color::Red),
            )));
        }
        None => {
            text.push(Line::from(Span::styled(
                "Choose a region, a year and a month, then press p to predict.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if let Some(path) = app.illustration() {
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Illustration: ", Style::default().fg(Color::Blue)),
            Span::raw(path.display().to_string()),
        ]));
    }

    if let Some(status) = &app.status {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let result = Paragraph::new(text)
        .block(rounded_block(" Prediction "))
        .wrap(Wrap { trim: true });
    f.render_widget(result, area);
}

fn title_case(field: Field) -> &'static str {
    match field {
        Field::Region => "Region",
        Field::Year => "Year",
        Field::Month => "Month",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use energy_dash_core::{PredictionRecord, PredictionTable, RegionImages};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_each_page() {
        let table = PredictionTable::from_records(vec![PredictionRecord::new(
            "Bretagne", "2022", "6", 2300.0,
        )])
        .unwrap();
        let mut app = App::new(Arc::new(table), RegionImages::new("assets"), None);

        assert!(rendered(&mut app).contains("Welcome to the Energy Project"));

        app.set_page("authors");
        assert!(rendered(&mut app).contains("Leena Warunkar"));

        app.set_page("presentation");
        assert!(rendered(&mut app).contains("No presentation link"));

        app.set_page("machine-learning");
        app.choose();
        app.choose();
        app.choose();
        app.predict();
        let screen = rendered(&mut app);
        assert!(screen.contains("2300.00"));
        assert!(screen.contains("[Projected]"));
    }
}
