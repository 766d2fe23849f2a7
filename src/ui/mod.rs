mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Popup};
use crate::tooltip::Position;

pub use components::{arrow_glyph, min_width_cells, overlay_rect};

/// Horizontal padding inside the overlay, per side
const OVERLAY_PADDING: u16 = 1;

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Responsive: shrink the markup box on short terminals
    let markup_height = if area.height < 20 { 4 } else { 7 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1),             // Info line
            Constraint::Min(5),                // Stage
            Constraint::Length(markup_height), // Rendered markup
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    draw_info_line(f, app, chunks[0]);
    draw_stage(f, app, chunks[1]);
    draw_markup_box(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status, Style::default().fg(theme.accent)))
    } else {
        let state = if app.focused {
            "focused"
        } else if app.hovered {
            "hovered"
        } else {
            "idle"
        };
        Line::from(vec![
            Span::styled(format!("position {}", app.config.position), Style::default().fg(theme.text)),
            Span::styled(" │ ", Style::default().fg(theme.text_dim)),
            Span::styled(state, Style::default().fg(theme.text_dim)),
        ])
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_stage(f: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focused { app.theme.accent } else { app.theme.inactive };
    let block = Block::default()
        .title(Span::styled(
            " Preview ",
            Style::default().fg(app.theme.header).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Trigger sits in the middle of the stage
    let label = app.trigger_label();
    let label_width = (Line::from(label.as_str()).width() as u16).clamp(1, inner.width.max(1));
    let trigger = Rect::new(
        inner.x + inner.width.saturating_sub(label_width) / 2,
        inner.y + inner.height / 2,
        label_width,
        inner.height.min(1),
    );
    app.trigger_area = Some(trigger);

    let trigger_style = match &app.config.trigger {
        None => Style::default().fg(app.theme.glyph),
        Some(_) => Style::default().fg(app.theme.text),
    };
    let trigger_style = if app.overlay_visible() {
        trigger_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        trigger_style
    };
    f.render_widget(Paragraph::new(Span::styled(label, trigger_style)), trigger);

    if app.overlay_visible() {
        draw_overlay(f, app, trigger, inner);
    }
}

fn draw_overlay(f: &mut Frame, app: &App, trigger: Rect, bounds: Rect) {
    let lines = app.overlay_lines();
    let content_width = lines
        .iter()
        .map(|l| Line::from(l.as_str()).width() as u16)
        .max()
        .unwrap_or(0);
    let min_width = app
        .config
        .effective_min_width()
        .and_then(min_width_cells)
        .unwrap_or(0);

    // Never wider than the stage; huge CSS widths would otherwise overflow
    let width = content_width
        .max(min_width)
        .saturating_add(OVERLAY_PADDING * 2)
        .min(bounds.width);
    let height = (lines.len() as u16).max(1);
    let position = app.config.position;

    let rect = overlay_rect(trigger, (width, height), position, bounds);
    let style = Style::default().fg(app.theme.tip_fg).bg(app.theme.tip_bg);

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let overlay = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, rect);
    f.render_widget(overlay, rect);

    if let Some((x, y)) = components::arrow_cell(trigger, position, bounds) {
        let arrow = Span::styled(arrow_glyph(position), Style::default().fg(app.theme.tip_bg));
        f.render_widget(Paragraph::new(arrow), Rect::new(x, y, 1, 1));
    }
}

fn draw_markup_box(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Markup ", Style::default().fg(app.theme.inactive)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.inactive));

    let markup = Paragraph::new(app.markup.as_str())
        .style(Style::default().fg(app.theme.text_dim))
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(markup, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints = [
        ("Tab", "Focus"),
        ("←↑↓→", "Position"),
        ("s", "Save"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 50 { 3 } else { hints.len() };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let heading = |s: &'static str| {
        Line::from(Span::styled(s, Style::default().fg(theme.header).add_modifier(Modifier::BOLD)))
    };
    let row = |key: &'static str, what: String| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(theme.accent)),
            Span::raw(what),
        ])
    };

    let mut help_text = vec![
        heading("═══ Reveal ═══"),
        row("Mouse", "Hover the trigger to show the overlay".to_string()),
        row("Click", "Focus the trigger (click elsewhere to blur)".to_string()),
        row("Tab", "Toggle keyboard focus".to_string()),
        Line::from(""),
        heading("═══ Position ═══"),
    ];
    for (key, position) in [
        ("↓ j", Position::Bottom),
        ("↑ k", Position::Top),
        ("← h", Position::Left),
        ("→ l", Position::Right),
    ] {
        help_text.push(row(key, format!("Overlay {} (bs-tooltip-{})", position, position)));
    }
    help_text.extend([
        Line::from(""),
        heading("═══ Other ═══"),
        row("s", "Save config".to_string()),
        row("q Esc", "Quit".to_string()),
    ]);

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(theme.header)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::TooltipConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_overlay_drawn_only_when_revealed() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut app = App::new(TooltipConfig::with_content("Hello tip"), None);

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let trigger = app.trigger_area.unwrap();
        assert!(!row_text(&terminal, trigger.y + 2).contains("Hello tip"));

        app.focused = true;
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(row_text(&terminal, trigger.y + 1).contains(arrow_glyph(Position::Bottom)));
        assert!(row_text(&terminal, trigger.y + 2).contains("Hello tip"));
    }

    #[test]
    fn test_overlay_follows_position() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let config = TooltipConfig {
            position: Position::Top,
            ..TooltipConfig::with_content("Above")
        };
        let mut app = App::new(config, None);
        app.hovered = true;

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let trigger = app.trigger_area.unwrap();
        assert!(row_text(&terminal, trigger.y - 1).contains(arrow_glyph(Position::Top)));
        assert!(row_text(&terminal, trigger.y - 2).contains("Above"));
    }

    #[test]
    fn test_huge_min_width_fills_stage() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let config = TooltipConfig {
            min_width: Some("600000px".into()),
            ..TooltipConfig::with_content("Wide")
        };
        let mut app = App::new(config, None);
        app.focused = true;

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let trigger = app.trigger_area.unwrap();
        let row = row_text(&terminal, trigger.y + 2);
        assert!(row.contains("Wide"));

        // Overlay spans the stage interior, inside the borders
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, trigger.y + 2)].bg, app.theme.tip_bg);
        assert_eq!(buffer[(58, trigger.y + 2)].bg, app.theme.tip_bg);
    }

    #[test]
    fn test_markup_box_shows_rendered_html() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut app = App::new(TooltipConfig::default(), None);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains("tiptrigger"));
    }
}
