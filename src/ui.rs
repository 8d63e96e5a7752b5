//! Drawing - a pure function from `RenderState` to a frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Error
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Source
            Constraint::Length(3), // Target
            Constraint::Length(1), // Buttons
            Constraint::Min(3),    // Result
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, chunks[0]);

    if let Some(error) = &state.error {
        let error = Paragraph::new(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red).bold(),
        ));
        f.render_widget(error, chunks[1]);
    }

    draw_amount(f, state, chunks[2]);
    draw_select(
        f,
        state,
        chunks[3],
        Field::Source,
        " Source Currency ",
        &state.source_currency,
        "Select source currency",
    );
    draw_select(
        f,
        state,
        chunks[4],
        Field::Target,
        " Target Currency ",
        &state.target_currency,
        "Select target currency",
    );
    draw_buttons(f, chunks[5]);
    draw_result(f, state, chunks[6]);
    draw_status_bar(f, state, chunks[7]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn field_border(state: &RenderState, field: Field) -> Style {
    let is_focused = state.active_field == field;
    if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_amount(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(state, Field::Amount))
        .title(" Amount ");

    let input = Paragraph::new(state.amount.as_str()).block(block);
    f.render_widget(input, area);

    if state.active_field == Field::Amount && state.input_mode == InputMode::Editing {
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let column = cursor_column(&state.amount, state.cursor_position);
        let cursor_x = area.x.saturating_add(column).saturating_add(1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

/// Screen column of a byte cursor inside `amount`
fn cursor_column(amount: &str, cursor_position: usize) -> u16 {
    let chars = amount
        .get(..cursor_position)
        .map(|before| before.chars().count())
        .unwrap_or_else(|| amount.chars().count());
    u16::try_from(chars).unwrap_or(u16::MAX)
}

fn draw_select(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    field: Field,
    title: &str,
    value: &str,
    placeholder: &str,
) {
    let hint = if state.loading_currencies {
        String::from(" loading... ")
    } else {
        format!(" ↑/↓ {} codes ", state.currency_list.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(state, field))
        .title(title)
        .title_bottom(Line::from(hint).right_aligned());

    let content = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, Style::default().fg(Color::Green).bold())
    };

    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn draw_buttons(f: &mut Frame, area: Rect) {
    let button = |key: &'static str, label: &'static str, color: Color| {
        vec![
            Span::styled(format!(" [{}] ", key), Style::default().fg(Color::Black).bg(color)),
            Span::styled(format!(" {} ", label), Style::default().fg(color)),
            Span::raw(" "),
        ]
    };

    let mut spans = button("c", "Convert", Color::Green);
    spans.extend(button("s", "Swap Currencies", Color::Blue));
    spans.extend(button("x", "Clear", Color::Red));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_result(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.converting { " Result [...] " } else { " Result " };
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines = Vec::new();
    if let Some(result) = state.result_line() {
        lines.push(Line::from(Span::styled(
            result,
            Style::default().fg(Color::Yellow).bold(),
        )));
        if let Some(date) = &state.rates_date {
            lines.push(Line::from(Span::styled(
                format!("rates as of {}", date),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let result = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(result, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.converting {
        " Converting... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Enter:convert "
    } else {
        " Tab:field | e:edit | ↑/↓:pick | c:convert | s:swap | x:clear | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 CURRENCY CONVERTER - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch fields
   ↑ / ↓              Pick a currency (source/target)

 AMOUNT
   e / Enter          Edit amount
   Esc                Stop editing

 COMMANDS
   c / Enter          Convert
   s                  Swap source and target
   x                  Clear the form
   r                  Reload currency list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
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
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let screen = render(&RenderState::default());
        assert!(screen.contains("Select source currency"));
        assert!(screen.contains("Select target currency"));
        assert!(screen.contains("Swap Currencies"));
        assert!(!screen.contains("equals"));
    }

    #[test]
    fn test_result_and_error_are_drawn() {
        let state = RenderState {
            amount: "100".into(),
            source_currency: "USD".into(),
            target_currency: "EUR".into(),
            converted_amount: Some(90.0),
            error: Some("Invalid currency code or network issue.".into()),
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("100 USD equals 90.00 EUR"));
        assert!(screen.contains("Invalid currency code or network issue."));
    }

    #[test]
    fn test_cursor_column_counts_chars() {
        assert_eq!(cursor_column("€10", 0), 0);
        assert_eq!(cursor_column("€10", 3), 1);
        assert_eq!(cursor_column("€10", 5), 3);
        assert_eq!(cursor_column("12", 9), 2);
    }

    #[test]
    fn test_cursor_on_long_amount_stays_in_box() {
        let amount = "9".repeat(70_000);
        assert_eq!(cursor_column(&amount, amount.len()), u16::MAX);

        let state = RenderState {
            cursor_position: amount.len(),
            amount,
            active_field: Field::Amount,
            input_mode: InputMode::Editing,
            ..RenderState::default()
        };
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, &state)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 88);
    }
}
