use crate::ui::app::{App, Focus};
use crate::ui::chat::{Author, BOT_NAME};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panes, layout_regions};
use crate::ui::request::{Phase, RequestState, SlotInput};
use crate::ui::theme::Palette;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const QUESTION_PLACEHOLDER: &str = "e.g., What are tonight's plans?";
const PATH_PLACEHOLDER: &str = "type a path or drop a .txt file";
const CHAT_PLACEHOLDER: &str = "Say something...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let header_widget = Header::new(app.theme(), app.base_url());
    frame.render_widget(header_widget.widget(), header);

    let panes = body_panes(body);
    draw_ask(frame, app, palette, panes.ask);
    draw_summarize(frame, app, palette, panes.summarize);
    draw_chat(frame, app, palette, panes.chat);

    let footer_widget = Footer::new(app.focus(), app.theme());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn pane_block(title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let border = if focused {
        palette.focus_border
    } else {
        palette.border
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().fg(palette.text).bg(palette.background))
}

/// Button line plus the result area shared by both slots.
fn slot_lines<I: SlotInput>(
    state: &RequestState<I>,
    result_title: &str,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let button_style = if state.can_trigger() {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    let result_style = match state.phase() {
        Phase::Idle | Phase::InFlight => Style::default().fg(palette.muted),
        Phase::Succeeded => Style::default().fg(palette.text),
        Phase::Failed => Style::default().fg(palette.status_error),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("[ {} ]", state.action_label()),
            button_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            result_title.to_string(),
            Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        state
            .display_text()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), result_style))),
    );
    lines
}

fn draw_ask(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let question = app.ask().input().text();
    let question_line = if question.is_empty() {
        Span::styled(QUESTION_PLACEHOLDER, Style::default().fg(palette.muted))
    } else {
        Span::styled(question.to_string(), Style::default().fg(palette.text))
    };

    let mut lines = vec![
        Line::from(Span::styled("Ask a question", Style::default().fg(palette.muted))),
        Line::from(vec![Span::raw("> "), question_line]),
        Line::from(""),
    ];
    lines.extend(slot_lines(app.ask(), "Answer", palette));

    let block = pane_block("Ask", app.focus() == Focus::Ask, palette);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_summarize(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let muted = Style::default().fg(palette.muted);
    let draft = app.path_draft();
    let path_line = if draft.is_empty() {
        Span::styled(PATH_PLACEHOLDER, muted)
    } else {
        Span::styled(draft.to_string(), Style::default().fg(palette.text))
    };
    let selected = match app.summarize().input().file() {
        Some(file) => Line::from(vec![
            Span::styled("Selected: ", muted),
            Span::styled(file.name().to_string(), Style::default().fg(palette.status_ok)),
        ]),
        None => Line::from(Span::styled("No file selected", muted)),
    };

    let mut lines = vec![
        Line::from(Span::styled("Attach a .txt file", muted)),
        Line::from(vec![Span::raw("> "), path_line]),
        selected,
    ];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(palette.status_error),
        )));
    }
    lines.push(Line::from(""));
    lines.extend(slot_lines(app.summarize(), "Summary", palette));

    let block = pane_block("Summarize", app.focus() == Focus::Summarize, palette);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_chat(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let block = pane_block(
        &format!("Chat with {BOT_NAME}"),
        app.focus() == Focus::Chat,
        palette,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [log_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

    let width = log_area.width as usize;
    let mut lines = Vec::new();
    for message in app.chat().messages() {
        let prefix = message.from.label();
        let colour = match message.from {
            Author::You => palette.you,
            Author::Bot => palette.bot,
        };
        let label_style = Style::default().fg(colour).add_modifier(Modifier::BOLD);
        for (i, row) in wrap_text(&message.text, width.saturating_sub(prefix.len() + 2))
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 {
                Span::styled(format!("{prefix}: "), label_style)
            } else {
                Span::raw(" ".repeat(prefix.len() + 2))
            };
            lines.push(Line::from(vec![lead, Span::raw(row)]));
        }
    }
    if app.chat().is_typing() {
        lines.push(Line::from(Span::styled(
            format!("{BOT_NAME} is typing…"),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let visible = tail(&lines, log_area.height as usize).to_vec();
    frame.render_widget(Paragraph::new(visible), log_area);

    let draft = app.chat().draft();
    let draft_span = if draft.is_empty() {
        Span::styled(CHAT_PLACEHOLDER, Style::default().fg(palette.muted))
    } else {
        Span::raw(draft.to_string())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw("> "), draft_span])).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        ),
        input_area,
    );
}

/// Word-wrap to `width` columns. Words longer than a row are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        let word_len = chars.len();
        let word: String = chars.into_iter().collect();

        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word));
            current_len = word_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Last `height` rows: the chat log always sits scrolled to the bottom.
pub fn tail<T>(rows: &[T], height: usize) -> &[T] {
    &rows[rows.len().saturating_sub(height)..]
}
