use crate::config::ThemeName;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Simple RAG";

pub struct Header<'a> {
    theme: ThemeName,
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(theme: ThemeName, base_url: &'a str) -> Self {
        Self { theme, base_url }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, text_style.fg(palette.accent).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.theme.label(), text_style),
        ]);

        Paragraph::new(line).style(Style::default().bg(palette.background)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
