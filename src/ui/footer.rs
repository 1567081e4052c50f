use crate::config::ThemeName;
use crate::ui::app::Focus;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    focus: Focus,
    theme: ThemeName,
}

impl Footer {
    pub fn new(focus: Focus, theme: ThemeName) -> Self {
        Self { focus, theme }
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Ask => " Enter: Ask │ Ctrl+R: Reset │ Tab: Next │ Ctrl+T: Theme │ Esc: Quit",
            Focus::Summarize => {
                " Enter: Select/Upload │ Paste: Drop file │ Ctrl+R: Reset │ Tab: Next │ Esc: Quit"
            }
            Focus::Chat => " Enter: Send │ Tab: Next │ Ctrl+T: Theme │ Esc: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(palette.text)
            .bg(palette.background)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
