//! Custom widgets for the Fliplingo TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Theme;
use crate::models::VocabularyPair;

// ══════════════════════════════════════════════════════════════════════════
// Logo Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct Logo<'a> {
    theme: &'a Theme,
}

impl<'a> Logo<'a> {
    const ART: &'static str = r#"
    ╭──────────────────────────────────────────────╮
    │  _____ _ _       _ _                         │
    │ |  ___| (_)_ __ | (_)_ __   __ _  ___        │
    │ | |_  | | | '_ \| | | '_ \ / _` |/ _ \       │
    │ |  _| | | | |_) | | | | | | (_| | (_) |      │
    │ |_|   |_|_| .__/|_|_|_| |_|\__, |\___/       │
    │           |_|              |___/             │
    │                                              │
    │      ┌────┐   Learn vocabulary with          │
    │      │ 🌍 │   flip cards and quizzes         │
    │      └────┘                                  │
    ╰──────────────────────────────────────────────╯"#;

    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Self::ART
            .lines()
            .skip(1)
            .map(|line| {
                Line::from(vec![Span::styled(
                    line,
                    Style::default().fg(self.theme.colors.primary),
                )])
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Flip Card Widget
// ══════════════════════════════════════════════════════════════════════════

/// One card of the flip-card grid. Shows the front word until flipped,
/// the translation afterwards.
pub struct FlipCard<'a> {
    pair: &'a VocabularyPair,
    flipped: bool,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> FlipCard<'a> {
    pub fn new(pair: &'a VocabularyPair, flipped: bool, selected: bool, theme: &'a Theme) -> Self {
        Self {
            pair,
            flipped,
            selected,
            theme,
        }
    }
}

impl Widget for FlipCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (content, face_style, face_bg) = if self.flipped {
            (
                self.pair.back,
                self.theme.card_back(),
                self.theme.colors.bg_card_back,
            )
        } else {
            (
                self.pair.front,
                self.theme.card_front(),
                self.theme.colors.bg_card,
            )
        };

        let border_style = if self.selected {
            Style::default()
                .fg(self.theme.colors.accent)
                .add_modifier(Modifier::BOLD)
        } else if self.flipped {
            Style::default().fg(self.theme.colors.primary_dark)
        } else {
            Style::default().fg(self.theme.colors.text_dim)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(face_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        // Center the word vertically inside the card
        let vertical_padding = inner.height.saturating_sub(1) / 2;
        let content_area = Rect {
            x: inner.x,
            y: inner.y + vertical_padding,
            width: inner.width,
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(face_style)
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Quiz Prompt Widget
// ══════════════════════════════════════════════════════════════════════════

/// The word to translate, rendered as a large card.
pub struct QuizPrompt<'a> {
    word: &'a str,
    theme: &'a Theme,
}

impl<'a> QuizPrompt<'a> {
    pub fn new(word: &'a str, theme: &'a Theme) -> Self {
        Self { word, theme }
    }
}

impl Widget for QuizPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.primary))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("TRANSLATE", self.theme.highlight()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(self.theme.colors.bg_card));

        let inner = block.inner(area);
        block.render(area, buf);

        let vertical_padding = inner.height.saturating_sub(1) / 2;
        let content_area = Rect {
            x: inner.x + 2,
            y: inner.y + vertical_padding,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(self.word)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(self.theme.title())
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Level Bar Widget
// ══════════════════════════════════════════════════════════════════════════

/// Level label plus a horizontal progress bar across all levels.
pub struct LevelBar<'a> {
    level: u32,
    ratio: f64,
    theme: &'a Theme,
}

impl<'a> LevelBar<'a> {
    pub fn new(level: u32, ratio: f64, theme: &'a Theme) -> Self {
        Self {
            level,
            ratio: ratio.clamp(0.0, 1.0),
            theme,
        }
    }
}

impl Widget for LevelBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label = Line::from(vec![
            Span::styled("Level: ", self.theme.subtitle()),
            Span::styled(
                self.level.to_string(),
                Style::default()
                    .fg(self.theme.colors.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(label).render(
            Rect {
                height: 1,
                ..area
            },
            buf,
        );

        if area.height < 2 {
            return;
        }

        let bar_width = area.width as usize;
        let filled = (self.ratio * bar_width as f64).round() as usize;
        let bar = Line::from(vec![
            Span::styled(
                "█".repeat(filled.min(bar_width)),
                Style::default().fg(self.theme.colors.primary),
            ),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(self.theme.colors.bg_highlight),
            ),
        ]);
        Paragraph::new(bar).render(
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
            buf,
        );
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(self.theme.colors.text_dim),
                ));
            }
            spans.push(Span::styled(*key, self.theme.key_highlight()));
            spans.push(Span::styled(format!(" {}", desc), self.theme.key_hint()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Completion Screen Widget
// ══════════════════════════════════════════════════════════════════════════

/// Shown when the current level has no questions left in the bundled list.
pub struct CompletionScreen<'a> {
    levels_cleared: u32,
    theme: &'a Theme,
}

impl<'a> CompletionScreen<'a> {
    pub fn new(levels_cleared: u32, theme: &'a Theme) -> Self {
        Self {
            levels_cleared,
            theme,
        }
    }
}

impl Widget for CompletionScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.success))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("ALL LEVELS CLEARED", self.theme.correct()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled("Selamat! 🎉", self.theme.correct())]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Levels cleared: ", self.theme.subtitle()),
                Span::styled(
                    self.levels_cleared.to_string(),
                    Style::default()
                        .fg(self.theme.colors.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![Span::styled(
                "There are no more questions for now.",
                self.theme.subtitle(),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", self.theme.key_hint()),
                Span::styled("Esc", self.theme.key_highlight()),
                Span::styled(" to return home", self.theme.key_hint()),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
