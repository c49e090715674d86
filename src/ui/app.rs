//! Main application state and logic.

use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{CompletionScreen, FlipCard, KeyHints, LevelBar, Logo, QuizPrompt};
use crate::config::Config;
use crate::models::{total_levels, UserProgress, VOCABULARY};
use crate::quiz::{QuizPhase, QuizSession, SubmitOutcome};
use crate::storage::ProgressStore;

/// Cards per row in the flip-card grid.
const CARD_COLUMNS: usize = 2;

// ══════════════════════════════════════════════════════════════════════════
// Application State
// ══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    FlipCards,
    Quiz,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    StartLearning,
    TakeQuiz,
    LogIn,
    LogOut,
    ToggleTheme,
    Quit,
}

impl MenuEntry {
    fn label(&self) -> &'static str {
        match self {
            MenuEntry::StartLearning => "Start Learning",
            MenuEntry::TakeQuiz => "Take a Quiz",
            MenuEntry::LogIn => "Log In",
            MenuEntry::LogOut => "Log Out",
            MenuEntry::ToggleTheme => "Toggle Theme",
            MenuEntry::Quit => "Quit",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub running: bool,

    // Config and theme
    pub config: Config,
    pub theme: Theme,

    // Storage
    pub store: ProgressStore,
    pub progress: UserProgress,

    // Home state
    pub menu_state: ListState,

    // Flip-card state: one flag per card, indexed by position
    pub flipped: Vec<bool>,
    pub selected_card: usize,

    // Quiz state
    pub quiz: QuizSession,
    pub quiz_input: String,

    // Login state
    pub login_input: String,

    // Status message (shown temporarily)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(store: ProgressStore, config: Config) -> Self {
        let mut progress = store.load();
        if !store.has_progress() {
            // First run: the config file is the only theme record we have.
            progress.theme = config.theme;
        }
        let theme = Theme::new(progress.theme);
        let quiz = QuizSession::new(progress.current_level);

        Self {
            screen: Screen::Home,
            running: true,
            config,
            theme,
            store,
            progress,
            menu_state: ListState::default().with_selected(Some(0)),
            flipped: vec![false; VOCABULARY.len()],
            selected_card: 0,
            quiz,
            quiz_input: String::new(),
            login_input: String::new(),
            status_message: None,
        }
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::StartLearning,
            MenuEntry::TakeQuiz,
            if self.progress.logged_in {
                MenuEntry::LogOut
            } else {
                MenuEntry::LogIn
            },
            MenuEntry::ToggleTheme,
            MenuEntry::Quit,
        ]
    }

    /// Re-read progress from storage, screen-mount style. The in-memory
    /// copy is only replaced when a file exists, so a first run keeps the
    /// config-derived theme.
    fn reload_progress(&mut self) {
        if self.store.has_progress() {
            self.progress = self.store.load();
            self.theme = Theme::new(self.progress.theme);
        }
    }

    fn go_home(&mut self) {
        self.reload_progress();
        self.menu_state = ListState::default().with_selected(Some(0));
        self.screen = Screen::Home;
    }

    fn open_flip_cards(&mut self) {
        // Fresh mount: every card starts front-facing.
        self.flipped = vec![false; VOCABULARY.len()];
        self.selected_card = 0;
        self.screen = Screen::FlipCards;
    }

    fn open_quiz(&mut self) {
        self.reload_progress();
        self.quiz = QuizSession::new(self.progress.current_level);
        self.quiz_input.clear();
        self.screen = Screen::Quiz;
    }

    fn open_login(&mut self) {
        self.login_input.clear();
        self.screen = Screen::Login;
    }

    pub fn toggle_theme(&mut self) {
        let choice = self.progress.theme.toggled();
        self.progress.theme = choice;
        self.theme = Theme::new(choice);
        self.config.theme = choice;
        if let Err(err) = self.store.save(&self.progress) {
            self.set_status(format!("Could not save theme: {err:#}"));
        }
        if let Err(err) = self.config.save() {
            self.set_status(format!("Could not save config: {err:#}"));
        }
    }

    fn log_in(&mut self, name: String) {
        self.progress.log_in(name);
        if let Err(err) = self.store.save(&self.progress) {
            self.set_status(format!("Could not save login: {err:#}"));
        } else {
            self.set_status(format!("Welcome, {}!", self.progress.user_name));
        }
        self.screen = Screen::Home;
    }

    fn log_out(&mut self) {
        self.progress.log_out();
        if let Err(err) = self.store.save(&self.progress) {
            self.set_status(format!("Could not save logout: {err:#}"));
        } else {
            self.set_status("Logged out".to_string());
        }
    }

    /// Check the typed answer; a correct one bumps and persists the level.
    pub fn submit_quiz_answer(&mut self) {
        match self.quiz.submit(&self.quiz_input) {
            SubmitOutcome::Correct { new_level } => {
                self.progress.current_level = new_level;
                if let Err(err) = self.store.save(&self.progress) {
                    self.set_status(format!("Could not save progress: {err:#}"));
                }
            }
            SubmitOutcome::Wrong | SubmitOutcome::Ignored => {}
        }
    }

    pub fn advance_quiz(&mut self) {
        self.quiz.advance();
        self.quiz_input.clear();
    }

    fn flip_selected_card(&mut self) {
        if let Some(flipped) = self.flipped.get_mut(self.selected_card) {
            *flipped = !*flipped;
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.screen {
                    Screen::Home => self.handle_home_keys(key.code),
                    Screen::FlipCards => self.handle_flip_card_keys(key.code),
                    Screen::Quiz => self.handle_quiz_keys(key.code),
                    Screen::Login => self.handle_login_keys(key.code),
                }
            }
        }
        Ok(())
    }

    fn handle_home_keys(&mut self, key: KeyCode) {
        let entry_count = self.menu_entries().len();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.menu_state.selected().unwrap_or(0);
                let new_i = if i == 0 { entry_count - 1 } else { i - 1 };
                self.menu_state.select(Some(new_i));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.menu_state.selected().unwrap_or(0);
                let new_i = if i >= entry_count - 1 { 0 } else { i + 1 };
                self.menu_state.select(Some(new_i));
            }
            KeyCode::Enter => {
                let i = self.menu_state.selected().unwrap_or(0);
                if let Some(entry) = self.menu_entries().get(i).copied() {
                    match entry {
                        MenuEntry::StartLearning => self.open_flip_cards(),
                        MenuEntry::TakeQuiz => self.open_quiz(),
                        MenuEntry::LogIn => self.open_login(),
                        MenuEntry::LogOut => self.log_out(),
                        MenuEntry::ToggleTheme => self.toggle_theme(),
                        MenuEntry::Quit => self.running = false,
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_flip_card_keys(&mut self, key: KeyCode) {
        let last = VOCABULARY.len().saturating_sub(1);
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.go_home(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Enter | KeyCode::Char(' ') => self.flip_selected_card(),
            KeyCode::Char('r') => self.flipped.fill(false),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_card = (self.selected_card + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_card = self.selected_card.saturating_sub(CARD_COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_card = (self.selected_card + CARD_COLUMNS).min(last);
            }
            _ => {}
        }
    }

    fn handle_quiz_keys(&mut self, key: KeyCode) {
        match self.quiz.phase() {
            QuizPhase::Answering => match key {
                KeyCode::Esc => self.go_home(),
                KeyCode::Enter => {
                    if !self.quiz_input.is_empty() {
                        self.submit_quiz_answer();
                    }
                }
                KeyCode::Char(c) => self.quiz_input.push(c),
                KeyCode::Backspace => {
                    self.quiz_input.pop();
                }
                _ => {}
            },
            QuizPhase::Answered => match key {
                KeyCode::Esc => self.go_home(),
                KeyCode::Enter | KeyCode::Char('n') => self.advance_quiz(),
                _ => {}
            },
            QuizPhase::Complete => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.go_home(),
                _ => {}
            },
        }
    }

    fn handle_login_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_home(),
            KeyCode::Enter => {
                let name = self.login_input.trim().to_string();
                if !name.is_empty() {
                    self.log_in(name);
                }
            }
            KeyCode::Char(c) => self.login_input.push(c),
            KeyCode::Backspace => {
                self.login_input.pop();
            }
            _ => {}
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg)),
            area,
        );

        match self.screen {
            Screen::Home => self.render_home(frame, area),
            Screen::FlipCards => self.render_flip_cards(frame, area),
            Screen::Quiz => self.render_quiz(frame, area),
            Screen::Login => self.render_login(frame, area),
        }
    }

    fn render_home(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),  // Top padding
            Constraint::Length(12), // Logo
            Constraint::Length(3),  // Greeting
            Constraint::Min(7),     // Menu
            Constraint::Length(3),  // Help
        ])
        .split(area);

        frame.render_widget(Logo::new(&self.theme), chunks[1]);

        // Greeting
        let greeting = if self.progress.logged_in {
            format!("Hi, {}", self.progress.user_name)
        } else {
            "Master Languages Effortlessly".to_string()
        };
        let greeting_lines = vec![
            ratatui::text::Line::styled(greeting, self.theme.title()),
            ratatui::text::Line::styled(
                "Learn vocabulary through flip cards and quizzes.",
                self.theme.subtitle(),
            ),
        ];
        frame.render_widget(
            Paragraph::new(greeting_lines).alignment(Alignment::Center),
            chunks[2],
        );

        // Menu
        let menu_area = centered_rect(40, 100, chunks[3]);
        let items: Vec<ListItem> = self
            .menu_entries()
            .iter()
            .map(|entry| ListItem::new(entry.label()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Fliplingo ")
                    .title_style(self.theme.highlight()),
            )
            .style(Style::default().fg(self.theme.colors.text))
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, menu_area, &mut self.menu_state);

        // Key hints with theme indicator
        let theme_hint = format!("[{}]", self.theme.choice.display_name());
        let hints_data: [(&str, &str); 4] = [
            ("j/k", "nav"),
            ("Enter", "select"),
            ("t", &theme_hint),
            ("q", "quit"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[4]);

        // Show status message if recent (within 5 seconds)
        if let Some((ref msg, time)) = self.status_message {
            if time.elapsed().as_secs() < 5 {
                let status = Paragraph::new(msg.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.colors.success));
                let status_area = Rect {
                    x: chunks[4].x,
                    y: chunks[4].y.saturating_sub(1),
                    width: chunks[4].width,
                    height: 1,
                };
                frame.render_widget(status, status_area);
            }
        }
    }

    fn render_flip_cards(&mut self, frame: &mut Frame, area: Rect) {
        let rows = VOCABULARY.len().div_ceil(CARD_COLUMNS);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Min(5),    // Grid
            Constraint::Length(2), // Hints
        ])
        .split(area);

        let header = Paragraph::new("Learn Vocabulary")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(header, chunks[0]);

        // Card grid
        let grid_area = centered_rect(70, 100, chunks[1]);
        let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(5)).collect();
        let row_chunks = Layout::vertical(row_constraints).split(grid_area);

        for (row, row_area) in row_chunks.iter().enumerate() {
            let col_constraints: Vec<Constraint> = (0..CARD_COLUMNS)
                .map(|_| Constraint::Ratio(1, CARD_COLUMNS as u32))
                .collect();
            let col_chunks = Layout::horizontal(col_constraints).split(*row_area);

            for (col, card_area) in col_chunks.iter().enumerate() {
                let idx = row * CARD_COLUMNS + col;
                if let Some(pair) = VOCABULARY.get(idx) {
                    frame.render_widget(
                        FlipCard::new(
                            pair,
                            self.flipped[idx],
                            idx == self.selected_card,
                            &self.theme,
                        ),
                        *card_area,
                    );
                }
            }
        }

        let hints_data: [(&str, &str); 5] = [
            ("h/j/k/l", "nav"),
            ("Enter", "flip"),
            ("r", "reset"),
            ("t", "theme"),
            ("Esc", "home"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[2]);
    }

    fn render_quiz(&mut self, frame: &mut Frame, area: Rect) {
        if self.quiz.phase() == QuizPhase::Complete {
            let card_area = centered_rect(50, 50, area);
            frame.render_widget(CompletionScreen::new(total_levels(), &self.theme), card_area);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Level bar
            Constraint::Length(1), // Spacing
            Constraint::Min(7),    // Word card
            Constraint::Length(3), // Answer input
            Constraint::Length(1), // Result message
            Constraint::Length(2), // Hints
        ])
        .split(area);

        let header_lines = vec![
            ratatui::text::Line::styled("Test Your Knowledge", self.theme.title()),
            ratatui::text::Line::styled(
                format!(
                    "Question {} of {}",
                    self.quiz.question_number(),
                    self.quiz.question_count()
                ),
                self.theme.subtitle(),
            ),
        ];
        frame.render_widget(
            Paragraph::new(header_lines).alignment(Alignment::Center),
            chunks[0],
        );

        let bar_area = centered_rect(70, 100, chunks[1]);
        frame.render_widget(
            LevelBar::new(self.quiz.level(), self.quiz.progress_ratio(), &self.theme),
            bar_area,
        );

        // Word to translate
        let card_area = centered_rect(70, 100, chunks[3]);
        if let Some(question) = self.quiz.current_question() {
            frame.render_widget(QuizPrompt::new(question.word, &self.theme), card_area);
        }

        // Answer input, locked once answered correctly
        let answering = self.quiz.phase() == QuizPhase::Answering;
        let input_area = centered_rect(70, 100, chunks[4]);
        let input_style = if answering {
            Style::default().fg(self.theme.colors.accent)
        } else {
            Style::default().fg(self.theme.colors.text_dim)
        };
        let title = if answering {
            " Your answer "
        } else {
            " Your answer (locked) "
        };
        let input = Paragraph::new(self.quiz_input.as_str())
            .style(Style::default().fg(self.theme.colors.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(input_style)
                    .title(title)
                    .title_style(input_style),
            );
        frame.render_widget(input, input_area);

        if answering {
            let cursor_x = input_area.x + 1 + self.quiz_input.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
        }

        // Result message
        if let Some(message) = self.quiz.message() {
            let style = if self.quiz.phase() == QuizPhase::Answered {
                self.theme.correct()
            } else {
                self.theme.wrong()
            };
            let result = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(result, chunks[5]);
        }

        let hints = if answering {
            KeyHints::new(&[("Enter", "submit"), ("Esc", "home")], &self.theme)
        } else {
            KeyHints::new(&[("Enter/n", "next question"), ("Esc", "home")], &self.theme)
        };
        frame.render_widget(hints, chunks[6]);
    }

    fn render_login(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Name input
            Constraint::Min(1),    // Spacer
            Constraint::Length(2), // Hints
        ])
        .split(centered_rect(50, 100, area));

        let title = Paragraph::new("Log In")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let input_style = Style::default().fg(self.theme.colors.accent);
        let input = Paragraph::new(self.login_input.as_str())
            .style(Style::default().fg(self.theme.colors.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(input_style)
                    .title(" Your name ")
                    .title_style(input_style),
            );
        frame.render_widget(input, chunks[2]);

        let cursor_x = chunks[2].x + 1 + self.login_input.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(chunks[2].right().saturating_sub(2)), chunks[2].y + 1));

        let hints = KeyHints::new(&[("Enter", "log in"), ("Esc", "cancel")], &self.theme);
        frame.render_widget(hints, chunks[4]);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeChoice;
    use tempfile::TempDir;

    fn create_test_app() -> (App, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStore::new(temp_dir.path().to_path_buf()).unwrap();
        let app = App::new(store, Config::default());
        (app, temp_dir)
    }

    #[test]
    fn correct_submit_persists_the_new_level() {
        let (mut app, _temp) = create_test_app();
        assert_eq!(app.quiz.level(), 1);

        app.quiz_input = "Apel".to_string();
        app.submit_quiz_answer();

        assert_eq!(app.quiz.phase(), QuizPhase::Answered);
        assert_eq!(app.progress.current_level, 2);
        assert_eq!(app.store.load().current_level, 2);
    }

    #[test]
    fn wrong_submit_persists_nothing() {
        let (mut app, _temp) = create_test_app();

        app.quiz_input = "Pisang".to_string();
        app.submit_quiz_answer();

        assert_eq!(app.quiz.phase(), QuizPhase::Answering);
        assert_eq!(app.progress.current_level, 1);
        assert_eq!(app.store.load().current_level, 1);
    }

    #[test]
    fn advance_clears_the_typed_answer() {
        let (mut app, _temp) = create_test_app();
        app.quiz_input = "apel".to_string();
        app.submit_quiz_answer();
        app.advance_quiz();

        assert!(app.quiz_input.is_empty());
        assert_eq!(app.quiz.level(), 2);
        assert_eq!(app.quiz.phase(), QuizPhase::Answering);
    }

    #[test]
    fn quiz_resumes_from_the_persisted_level() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStore::new(temp_dir.path().to_path_buf()).unwrap();
        let mut progress = UserProgress::default();
        progress.current_level = 5;
        store.save(&progress).unwrap();

        let app = App::new(store, Config::default());
        assert_eq!(app.quiz.level(), 5);
        assert_eq!(app.quiz.current_question().map(|q| q.word), Some("Cat"));
    }

    #[test]
    fn login_and_logout_persist_the_token() {
        let (mut app, _temp) = create_test_app();

        app.log_in("Nico".to_string());
        assert!(app.progress.logged_in);
        let loaded = app.store.load();
        assert!(loaded.logged_in);
        assert_eq!(loaded.user_name, "Nico");

        app.log_out();
        let loaded = app.store.load();
        assert!(!loaded.logged_in);
        assert!(loaded.user_name.is_empty());
    }

    #[test]
    fn flip_state_is_independent_per_card() {
        let (mut app, _temp) = create_test_app();
        app.open_flip_cards();

        app.flip_selected_card();
        assert!(app.flipped[0]);
        assert!(app.flipped[1..].iter().all(|&f| !f));

        // Flipping back is the same toggle
        app.flip_selected_card();
        assert!(app.flipped.iter().all(|&f| !f));
    }

    #[test]
    fn reopening_flip_cards_resets_all_to_front() {
        let (mut app, _temp) = create_test_app();
        app.open_flip_cards();
        app.selected_card = 3;
        app.flip_selected_card();
        assert!(app.flipped[3]);

        app.open_flip_cards();
        assert!(app.flipped.iter().all(|&f| !f));
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn first_run_takes_theme_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStore::new(temp_dir.path().to_path_buf()).unwrap();
        let config = Config {
            theme: ThemeChoice::Dark,
        };

        let app = App::new(store, config);
        assert_eq!(app.progress.theme, ThemeChoice::Dark);
        assert_eq!(app.theme.choice, ThemeChoice::Dark);
    }

    #[test]
    fn stored_theme_wins_over_config() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStore::new(temp_dir.path().to_path_buf()).unwrap();
        store.save(&UserProgress::default()).unwrap();

        let config = Config {
            theme: ThemeChoice::Dark,
        };
        let app = App::new(store, config);
        assert_eq!(app.theme.choice, ThemeChoice::Light);
    }
}
