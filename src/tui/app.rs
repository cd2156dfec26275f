use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::config::{KeybindingConfig, QuickIngredients};
use crate::controller::{DetailTicket, SearchTicket, ViewController};
use crate::tui::event::{Action, FetchEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Tags,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Tags,
            Focus::Tags => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Results,
            Focus::Tags => Focus::Input,
            Focus::Results => Focus::Tags,
        }
    }
}

/// Side effects a key press asks the event loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Search(SearchTicket),
    Detail(DetailTicket),
    OpenImage(String),
}

pub struct TuiApp {
    pub controller: ViewController,
    pub focus: Focus,
    pub input: String,
    pub tag_index: usize,
    pub result_index: usize,
    pub result_list_state: ListState,
    pub detail_scroll: u16,
    pub show_help: bool,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(notification_display: Duration) -> Self {
        Self {
            controller: ViewController::new(notification_display),
            focus: Focus::Input,
            input: String::new(),
            tag_index: 0,
            result_index: 0,
            result_list_state: ListState::default(),
            detail_scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// Index of the highlighted tag, if the tag bar has focus.
    pub fn selected_tag(&self) -> Option<usize> {
        if self.focus == Focus::Tags && !self.controller.ingredients().is_empty() {
            Some(self.tag_index)
        } else {
            None
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.expire_notifications(now);
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        bindings: &KeybindingConfig,
        quick: &QuickIngredients,
        now: Instant,
    ) -> Command {
        if self.show_help {
            self.show_help = false;
            return Command::None;
        }

        if self.focus == Focus::Input {
            return self.handle_input_key(key, bindings, now);
        }

        if let KeyCode::Char(c) = key.code {
            if let Some(digit) = c.to_digit(10).filter(|_| !has_command_modifier(&key)) {
                if let Some(ingredient) = quick.for_digit(digit) {
                    self.controller.add_ingredient(ingredient);
                }
                return Command::None;
            }
        }

        match bindings.get_action(&key) {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::NextPane => self.focus = self.focus.next(),
            Action::PrevPane => self.focus = self.focus.prev(),
            Action::Select => {
                if self.focus == Focus::Results {
                    if let Some(ticket) = self.controller.select_recipe(self.result_index) {
                        return Command::Detail(ticket);
                    }
                }
            }
            Action::Back => {
                if self.controller.back() {
                    self.detail_scroll = 0;
                    self.result_list_state.select(Some(self.result_index));
                }
            }
            Action::Search => return self.search(now),
            Action::RemoveTag => {
                if self.focus == Focus::Tags {
                    self.remove_selected_tag();
                }
            }
            Action::FocusInput => self.focus = Focus::Input,
            Action::OpenImage => {
                if let Some(url) = self.current_image() {
                    return Command::OpenImage(url);
                }
            }
            Action::Help => self.show_help = true,
            Action::ToggleTheme => {
                self.controller.toggle_theme();
            }
            Action::None => {}
        }

        Command::None
    }

    fn handle_input_key(&mut self, key: KeyEvent, bindings: &KeybindingConfig, now: Instant) -> Command {
        match key.code {
            KeyCode::Enter => self.commit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.focus = Focus::Tags,
            KeyCode::Char(c) if !has_command_modifier(&key) => self.input.push(c),
            _ => match bindings.get_action(&key) {
                Action::Quit => self.should_quit = true,
                Action::Search => return self.search(now),
                Action::NextPane => self.focus = self.focus.next(),
                Action::PrevPane => self.focus = self.focus.prev(),
                _ => {}
            },
        }
        Command::None
    }

    /// Move the text in the input box into the ingredient set. The box is
    /// only cleared when the ingredient was actually added.
    pub fn commit_input(&mut self) {
        if self.controller.add_ingredient(&self.input) {
            self.input.clear();
            self.tag_index = self.controller.ingredients().len() - 1;
        }
    }

    /// Submit a search, taking along anything still typed in the input box.
    pub fn search(&mut self, now: Instant) -> Command {
        self.commit_input();
        match self.controller.begin_search(now) {
            Some(ticket) => {
                self.result_index = 0;
                self.result_list_state.select(None);
                self.detail_scroll = 0;
                self.focus = Focus::Results;
                Command::Search(ticket)
            }
            None => Command::None,
        }
    }

    pub fn remove_selected_tag(&mut self) {
        if self.controller.remove_ingredient(self.tag_index).is_some() {
            let len = self.controller.ingredients().len();
            if self.tag_index >= len {
                self.tag_index = len.saturating_sub(1);
            }
        }
    }

    pub fn apply_fetch(&mut self, event: FetchEvent, now: Instant) {
        match event {
            FetchEvent::Search { generation, outcome } => {
                if self.controller.finish_search(generation, outcome, now)
                    && self.controller.results_visible()
                {
                    self.result_index = 0;
                    self.result_list_state.select(Some(0));
                }
            }
            FetchEvent::Detail { generation, outcome } => {
                if self.controller.finish_detail(generation, outcome, now) {
                    self.detail_scroll = 0;
                }
            }
        }
    }

    fn current_image(&self) -> Option<String> {
        if let Some(detail) = self.controller.detail() {
            return detail.image_url.clone();
        }
        if self.controller.results_visible() {
            return self
                .controller
                .results()
                .get(self.result_index)
                .map(|r| r.image_url.clone());
        }
        None
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Input => {}
            Focus::Tags => self.tag_index = self.tag_index.saturating_sub(1),
            Focus::Results => {
                if self.controller.detail_visible() {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                } else if self.result_index > 0 {
                    self.result_index -= 1;
                    self.result_list_state.select(Some(self.result_index));
                }
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Input => {}
            Focus::Tags => {
                let len = self.controller.ingredients().len();
                if self.tag_index + 1 < len {
                    self.tag_index += 1;
                }
            }
            Focus::Results => {
                if self.controller.detail_visible() {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                } else if self.result_index + 1 < self.controller.results().len() {
                    self.result_index += 1;
                    self.result_list_state.select(Some(self.result_index));
                }
            }
        }
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
