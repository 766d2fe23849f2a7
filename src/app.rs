use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as CellPosition, Rect};
use std::path::PathBuf;
use std::time::Instant;

use crate::config;
use crate::markup::Node;
use crate::theme::Theme;
use crate::tooltip::{self, Position, TooltipConfig};

/// How long a status message stays in the info line
const STATUS_SECONDS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

pub struct App {
    pub config: TooltipConfig,
    pub theme: Theme,
    pub popup: Popup,

    // Reveal state: the overlay shows while either is set
    pub hovered: bool,
    pub focused: bool,

    /// Where the trigger was last drawn, for mouse hit-testing
    pub trigger_area: Option<Rect>,

    /// Rendered markup of the current config, refreshed on change
    pub markup: String,

    /// Where `s` writes the config
    pub save_path: Option<PathBuf>,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: TooltipConfig, save_path: Option<PathBuf>) -> Self {
        let theme = Theme::for_config(&config);
        let markup = tooltip::render(&config).to_html();
        Self {
            config,
            theme,
            popup: Popup::None,
            hovered: false,
            focused: false,
            trigger_area: None,
            markup,
            save_path,
            status_message: None,
            status_message_time: None,
        }
    }

    /// Overlay visibility, mirroring the stylesheet's hover/focus-within rule
    pub fn overlay_visible(&self) -> bool {
        self.hovered || self.focused
    }

    /// Label drawn for the trigger in the terminal
    pub fn trigger_label(&self) -> String {
        match &self.config.trigger {
            Some(node) => {
                let text = node.text_content();
                let text = text.trim();
                if text.is_empty() { "[trigger]".to_string() } else { text.to_string() }
            }
            None => "ⓘ".to_string(),
        }
    }

    /// Overlay text lines: content first, then the overlay element's text
    pub fn overlay_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        if let Some(text) = self.config.content.as_deref().filter(|t| !t.is_empty()) {
            lines.extend(text.lines().map(str::to_string));
        }
        if let Some(el) = self.config.overlay_element.as_ref().map(Node::text_content) {
            lines.extend(el.lines().map(str::to_string));
        }
        lines
    }

    /// Set a status message (auto-clears after a few seconds)
    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    fn set_position(&mut self, position: Position) {
        if self.config.position == position {
            return;
        }
        tracing::debug!("Position {} -> {}", self.config.position, position);
        self.config.position = position;
        self.markup = tooltip::render(&self.config).to_html();
        self.set_status(format!("Position: {}", position));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup != Popup::None {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.popup = Popup::None;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused = !self.focused;
            }
            KeyCode::Up | KeyCode::Char('k') => self.set_position(Position::Top),
            KeyCode::Down | KeyCode::Char('j') => self.set_position(Position::Bottom),
            KeyCode::Left | KeyCode::Char('h') => self.set_position(Position::Left),
            KeyCode::Right | KeyCode::Char('l') => self.set_position(Position::Right),
            KeyCode::Char('?') => self.popup = Popup::Help,
            KeyCode::Char('s') => self.save()?,
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let over_trigger = self
            .trigger_area
            .map(|r| r.contains(CellPosition::new(mouse.column, mouse.row)))
            .unwrap_or(false);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hovered = over_trigger,
            // Clicking focuses the trigger, clicking elsewhere blurs it
            MouseEventKind::Down(MouseButton::Left) => {
                self.hovered = over_trigger;
                self.focused = over_trigger;
            }
            _ => {}
        }
    }

    fn save(&mut self) -> Result<()> {
        let path = match &self.save_path {
            Some(p) => p.clone(),
            None => config::default_path()?,
        };
        config::save(&self.config, &path)?;
        tracing::info!("Saved tooltip config to {}", path.display());
        self.set_status(format!("Saved {}", path.display()));
        Ok(())
    }

    pub fn tick(&mut self) {
        // Clear status message after timeout
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_SECONDS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
