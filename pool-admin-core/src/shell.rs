//! Shell chrome: sidebar, dropdown menus and the profile menu

use crate::error::{ConsoleError, ConsoleResult};

/// Sidebar open/closed state relative to a layout breakpoint.
///
/// Widths are in whatever unit the front end lays out in (terminal
/// columns for the TUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
    width: u16,
    breakpoint: u16,
}

impl Sidebar {
    /// Open on wide layouts, closed on narrow ones
    pub fn new(width: u16, breakpoint: u16) -> Self {
        Self {
            open: width >= breakpoint,
            width,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_narrow(&self) -> bool {
        self.width < self.breakpoint
    }

    pub fn breakpoint(&self) -> u16 {
        self.breakpoint
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// The dimming overlay covers the content only on narrow layouts
    pub fn overlay_visible(&self) -> bool {
        self.open && self.is_narrow()
    }

    /// Content is pushed aside only on wide layouts
    pub fn content_inset(&self) -> bool {
        self.open && !self.is_narrow()
    }

    /// Overlay click; ignored on wide layouts
    pub fn click_overlay(&mut self) {
        if self.is_narrow() {
            self.open = false;
        }
    }

    /// Re-evaluate against a new width; the open flag is kept
    pub fn resize(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_breakpoint(&mut self, breakpoint: u16) {
        self.breakpoint = breakpoint;
    }
}

/// Named dropdowns of which at most one is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownSet {
    names: Vec<String>,
    expanded: Option<usize>,
}

impl DropdownSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            expanded: None,
        }
    }

    /// Toggle one dropdown, closing every other; returns its new state
    pub fn toggle(&mut self, name: &str) -> ConsoleResult<bool> {
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| ConsoleError::RecordNotFound(format!("dropdown {name}")))?;

        if self.expanded == Some(index) {
            self.expanded = None;
            Ok(false)
        } else {
            self.expanded = Some(index);
            Ok(true)
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded
            .and_then(|i| self.names.get(i))
            .is_some_and(|n| n == name)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// Escape key and clicks outside any dropdown
    pub fn close_all(&mut self) {
        self.expanded = None;
    }
}

/// Result of a profile menu action the shell must act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Return to the landing page
    SignedOut,
}

/// Profile menu in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileMenu {
    open: bool,
}

impl ProfileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close button, Escape and outside clicks
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn sign_out(&mut self) -> ShellEvent {
        self.open = false;
        ShellEvent::SignedOut
    }
}
