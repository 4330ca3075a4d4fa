// Tab selection state machine
//
// Two positions are tracked independently, following the roving-focus tabs
// pattern: which tab is *active* (its panel is shown) and which tab button
// holds keyboard *focus*. Arrow keys move focus only; activation is a
// separate click / Enter.
//
// Tab i, panel i and record i correspond by position. Reordering the records
// reassigns tab identity.

/// Keyboard commands understood by a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    /// Move focus one tab back (wraps to last)
    FocusPrev,
    /// Move focus one tab forward (wraps to first)
    FocusNext,
    FocusFirst,
    FocusLast,
    /// Activate the focused tab
    Activate,
}

/// Active + focused tab positions over a strip of `len` tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelectionState {
    len: usize,
    active: usize,
    focus: Option<usize>,
}

impl TabSelectionState {
    /// Fresh state at mount: first tab active, nothing focused
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            focus: None,
        }
    }

    /// Active tab, `None` only for an empty strip
    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    /// Select a tab (pointer click)
    ///
    /// The index always comes from enumerating the same list, so an
    /// out-of-range value is a caller bug. Debug builds assert; release
    /// builds ignore the call so the active index stays valid.
    ///
    /// Returns whether the active tab changed. Reselecting the active tab
    /// is a no-op.
    pub fn select(&mut self, index: usize) -> bool {
        debug_assert!(index < self.len, "tab index {index} out of range");
        if index >= self.len {
            tracing::warn!("Ignoring selection of tab {} (only {})", index, self.len);
            return false;
        }

        // A click also focuses the clicked button
        self.focus = Some(index);
        if self.active == index {
            return false;
        }
        self.active = index;
        true
    }

    /// Move keyboard focus by `delta` (+1 / -1) with wraparound
    ///
    /// Past the end wraps to the first tab, before the start wraps to the
    /// last. Focus starts from the active tab when nothing is focused yet.
    /// Returns the tab that should now hold focus.
    pub fn move_focus(&mut self, delta: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        let base = self.focus.unwrap_or(self.active) as isize;
        let next = base + delta;
        let next = if next >= self.len as isize {
            0
        } else if next < 0 {
            self.len - 1
        } else {
            next as usize
        };

        self.focus = Some(next);
        Some(next)
    }

    /// Jump focus to an end of the strip
    pub fn focus_edge(&mut self, last: bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let index = if last { self.len - 1 } else { 0 };
        self.focus = Some(index);
        Some(index)
    }

    /// Activate whatever holds focus (Enter / Space)
    pub fn activate_focused(&mut self) -> bool {
        match self.focus {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Apply a keyboard command, returns whether the active tab changed
    pub fn apply(&mut self, command: TabCommand) -> bool {
        match command {
            TabCommand::FocusPrev => {
                self.move_focus(-1);
                false
            }
            TabCommand::FocusNext => {
                self.move_focus(1);
                false
            }
            TabCommand::FocusFirst => {
                self.focus_edge(false);
                false
            }
            TabCommand::FocusLast => {
                self.focus_edge(true);
                false
            }
            TabCommand::Activate => self.activate_focused(),
        }
    }
}
