use crate::{
    core::{cmd::Cmd, msg::faq::FaqMsg},
    domain::{carousel::Direction, faq::FaqEntry},
};

/// FAQ accordion: at most one entry expanded
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    entries: Vec<FaqEntry>,
    expanded: Option<usize>,
    cursor: usize,
}

impl FaqState {
    /// The first entry starts expanded
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let expanded = (!entries.is_empty()).then_some(0);
        Self {
            entries,
            expanded,
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn update(&mut self, msg: FaqMsg) -> Vec<Cmd> {
        match msg {
            FaqMsg::QuestionActivated(index) => self.toggle(index),
            FaqMsg::CursorMoved(direction) => self.move_cursor(direction),
        }
        vec![]
    }

    fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.cursor = index;
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    fn move_cursor(&mut self, direction: Direction) {
        let last = self.entries.len().saturating_sub(1);
        self.cursor = match direction {
            Direction::Previous => self.cursor.saturating_sub(1),
            Direction::Next => (self.cursor + 1).min(last),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn faq() -> FaqState {
        FaqState::new(vec![
            FaqEntry::new("q1", "a1"),
            FaqEntry::new("q2", "a2"),
            FaqEntry::new("q3", "a3"),
        ])
    }

    #[test]
    fn test_first_expanded_by_default() {
        assert_eq!(faq().expanded(), Some(0));
        assert_eq!(FaqState::new(vec![]).expanded(), None);
    }

    #[test]
    fn test_activating_collapses_others() {
        let mut state = faq();
        state.update(FaqMsg::QuestionActivated(2));
        assert_eq!(state.expanded(), Some(2));
        assert!(!state.is_expanded(0));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_activating_expanded_collapses_it() {
        let mut state = faq();
        state.update(FaqMsg::QuestionActivated(0));
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = faq();
        state.update(FaqMsg::QuestionActivated(9));
        assert_eq!(state.expanded(), Some(0));
    }

    #[test]
    fn test_cursor_does_not_wrap() {
        let mut state = faq();
        state.update(FaqMsg::CursorMoved(Direction::Previous));
        assert_eq!(state.cursor(), 0);
        for _ in 0..5 {
            state.update(FaqMsg::CursorMoved(Direction::Next));
        }
        assert_eq!(state.cursor(), 2);
    }
}
