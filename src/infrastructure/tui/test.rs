use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit/suspend are no-ops (no raw mode / alternate screen).
/// - next() returns events from an internal queue (non-blocking, immediate).
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// Expose draw count for tests.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    /// Enqueue a single event for tests.
    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn buffer
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn screen as one string per row
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> Result<Rect> {
        Ok(self.term.backend().buffer().area)
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn test_draw_counts_and_captures() {
        let mut tui = TestTui::new(10, 2).unwrap();
        tui.draw(&mut |f: &mut Frame<'_>| {
            f.render_widget(Paragraph::new("hello"), f.area());
        })
        .unwrap();

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines()[0], "hello     ");
    }

    #[tokio::test]
    async fn test_events_are_queued() {
        let mut tui = TestTui::with_events(10, 2, vec![Event::Tick]).unwrap();
        tui.enqueue_event(Event::Quit);
        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(matches!(tui.next().await, Some(Event::Quit)));
        assert!(tui.next().await.is_none());
    }

    #[test]
    fn test_size_follows_resize() {
        let mut tui = TestTui::new(10, 2).unwrap();
        tui.resize(Rect::new(0, 0, 40, 12)).unwrap();
        assert_eq!(tui.size().unwrap(), Rect::new(0, 0, 40, 12));
    }
}
