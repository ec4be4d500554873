use crossterm::event::{poll, Event, KeyEvent};
use tokio::time::Duration;

/// Non-blocking bridge between crossterm events and the app loop.
///
/// Terminal events are polled without blocking; when none are pending the
/// handler sleeps briefly and reports a tick so background actions get a
/// chance to drain.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
