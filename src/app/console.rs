use anyhow::Result;

use crate::domain::EventRecord;

use super::{options::UiOptions, runtime::App};

/// Full-screen console entry point.
///
/// ```no_run
/// use eventdesk::{EventConsole, UiOptions};
///
/// # fn main() -> anyhow::Result<()> {
/// let events = EventConsole::new(Vec::new())
///     .with_options(UiOptions::default())
///     .run()?;
/// println!("{} events committed", events.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventConsole {
    events: Vec<EventRecord>,
    options: UiOptions,
}

impl EventConsole {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events,
            options: UiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the interactive session and hands back the committed event list
    /// once the user quits. Cancelled drafts never appear in the result.
    pub fn run(self) -> Result<Vec<EventRecord>> {
        App::new(self.events, self.options).run()
    }
}
