//! Cooperative progress spinner for in-flight requests.
//!
//! One spinner runs alongside each network request, redrawing a
//! rotating character over the same terminal line. Cancellation is
//! race-free: `finish` aborts the task and awaits the aborted handle
//! before printing the done line, so no further frame can appear.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::terminal::palette;

const FRAMES: [char; 4] = ['-', '\\', '|', '/'];
const REDRAW_INTERVAL: Duration = Duration::from_millis(300);

pub struct Spinner {
    label: String,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start redrawing `label` with a rotating frame. Frames are
    /// suppressed when stdout is not a terminal; the done line from
    /// [`finish`](Self::finish) is printed either way.
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        let handle = if io::stdout().is_terminal() {
            let text = label.clone();
            Some(tokio::spawn(async move {
                let p = palette();
                let mut index = 0usize;
                loop {
                    print!(
                        "{} {} {} {}\r",
                        p.bold_yellow,
                        text,
                        FRAMES[index % FRAMES.len()],
                        p.reset
                    );
                    let _ = io::stdout().flush();
                    index += 1;
                    tokio::time::sleep(REDRAW_INTERVAL).await;
                }
            }))
        } else {
            None
        };
        Self { label, handle }
    }

    /// Stop the spinner and print the one-time done message.
    pub async fn finish(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
        let p = palette();
        println!("{} {} done {}", p.bold, self.label, p.reset);
    }
}
