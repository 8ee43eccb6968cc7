//! Hosts a [`RotatingSelector`] on the tokio runtime.
//!
//! The selector lives inside its own task, which sleeps until the next
//! automatic advance and wakes early for navigation commands. Page changes
//! are published on a `watch` channel. The returned [`DriverHandle`] owns
//! the task: unmounting or dropping it aborts the task, so no timer can fire
//! afterwards.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::error::{DriverError, SelectorError};
use crate::selector::RotatingSelector;

/// What a hosted selector publishes after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_count: usize,
    pub auto_advancing: bool,
}

impl<T> From<&RotatingSelector<T>> for PageState {
    fn from(selector: &RotatingSelector<T>) -> Self {
        Self {
            current_page: selector.current_page(),
            page_count: selector.page_count(),
            auto_advancing: selector.is_auto_advancing(),
        }
    }
}

#[derive(Debug)]
enum Command {
    Advance,
    Retreat,
    JumpTo(usize),
    ToggleAutoAdvance,
    Pause,
    Resume,
}

type Reply = oneshot::Sender<Result<PageState, SelectorError>>;

pub struct DriverHandle {
    commands: mpsc::UnboundedSender<(Command, Reply)>,
    pages: watch::Receiver<PageState>,
    task: JoinHandle<()>,
}

/// Moves `selector` into a new task and starts its auto-advance timer.
///
/// Must be called from within a tokio runtime.
pub fn spawn<T>(name: &'static str, selector: RotatingSelector<T>) -> DriverHandle
where
    T: Send + 'static,
{
    let (commands, receiver) = mpsc::unbounded_channel();
    let (publisher, pages) = watch::channel(PageState::from(&selector));
    let task = tokio::spawn(run(name, selector, receiver, publisher));
    info!(name, "selector mounted");
    DriverHandle { commands, pages, task }
}

impl DriverHandle {
    pub async fn advance(&self) -> Result<PageState, DriverError> {
        self.send(Command::Advance).await
    }

    pub async fn retreat(&self) -> Result<PageState, DriverError> {
        self.send(Command::Retreat).await
    }

    pub async fn jump_to(&self, index: usize) -> Result<PageState, DriverError> {
        self.send(Command::JumpTo(index)).await
    }

    pub async fn toggle_auto_advance(&self) -> Result<PageState, DriverError> {
        self.send(Command::ToggleAutoAdvance).await
    }

    /// Stops auto-advance. The pending timer is cancelled before this returns.
    pub async fn pause(&self) -> Result<PageState, DriverError> {
        self.send(Command::Pause).await
    }

    pub async fn resume(&self) -> Result<PageState, DriverError> {
        self.send(Command::Resume).await
    }

    /// The latest published state.
    pub fn snapshot(&self) -> PageState {
        *self.pages.borrow()
    }

    /// A receiver that wakes on every page or auto-advance change from now on.
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        let mut pages = self.pages.clone();
        pages.mark_unchanged();
        pages
    }

    /// Cancels the selector task and waits until it is gone.
    pub async fn unmount(mut self) {
        self.task.abort();
        // Aborted tasks resolve with a cancellation error; nothing to report
        let _ = (&mut self.task).await;
        debug!("selector unmounted");
    }

    async fn send(&self, command: Command) -> Result<PageState, DriverError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send((command, reply))
            .map_err(|_| DriverError::Closed)?;
        let state = response.await.map_err(|_| DriverError::Closed)??;
        Ok(state)
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T>(
    name: &'static str,
    mut selector: RotatingSelector<T>,
    mut commands: mpsc::UnboundedReceiver<(Command, Reply)>,
    publisher: watch::Sender<PageState>,
) {
    let mut last = Instant::now();

    loop {
        let wait = selector.time_until_advance();

        tokio::select! {
            received = commands.recv() => {
                let Some((command, reply)) = received else {
                    break;
                };

                // A firing that fell due before the command still happens first
                let now = Instant::now();
                selector.tick(now - last);
                last = now;

                let result = apply(&mut selector, command).map(|()| PageState::from(&selector));
                publish(&publisher, &selector);
                // The caller may have given up waiting; the command still applied
                let _ = reply.send(result);
            }
            () = sleep(wait.unwrap_or_default()), if wait.is_some() => {
                let now = Instant::now();
                let fired = selector.tick(now - last);
                last = now;
                if fired > 0 {
                    debug!(name, page = selector.current_page(), "auto-advance");
                }
                publish(&publisher, &selector);
            }
        }
    }

    debug!(name, "selector task finished");
}

fn apply<T>(selector: &mut RotatingSelector<T>, command: Command) -> Result<(), SelectorError> {
    match command {
        Command::Advance => selector.advance(),
        Command::Retreat => selector.retreat(),
        Command::JumpTo(index) => selector.jump_to(index)?,
        Command::ToggleAutoAdvance => selector.toggle_auto_advance(),
        Command::Pause => selector.pause(),
        Command::Resume => selector.resume(),
    }
    Ok(())
}

fn publish<T>(publisher: &watch::Sender<PageState>, selector: &RotatingSelector<T>) {
    let state = PageState::from(selector);
    publisher.send_if_modified(|current| {
        if *current == state {
            return false;
        }
        *current = state;
        true
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::{Instant, sleep};

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(4000);

    fn services() -> RotatingSelector<u32> {
        RotatingSelector::new((0..8).collect(), 2, INTERVAL).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advances_every_interval() {
        let handle = spawn("test", services());
        let mut pages = handle.subscribe();
        let start = Instant::now();

        pages.changed().await.unwrap();
        assert_eq!(pages.borrow_and_update().current_page, 1);
        assert_eq!(start.elapsed(), INTERVAL);

        pages.changed().await.unwrap();
        assert_eq!(pages.borrow_and_update().current_page, 2);
        assert_eq!(start.elapsed(), INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_advance_pushes_next_auto_advance_back() {
        let handle = spawn("test", services());
        let start = Instant::now();

        sleep(Duration::from_millis(3000)).await;
        let state = handle.advance().await.unwrap();
        assert_eq!(state.current_page, 1);

        let mut pages = handle.subscribe();
        pages.changed().await.unwrap();
        assert_eq!(pages.borrow_and_update().current_page, 2);
        assert_eq!(start.elapsed(), Duration::from_millis(7000));
    }

    #[tokio::test(start_paused = true)]
    async fn jump_to_reports_invalid_index() {
        let handle = spawn("test", services());
        assert_eq!(
            handle.jump_to(4).await,
            Err(DriverError::Selector(SelectorError::InvalidIndex { index: 4, page_count: 4 }))
        );
        assert_eq!(handle.jump_to(3).await.unwrap().current_page, 3);
        assert_eq!(handle.retreat().await.unwrap().current_page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_selector_stays_put() {
        let handle = spawn("test", services());
        let first = handle.pause().await.unwrap();
        let second = handle.pause().await.unwrap();
        assert!(!first.auto_advancing);
        assert_eq!(first, second);

        sleep(Duration::from_secs(60)).await;
        assert_eq!(handle.snapshot().current_page, 0);

        let resumed = handle.toggle_auto_advance().await.unwrap();
        assert!(resumed.auto_advancing);
        let mut pages = handle.subscribe();
        pages.changed().await.unwrap();
        assert_eq!(pages.borrow_and_update().current_page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_stops_the_timer() {
        let handle = spawn("test", services());
        let pages = handle.subscribe();
        handle.unmount().await;

        sleep(Duration::from_secs(60)).await;
        assert_eq!(pages.borrow().current_page, 0);
        assert!(pages.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_stops_the_timer() {
        let handle = spawn("test", services());
        let pages = handle.subscribe();
        drop(handle);

        sleep(Duration::from_secs(60)).await;
        assert_eq!(pages.borrow().current_page, 0);
    }
}
