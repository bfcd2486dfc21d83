use super::command::{perform, Command, Update};
use crate::api::DashboardApi;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs commands on the blocking pool and posts each result back to the
/// UI loop.
///
/// Nothing is awaited or cancelled. Two refreshes of the same resource may
/// finish in either order; whichever is delivered last is what the model
/// keeps.
pub struct Dispatcher<E> {
    api: Arc<dyn DashboardApi>,
    tx: mpsc::UnboundedSender<E>,
}

impl<E> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            tx: self.tx.clone(),
        }
    }
}

impl<E> Dispatcher<E>
where
    E: From<Update> + Send + 'static,
{
    pub fn new(api: Arc<dyn DashboardApi>, tx: mpsc::UnboundedSender<E>) -> Self {
        Self { api, tx }
    }

    pub fn execute(&self, command: Command) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::debug!(command = %command.describe(), "dispatching");
        tokio::task::spawn_blocking(move || {
            let update = perform(api.as_ref(), command);
            // A closed channel means the UI is shutting down.
            let _ = tx.send(E::from(update));
        });
    }

    pub fn execute_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.execute(command);
        }
    }
}
