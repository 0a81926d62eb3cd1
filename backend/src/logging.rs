//! Injectable logging handle.
//!
//! Components that emit diagnostics take a [`Logger`] instead of relying on
//! whichever subscriber happens to be installed when they run. Production
//! wiring captures the process subscriber with [`Logger::current`]; tests
//! pass [`Logger::noop`] or a logger over their own subscriber.

use tracing::Dispatch;

/// Handle over a `tracing` dispatcher.
#[derive(Clone, Debug)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Capture the dispatcher active on the calling thread.
    pub fn current() -> Self {
        Self {
            dispatch: Dispatch::default(),
        }
    }

    /// Logger that discards every event.
    pub fn noop() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Run `f` with this logger's dispatcher as the default, so `tracing`
    /// macros inside it reach the captured subscriber.
    ///
    /// # Examples
    /// ```
    /// use bookshop::logging::Logger;
    ///
    /// let answer = Logger::noop().in_scope(|| {
    ///     tracing::warn!("discarded");
    ///     42
    /// });
    /// assert_eq!(answer, 42);
    /// ```
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::current()
    }
}

impl From<Dispatch> for Logger {
    fn from(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}


#[cfg(test)]
mod tests {
    use super::capture::RecordingSubscriber;
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scoped_events_reach_the_captured_subscriber() {
        let recorder = RecordingSubscriber::default();
        let logger = recorder.logger();

        logger.in_scope(|| tracing::warn!(book_id = "b-1", "title casing skipped"));

        let events = recorder.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, "WARN");
        assert_eq!(events[0].field("book_id"), Some("b-1"));
        assert_eq!(events[0].field("message"), Some("title casing skipped"));
    }

    #[rstest]
    fn noop_logger_still_runs_the_closure() {
        let recorder = RecordingSubscriber::default();
        let value = recorder
            .logger()
            .in_scope(|| Logger::noop().in_scope(|| {
                tracing::error!("dropped");
                7
            }));

        assert_eq!(value, 7);
        assert!(recorder.events().is_empty());
    }
}
