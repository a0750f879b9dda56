//! Event observer trait and the single-pass replay driver.

use fa_core::FreightEvent;

use crate::AnalysisResult;

/// A consumer of the freight event stream.
///
/// Each observer owns its state exclusively; two observers never share
/// mutable data, so they can be replayed independently.
///
/// # Example: event counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl EventObserver for Counter {
///     fn observe(&mut self, _event: &FreightEvent) -> AnalysisResult<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait EventObserver {
    /// Consume one event.  Kinds the observer does not track are a no-op.
    fn observe(&mut self, event: &FreightEvent) -> AnalysisResult<()>;

    /// Called once after the last event of a complete replay.
    fn on_stream_end(&mut self) {}
}

/// Feed every event to `observer` in stream order, stopping at the first
/// error.  Returns the number of events consumed.
///
/// The stream is not re-sorted: non-decreasing time order is a precondition
/// of the source.
pub fn replay<'e, O, I>(events: I, observer: &mut O) -> AnalysisResult<usize>
where
    O: EventObserver + ?Sized,
    I: IntoIterator<Item = &'e FreightEvent>,
{
    let mut count = 0;
    for event in events {
        observer.observe(event)?;
        count += 1;
    }
    observer.on_stream_end();
    Ok(count)
}
