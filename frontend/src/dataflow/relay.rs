//! Event streaming Relay
//!
//! Relays carry UI events (clicks, scroll samples, visibility reports) to the
//! Actor that owns the affected state, over unbounded `futures` channels.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Typed event sender paired with the receiving stream of one Actor.
///
/// Relays are named after the event source: `{source}_{event}_relay`, e.g.
/// `theme_toggle_clicked_relay` or `page_scrolled_relay`.
///
/// In debug builds a relay remembers the first source location that sent
/// through it and panics if another location does, keeping every event
/// traceable to one emitter.
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[derive(Debug, Clone)]
pub enum RelayError {
    /// Receiver dropped, usually because the owning Actor was torn down
    ChannelClosed,
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.get() {
            None => {
                let _ = self.emit_location.set(caller);
                Ok(())
            }
            Some(previous) if *previous == caller => Ok(()),
            Some(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Sends an event. Events sent after the receiver is gone are dropped.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{error:?}");
        }

        let _ = self.sender.unbounded_send(value);
    }

    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Disconnected relay; everything sent through it is discarded.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_delivers_in_order() {
        let (page_scrolled_relay, mut page_scrolled_stream) = relay::<f64>();

        for offset in [10.0, 250.0, 120.0] {
            page_scrolled_relay.send(offset);
        }

        assert_eq!(page_scrolled_stream.next().await, Some(10.0));
        assert_eq!(page_scrolled_stream.next().await, Some(250.0));
        assert_eq!(page_scrolled_stream.next().await, Some(120.0));
    }

    #[tokio::test]
    async fn test_try_send_reports_closed_channel() {
        let (relay, mut receiver) = Relay::new();
        let emit = |value: &str| relay.try_send(value.to_string());

        assert!(emit("open").is_ok());
        assert_eq!(receiver.next().await, Some("open".to_string()));

        drop(receiver);
        assert!(matches!(emit("closed"), Err(RelayError::ChannelClosed)));
    }

    #[test]
    fn test_default_relay_discards_events() {
        let relay: Relay = Relay::default();
        assert!(matches!(relay.try_send(()), Err(RelayError::ChannelClosed)));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn test_second_emitter_location_panics() {
        let (relay, _receiver) = relay::<u8>();
        relay.send(1);
        relay.send(2);
    }
}
