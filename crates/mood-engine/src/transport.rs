//! In-process byte transport between the server loop and client tasks.

use mood_protocol::{Transport, TransportError};
use mood_types::ObserverId;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Frames addressed to a server from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Sending client.
    pub observer: ObserverId,
    /// Encoded frame.
    pub frame: Vec<u8>,
}

/// Server-to-client [`Transport`] backed by an unbounded tokio channel.
///
/// Sending never blocks. Once the client drops its receiver every send
/// fails with [`TransportError::Disconnected`].
#[derive(Debug, Clone)]
pub struct MpscTransport {
    tx: UnboundedSender<Vec<u8>>,
}

impl MpscTransport {
    /// Create a transport and the receiver a client reads frames from.
    pub fn pair() -> (Self, UnboundedReceiver<Vec<u8>>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Transport for MpscTransport {
    fn send(&self, observer: ObserverId, bytes: Vec<u8>) -> Result<(), TransportError> {
        self.tx
            .send(bytes)
            .map_err(|_closed| TransportError::Disconnected(observer))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_in_order() {
        let (transport, mut rx) = MpscTransport::pair();
        let observer = ObserverId::new();
        transport.send(observer, vec![1]).unwrap();
        transport.send(observer, vec![2, 2]).unwrap();
        assert_eq!(rx.recv().await, Some(vec![1]));
        assert_eq!(rx.recv().await, Some(vec![2, 2]));
    }

    #[tokio::test]
    async fn dropped_receiver_is_disconnected() {
        let (transport, rx) = MpscTransport::pair();
        drop(rx);
        let observer = ObserverId::new();
        assert!(matches!(
            transport.send(observer, vec![0]),
            Err(TransportError::Disconnected(o)) if o == observer
        ));
    }
}
