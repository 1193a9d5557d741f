//! Single-slot transport connecting two stages
//!
//! A transport is split into an [`Outlet`], owned by the stage that created it,
//! and a [`Transport`], handed to whoever consumes the stage's output. The
//! receiving half also implements `futures_core::Stream`.

use futures_core::Stream;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

use crate::error::{SeqError, SeqResult};
use crate::stream_configuration::TransportConfig;

/// Create a connected outlet/transport pair with the default single-slot capacity
pub fn transport<T>() -> (Outlet<T>, Transport<T>) {
    transport_with(&TransportConfig::default())
}

/// Create a connected outlet/transport pair with the given configuration
pub fn transport_with<T>(config: &TransportConfig) -> (Outlet<T>, Transport<T>) {
    // tokio rejects zero-capacity channels
    let capacity = config.capacity.max(1);
    let (sender, receiver) = mpsc::channel(capacity);
    (
        Outlet { sender },
        Transport {
            receiver: Some(receiver),
            capacity,
            closed: false,
        },
    )
}

/// Sending half of a transport. Only the stage that created it may send or close.
pub struct Outlet<T> {
    sender: mpsc::Sender<T>,
}

impl<T> Outlet<T> {
    /// Hand a value to the consumer, waiting for a free slot.
    ///
    /// Fails with [`SeqError::Disconnected`] once the consumer has dropped or
    /// closed its end; the value is discarded.
    pub async fn send(&self, item: T) -> SeqResult<()> {
        self.sender
            .send(item)
            .await
            .map_err(|_| SeqError::Disconnected)
    }

    /// Resolves once the consumer has gone away
    pub async fn closed(&self) {
        self.sender.closed().await
    }

    pub fn is_disconnected(&self) -> bool {
        self.sender.is_closed()
    }

    /// Signal end-of-stream. Consuming `self` makes a second close impossible.
    pub fn close(self) {
        drop(self);
    }
}

impl<T> fmt::Debug for Outlet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outlet")
            .field("capacity", &self.sender.max_capacity())
            .field("disconnected", &self.sender.is_closed())
            .finish()
    }
}

/// Receiving half of a transport, or the absent stream.
pub struct Transport<T> {
    receiver: Option<mpsc::Receiver<T>>,
    capacity: usize,
    closed: bool,
}

impl<T> Transport<T> {
    /// The "no stream" value. Operators given it return it without spawning a stage.
    pub fn absent() -> Self {
        Self {
            receiver: None,
            capacity: TransportConfig::default().capacity,
            closed: true,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.receiver.is_none()
    }

    /// Receive the next value, or `None` once the transport is closed and drained.
    /// An absent transport is always drained.
    pub async fn recv(&mut self) -> Option<T> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.recv().await,
            None => None,
        }
    }

    /// Close the transport from the consuming side.
    ///
    /// Values already in the slot can still be received. The producing stage's
    /// next send fails and it stops. Closing again has no effect.
    pub fn close(&mut self) {
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.close();
        }
        self.closed = true;
    }

    /// True once no further value can arrive beyond what is buffered
    pub fn is_closed(&self) -> bool {
        match self.receiver.as_ref() {
            Some(receiver) => self.closed || receiver.is_closed(),
            None => true,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configuration for transports created downstream of this one
    pub fn config(&self) -> TransportConfig {
        TransportConfig {
            capacity: self.capacity,
        }
    }

    /// Number of values sitting in the slot
    pub fn buffered(&self) -> usize {
        self.receiver.as_ref().map_or(0, |receiver| receiver.len())
    }

    pub fn stats(&self) -> TransportStats {
        TransportStats {
            capacity: self.capacity,
            buffered: self.buffered(),
            is_closed: self.is_closed(),
            is_absent: self.is_absent(),
        }
    }
}

impl<T> Stream for Transport<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.poll_recv(cx),
            None => Poll::Ready(None),
        }
    }
}

impl<T> fmt::Debug for Transport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("capacity", &self.capacity)
            .field("buffered", &self.buffered())
            .field("is_closed", &self.is_closed())
            .field("is_absent", &self.is_absent())
            .finish()
    }
}

/// Transport statistics for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportStats {
    pub capacity: usize,
    pub buffered: usize,
    pub is_closed: bool,
    pub is_absent: bool,
}

impl fmt::Display for TransportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent {
            return write!(f, "Transport(absent)");
        }
        write!(
            f,
            "Transport({}/{}{})",
            self.buffered,
            self.capacity,
            if self.is_closed { ", closed" } else { "" }
        )
    }
}
