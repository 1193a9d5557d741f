//! linq-stream - lazy sequence operators over task-per-stage transports
//!
//! Every producer and transform runs as its own tokio task and hands values to
//! the next stage through a single-slot [`Transport`]. Chains are built by
//! passing one operator's output to the next, and are finished by one of the
//! aggregators in [`aggregate`].
//!
//! ```
//! use linq_stream::{fibonaccis, take, to_vec};
//!
//! # tokio_test::block_on(async {
//! let fibs = to_vec(take(fibonaccis(), 10)).await;
//! assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
//! # });
//! ```

pub mod aggregate;
pub mod display;
pub mod error;
pub mod pipe;
pub mod producers;
mod stage;
pub mod stream_configuration;
pub mod transforms;
pub mod transport;
pub mod transport_ext;

pub use aggregate::{
    count, count_with_timeout, count_within, first, last, max, sum, to_vec, try_count_within,
    try_first, try_last, try_max, TIMED_OUT,
};
pub use error::{SeqError, SeqResult};
pub use producers::{empty, fibonaccis, fibonaccis_with, from_iter, from_iter_with, unfold, unfold_with};
pub use stream_configuration::{TimeoutConfig, TransportConfig};
pub use transforms::{filter, map, skip, take, zip};
pub use transport::{transport, transport_with, Outlet, Transport, TransportStats};
pub use transport_ext::TransportExt;
