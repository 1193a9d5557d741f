//! Producers: stages that start a stream
//!
//! Each producer spawns a stage that pushes values into a fresh transport until
//! it runs out, or until its consumer drops or closes the transport.

use crate::stage::spawn_stage;
use crate::stream_configuration::TransportConfig;
use crate::transport::{transport, transport_with, Transport};

/// An already-closed transport with no values
pub fn empty<T>() -> Transport<T> {
    let (outlet, output) = transport();
    outlet.close();
    output
}

/// Send every element of `items` in order, then close.
///
/// # Examples
/// ```
/// use linq_stream::{from_iter, sum};
///
/// # tokio_test::block_on(async {
/// assert_eq!(sum(from_iter(vec![1, 2, 3])).await, 6);
/// # });
/// ```
pub fn from_iter<I>(items: I) -> Transport<I::Item>
where
    I: IntoIterator + Send + 'static,
    I::IntoIter: Send,
    I::Item: Send + 'static,
{
    from_iter_with(&TransportConfig::default(), items)
}

pub fn from_iter_with<I>(config: &TransportConfig, items: I) -> Transport<I::Item>
where
    I: IntoIterator + Send + 'static,
    I::IntoIter: Send,
    I::Item: Send + 'static,
{
    let (outlet, output) = transport_with(config);
    spawn_stage("from_iter", async move {
        for item in items {
            if outlet.send(item).await.is_err() {
                log::debug!("from_iter: consumer gone before the source was exhausted");
                return;
            }
        }
        outlet.close();
    });
    output
}

/// Generate values from a mutable state until `step` returns `None`.
///
/// An unfold whose step never returns `None` is infinite; it runs until its
/// consumer goes away.
pub fn unfold<S, T, F>(state: S, step: F) -> Transport<T>
where
    S: Send + 'static,
    T: Send + 'static,
    F: FnMut(&mut S) -> Option<T> + Send + 'static,
{
    unfold_with(&TransportConfig::default(), state, step)
}

pub fn unfold_with<S, T, F>(config: &TransportConfig, mut state: S, mut step: F) -> Transport<T>
where
    S: Send + 'static,
    T: Send + 'static,
    F: FnMut(&mut S) -> Option<T> + Send + 'static,
{
    let (outlet, output) = transport_with(config);
    spawn_stage("unfold", async move {
        while let Some(item) = step(&mut state) {
            if outlet.send(item).await.is_err() {
                log::debug!("unfold: consumer gone, generator stopped");
                return;
            }
        }
        outlet.close();
    });
    output
}

/// The Fibonacci numbers 1, 1, 2, 3, 5, 8, ... forever.
///
/// The stream never closes on its own. Drop or close the returned transport
/// (or the end of any chain built on it) to stop the generator. Past the 93rd
/// term the values wrap around `u64::MAX`.
pub fn fibonaccis() -> Transport<u64> {
    fibonaccis_with(&TransportConfig::default())
}

pub fn fibonaccis_with(config: &TransportConfig) -> Transport<u64> {
    unfold_with(config, (1u64, 1u64), |(a, b)| {
        let current = *a;
        let next = a.wrapping_add(*b);
        *a = *b;
        *b = next;
        Some(current)
    })
}
