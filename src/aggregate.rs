//! Terminal aggregators
//!
//! Aggregators drain a transport on the calling task and return a single value.
//! An absent transport behaves like an empty one. The `try_` forms report an
//! empty input as `None`; the plain forms fall back to `T::default()`.

use std::ops::Add;
use std::time::Duration;

use crate::error::{SeqError, SeqResult};
use crate::stage::spawn_stage;
use crate::stream_configuration::TimeoutConfig;
use crate::transport::Transport;

/// Returned by [`count_with_timeout`] when the deadline passes first
pub const TIMED_OUT: i64 = -1;

/// The first value, or `None` if the input closes empty.
///
/// Waits forever on an input that never sends and never closes. The rest of
/// the input is released on return, which stops its producer.
pub async fn try_first<T>(mut input: Transport<T>) -> Option<T> {
    input.recv().await
}

pub async fn first<T: Default>(input: Transport<T>) -> T {
    try_first(input).await.unwrap_or_default()
}

/// The final value of the input, or `None` if it was empty
pub async fn try_last<T>(mut input: Transport<T>) -> Option<T> {
    let mut last = None;
    while let Some(item) = input.recv().await {
        last = Some(item);
    }
    last
}

pub async fn last<T: Default>(input: Transport<T>) -> T {
    try_last(input).await.unwrap_or_default()
}

/// The largest value; the first value seeds the comparison and is only
/// replaced by strictly greater ones.
pub async fn try_max<T: PartialOrd>(mut input: Transport<T>) -> Option<T> {
    let mut max = input.recv().await?;
    while let Some(item) = input.recv().await {
        if item > max {
            max = item;
        }
    }
    Some(max)
}

pub async fn max<T: PartialOrd + Default>(input: Transport<T>) -> T {
    try_max(input).await.unwrap_or_default()
}

pub async fn count<T>(mut input: Transport<T>) -> usize {
    let mut count = 0;
    while input.recv().await.is_some() {
        count += 1;
    }
    count
}

/// Sum of all values, starting from `T::default()`
pub async fn sum<T>(mut input: Transport<T>) -> T
where
    T: Add<Output = T> + Default,
{
    let mut total = T::default();
    while let Some(item) = input.recv().await {
        total = total + item;
    }
    total
}

pub async fn to_vec<T>(mut input: Transport<T>) -> Vec<T> {
    let mut items = Vec::new();
    while let Some(item) = input.recv().await {
        items.push(item);
    }
    items
}

/// Count on a separate stage, giving up once `deadline` has passed.
///
/// On timeout the counting stage is aborted. That drops the input, so the
/// stages feeding it stop as well.
pub async fn try_count_within<T>(input: Transport<T>, deadline: Duration) -> SeqResult<usize>
where
    T: Send + 'static,
{
    let mut counting = spawn_stage("count", count(input));
    match tokio::time::timeout(deadline, &mut counting).await {
        Ok(joined) => Ok(joined?),
        Err(elapsed) => {
            counting.abort();
            log::warn!("count did not finish within {:?}, abandoning it", deadline);
            Err(SeqError::from(elapsed))
        }
    }
}

/// Number of values received, or [`TIMED_OUT`] if the input did not close
/// within `deadline`.
pub async fn count_with_timeout<T>(input: Transport<T>, deadline: Duration) -> i64
where
    T: Send + 'static,
{
    match try_count_within(input, deadline).await {
        Ok(n) => i64::try_from(n).unwrap_or(i64::MAX),
        Err(err) => {
            log::debug!("count_with_timeout: {}", err);
            TIMED_OUT
        }
    }
}

pub async fn count_within<T>(input: Transport<T>, config: &TimeoutConfig) -> i64
where
    T: Send + 'static,
{
    count_with_timeout(input, config.deadline).await
}
