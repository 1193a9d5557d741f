use std::future::Future;
use std::ops::Add;
use std::time::Duration;

use crate::aggregate;
use crate::pipe::Pipe;
use crate::transforms;
use crate::transport::Transport;

/// Extension trait providing chainable operators on transports.
///
/// Each method forwards to the free function of the same name in
/// [`transforms`] or [`aggregate`].
pub trait TransportExt<T>: Sized
where
    T: Send + 'static,
{
    /// Map elements of the transport with a function
    fn map_seq<U, F>(self, f: F) -> Transport<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static;

    /// Keep elements matching the predicate
    fn filter_seq<F>(self, predicate: F) -> Transport<T>
    where
        F: FnMut(&T) -> bool + Send + 'static;

    fn take_seq(self, n: usize) -> Transport<T>;

    fn skip_seq(self, n: usize) -> Transport<T>;

    /// Pair with another transport until either closes
    fn zip_seq<B, C, F>(self, other: Transport<B>, combiner: F) -> Transport<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnMut(T, B) -> C + Send + 'static;

    /// Run the transport through a pipe
    fn through<O>(self, pipe: &Pipe<T, O>) -> Transport<O>;

    fn first_seq(self) -> impl Future<Output = T> + Send
    where
        T: Default;

    fn last_seq(self) -> impl Future<Output = T> + Send
    where
        T: Default;

    fn max_seq(self) -> impl Future<Output = T> + Send
    where
        T: PartialOrd + Default;

    fn count_seq(self) -> impl Future<Output = usize> + Send;

    fn sum_seq(self) -> impl Future<Output = T> + Send
    where
        T: Add<Output = T> + Default;

    fn to_vec_seq(self) -> impl Future<Output = Vec<T>> + Send;

    /// Count with a deadline; see [`aggregate::count_with_timeout`]
    fn count_with_timeout_seq(self, deadline: Duration) -> impl Future<Output = i64> + Send;
}

impl<T> TransportExt<T> for Transport<T>
where
    T: Send + 'static,
{
    fn map_seq<U, F>(self, f: F) -> Transport<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        transforms::map(self, f)
    }

    fn filter_seq<F>(self, predicate: F) -> Transport<T>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        transforms::filter(self, predicate)
    }

    fn take_seq(self, n: usize) -> Transport<T> {
        transforms::take(self, n)
    }

    fn skip_seq(self, n: usize) -> Transport<T> {
        transforms::skip(self, n)
    }

    fn zip_seq<B, C, F>(self, other: Transport<B>, combiner: F) -> Transport<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnMut(T, B) -> C + Send + 'static,
    {
        transforms::zip(self, other, combiner)
    }

    fn through<O>(self, pipe: &Pipe<T, O>) -> Transport<O> {
        pipe.apply(self)
    }

    fn first_seq(self) -> impl Future<Output = T> + Send
    where
        T: Default,
    {
        aggregate::first(self)
    }

    fn last_seq(self) -> impl Future<Output = T> + Send
    where
        T: Default,
    {
        aggregate::last(self)
    }

    fn max_seq(self) -> impl Future<Output = T> + Send
    where
        T: PartialOrd + Default,
    {
        aggregate::max(self)
    }

    fn count_seq(self) -> impl Future<Output = usize> + Send {
        aggregate::count(self)
    }

    fn sum_seq(self) -> impl Future<Output = T> + Send
    where
        T: Add<Output = T> + Default,
    {
        aggregate::sum(self)
    }

    fn to_vec_seq(self) -> impl Future<Output = Vec<T>> + Send {
        aggregate::to_vec(self)
    }

    fn count_with_timeout_seq(self, deadline: Duration) -> impl Future<Output = i64> + Send {
        aggregate::count_with_timeout(self, deadline)
    }
}
