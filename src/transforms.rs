//! Transforms: stages that turn one or two transports into another
//!
//! Every transform returns its output immediately and does the work on its own
//! stage. An absent input gives an absent output and no stage. A transform
//! stops, and releases its inputs, as soon as its own consumer goes away.
//! Outputs inherit the capacity of the (first) input.

use crate::stage::{pull, spawn_stage, Pull};
use crate::transport::{transport_with, Transport};

/// Apply `f` to every value, one-to-one and in order
pub fn map<T, U, F>(mut input: Transport<T>, mut f: F) -> Transport<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    if input.is_absent() {
        return Transport::absent();
    }
    let (outlet, output) = transport_with(&input.config());
    spawn_stage("map", async move {
        while let Pull::Item(item) = pull("map", &mut input, &outlet).await {
            if outlet.send(f(item)).await.is_err() {
                break;
            }
        }
    });
    output
}

/// Forward only the values for which `predicate` holds, preserving order
pub fn filter<T, F>(mut input: Transport<T>, mut predicate: F) -> Transport<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    if input.is_absent() {
        return Transport::absent();
    }
    let (outlet, output) = transport_with(&input.config());
    spawn_stage("filter", async move {
        while let Pull::Item(item) = pull("filter", &mut input, &outlet).await {
            if predicate(&item) && outlet.send(item).await.is_err() {
                break;
            }
        }
    });
    output
}

/// Pair values from `xs` and `ys` and send `combiner(x, y)`.
///
/// Closes as soon as either input closes; whatever remains in the longer input
/// is left unread.
pub fn zip<A, B, C, F>(mut xs: Transport<A>, mut ys: Transport<B>, mut combiner: F) -> Transport<C>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    F: FnMut(A, B) -> C + Send + 'static,
{
    if xs.is_absent() || ys.is_absent() {
        return Transport::absent();
    }
    let (outlet, output) = transport_with(&xs.config());
    spawn_stage("zip", async move {
        loop {
            let x = match pull("zip", &mut xs, &outlet).await {
                Pull::Item(x) => x,
                Pull::Exhausted | Pull::Cancelled => break,
            };
            let y = match pull("zip", &mut ys, &outlet).await {
                Pull::Item(y) => y,
                Pull::Exhausted | Pull::Cancelled => break,
            };
            if outlet.send(combiner(x, y)).await.is_err() {
                break;
            }
        }
    });
    output
}

/// Forward at most the first `n` values, then close and stop reading.
///
/// Dropping the input after the `n`th value also stops the upstream stage.
/// `take(_, 0)` returns an already-closed transport without spawning a stage.
pub fn take<T>(mut input: Transport<T>, n: usize) -> Transport<T>
where
    T: Send + 'static,
{
    if input.is_absent() {
        return Transport::absent();
    }
    let (outlet, output) = transport_with(&input.config());
    if n == 0 {
        drop(input);
        outlet.close();
        return output;
    }
    spawn_stage("take", async move {
        let mut remaining = n;
        while remaining > 0 {
            match pull("take", &mut input, &outlet).await {
                Pull::Item(item) => {
                    if outlet.send(item).await.is_err() {
                        break;
                    }
                    remaining -= 1;
                }
                Pull::Exhausted | Pull::Cancelled => break,
            }
        }
    });
    output
}

/// Discard the first `n` values and forward everything after them
pub fn skip<T>(mut input: Transport<T>, n: usize) -> Transport<T>
where
    T: Send + 'static,
{
    if input.is_absent() {
        return Transport::absent();
    }
    let (outlet, output) = transport_with(&input.config());
    spawn_stage("skip", async move {
        let mut to_skip = n;
        while let Pull::Item(item) = pull("skip", &mut input, &outlet).await {
            if to_skip > 0 {
                to_skip -= 1;
                continue;
            }
            if outlet.send(item).await.is_err() {
                break;
            }
        }
    });
    output
}
