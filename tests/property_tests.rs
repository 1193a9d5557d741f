use linq_stream::{count, filter, from_iter, map, skip, sum, take, to_vec, zip};
use quickcheck::{quickcheck, TestResult};
use std::future::Future;

/// Stages are spawned when an operator is called, so whole chains must be
/// built inside the future handed to the runtime.
fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn widen(xs: &[i32]) -> Vec<i64> {
    xs.iter().map(|&x| i64::from(x)).collect()
}

quickcheck! {
    fn prop_count_matches_length(xs: Vec<i32>) -> bool {
        let len = xs.len();
        block_on(async move { count(from_iter(xs)).await }) == len
    }

    fn prop_sum_matches_iterator_sum(xs: Vec<i32>) -> bool {
        let xs = widen(&xs);
        let expected: i64 = xs.iter().sum();
        block_on(async move { sum(from_iter(xs)).await }) == expected
    }

    fn prop_filter_preserves_order(xs: Vec<i32>) -> bool {
        let expected: Vec<i32> = xs.iter().copied().filter(|x| x % 3 == 0).collect();
        block_on(async move { to_vec(filter(from_iter(xs), |x| x % 3 == 0)).await }) == expected
    }

    fn prop_map_is_elementwise(xs: Vec<i32>) -> bool {
        let xs = widen(&xs);
        let expected: Vec<i64> = xs.iter().map(|x| x * 2 + 1).collect();
        block_on(async move { to_vec(map(from_iter(xs), |x| x * 2 + 1)).await }) == expected
    }

    fn prop_take_is_prefix(xs: Vec<i32>, n: u8) -> bool {
        let n = usize::from(n);
        let expected: Vec<i32> = xs.iter().copied().take(n).collect();
        block_on(async move { to_vec(take(from_iter(xs), n)).await }) == expected
    }

    fn prop_skip_drops_prefix(xs: Vec<i32>, n: u8) -> bool {
        let n = usize::from(n);
        let expected: Vec<i32> = xs.iter().copied().skip(n).collect();
        block_on(async move { to_vec(skip(from_iter(xs), n)).await }) == expected
    }

    fn prop_zip_pairs_up_to_shorter(a: Vec<i32>, b: Vec<i32>) -> bool {
        let expected: Vec<i64> = widen(&a)
            .into_iter()
            .zip(widen(&b))
            .map(|(x, y)| x - y)
            .collect();
        let (left, right) = (widen(&a), widen(&b));
        let zipped = block_on(async move {
            to_vec(zip(from_iter(left), from_iter(right), |x, y| x - y)).await
        });
        zipped.len() == a.len().min(b.len()) && zipped == expected
    }

    fn prop_chain_is_repeatable(xs: Vec<i32>) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let run = |xs: Vec<i32>| {
            block_on(async move {
                to_vec(take(filter(skip(from_iter(xs), 1), |x| x % 2 == 0), 5)).await
            })
        };
        TestResult::from_bool(run(xs.clone()) == run(xs))
    }
}
