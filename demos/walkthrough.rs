//! Walks through every operator on a small set of integers and on the
//! Fibonacci numbers, printing each result.
//!
//! Run with: cargo run --example walkthrough

use linq_stream::display::{concat_floats, concat_ints};
use linq_stream::{
    count, count_with_timeout, fibonaccis, filter, first, from_iter, last, map, max, skip, sum,
    take, zip,
};
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let ints: Vec<i64> = vec![1, 2, 3, 6, 4, 1, 9, 5, 8];
    let is_even = |i: &i64| i % 2 == 0;
    let square = |i: i64| i * i;

    println!("Given ints:");
    println!("{}", concat_ints(", ", from_iter(ints.clone())).await);

    println!("Squares of ints:");
    println!("{}", concat_ints(", ", map(from_iter(ints.clone()), square)).await);

    println!("Even squares of given ints:");
    let even_squares = filter(map(from_iter(ints.clone()), square), is_even);
    println!("{}", concat_ints(", ", even_squares).await);

    println!("Max of given ints:");
    println!("{}", max(from_iter(ints.clone())).await);

    println!("First int:");
    println!("{}", first(from_iter(ints.clone())).await);

    println!("Last int:");
    println!("{}", last(from_iter(ints.clone())).await);

    println!("Count of ints:");
    let total = count(from_iter(ints.clone())).await;
    println!("{}", total);

    println!("Sum of ints:");
    println!("{}", sum(from_iter(ints.clone())).await);

    println!("Sum of first three ints:");
    println!("{}", sum(take(from_iter(ints.clone()), 3)).await);

    println!("Sum of final two ints:");
    println!("{}", sum(skip(from_iter(ints.clone()), total.saturating_sub(2))).await);

    println!("First ten Fibonacci numbers:");
    println!("{}", concat_ints(", ", take(fibonaccis(), 10)).await);

    let after_four = first(skip(fibonaccis(), 4)).await;
    println!(
        "First ten Fibonacci numbers, ignoring the first four, ie starting with {}:",
        after_four
    );
    println!("{}", concat_ints(", ", take(skip(fibonaccis(), 4), 10)).await);

    println!("Squares of first ten Fibonacci numbers:");
    // Mapping an unending stream is fine as long as something downstream stops reading
    let squared_fibs = take(map(fibonaccis(), |f| f * f), 10);
    println!("{}", concat_ints(", ", squared_fibs).await);

    println!("Total number of Fibonacci numbers:");
    let fib_count = count_with_timeout(fibonaccis(), Duration::from_secs(1)).await;
    if fib_count >= 0 {
        println!("{}", fib_count);
    } else {
        println!("Timed out, obviously");
    }

    println!("Multiply each integer in the test set by the subsequent integer:");
    let products = zip(from_iter(ints.clone()), skip(from_iter(ints), 1), |a, b| a * b);
    println!("{}", concat_ints(", ", products).await);

    println!("Successive ratios of the five Fibonacci numbers after skipping the first five:");
    let ratio = |a: u64, b: u64| b as f64 / a as f64;
    let phis = take(skip(zip(fibonaccis(), skip(fibonaccis(), 1), ratio), 5), 5);
    println!("{}", concat_floats(", ", phis).await);
}
