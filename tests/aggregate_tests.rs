use linq_stream::{
    count, count_with_timeout, count_within, fibonaccis, first, from_iter, last, max, skip, sum,
    take, try_count_within, try_first, try_last, try_max, SeqError, TimeoutConfig, Transport,
    TransportExt, TIMED_OUT,
};
use std::time::Duration;

fn ints() -> Vec<i32> {
    vec![1, 2, 3, 6, 4, 1, 9, 5, 8]
}

#[tokio::test]
async fn test_scenario_aggregates() {
    assert_eq!(max(from_iter(ints())).await, 9);
    assert_eq!(first(from_iter(ints())).await, 1);
    assert_eq!(last(from_iter(ints())).await, 8);
    assert_eq!(count(from_iter(ints())).await, 9);
    assert_eq!(sum(from_iter(ints())).await, 39);
    assert_eq!(sum(take(from_iter(ints()), 3)).await, 6);
}

#[tokio::test]
async fn test_fluent_aggregates() {
    assert_eq!(from_iter(ints()).max_seq().await, 9);
    assert_eq!(from_iter(ints()).first_seq().await, 1);
    assert_eq!(from_iter(ints()).last_seq().await, 8);
    assert_eq!(from_iter(ints()).count_seq().await, 9);
    assert_eq!(from_iter(ints()).sum_seq().await, 39);
}

#[tokio::test]
async fn test_empty_input_defaults() {
    let none = || from_iter(Vec::<i32>::new());
    assert_eq!(first(none()).await, 0);
    assert_eq!(last(none()).await, 0);
    assert_eq!(max(none()).await, 0);
    assert_eq!(count(none()).await, 0);
    assert_eq!(sum(none()).await, 0);
}

#[tokio::test]
async fn test_presence_carrying_aggregates() {
    let none = || from_iter(Vec::<i32>::new());
    assert_eq!(try_first(none()).await, None);
    assert_eq!(try_last(none()).await, None);
    assert_eq!(try_max(none()).await, None);

    // A genuine zero is distinguishable from "no data"
    assert_eq!(try_first(from_iter(vec![0])).await, Some(0));
}

#[tokio::test]
async fn test_absent_input_behaves_as_empty() {
    assert_eq!(first(Transport::<i32>::absent()).await, 0);
    assert_eq!(count(Transport::<i32>::absent()).await, 0);
    assert_eq!(sum(Transport::<f64>::absent()).await, 0.0);
    assert_eq!(try_max(Transport::<i32>::absent()).await, None);
}

#[tokio::test]
async fn test_max_seeds_with_first_element() {
    // All values are below the default, so the default must not win
    assert_eq!(max(from_iter(vec![-3, -7, -5])).await, -3);
    assert_eq!(max(from_iter(vec![0.5, 2.25, 1.0])).await, 2.25);
}

#[tokio::test]
async fn test_sum_of_floats() {
    assert_eq!(sum(from_iter(vec![0.5_f64, 0.25, 0.25])).await, 1.0);
}

#[tokio::test]
async fn test_first_over_infinite_source() {
    assert_eq!(first(skip(fibonaccis(), 4)).await, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_count_with_timeout_on_finite_input() {
    let counted = count_with_timeout(from_iter(ints()), Duration::from_secs(1)).await;
    assert_eq!(counted, 9);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_count_with_timeout_on_fibonaccis_times_out() {
    let counted = count_with_timeout(fibonaccis(), Duration::from_secs(1)).await;
    assert_eq!(counted, TIMED_OUT);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_try_count_within_reports_timeout() {
    let result = try_count_within(fibonaccis(), Duration::from_millis(100)).await;
    assert_eq!(result, Err(SeqError::Timeout));

    let result = try_count_within(from_iter(ints()), Duration::from_secs(1)).await;
    assert_eq!(result, Ok(9));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_count_within_config() {
    let config = TimeoutConfig::new(Duration::from_millis(100));
    assert_eq!(count_within(fibonaccis(), &config).await, TIMED_OUT);
    assert_eq!(
        fibonaccis()
            .count_with_timeout_seq(Duration::from_millis(100))
            .await,
        TIMED_OUT
    );
}
