//! Rendering a stream as separator-joined text

use std::fmt::Display;

use crate::transport::Transport;

/// Drain `input`, rendering each value and joining them with `separator`.
/// An absent or empty input renders as an empty string.
pub async fn concat<T, F>(separator: &str, mut input: Transport<T>, mut render: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut builder = String::new();
    let mut first = true;
    while let Some(item) = input.recv().await {
        if !first {
            builder.push_str(separator);
        }
        builder.push_str(&render(&item));
        first = false;
    }
    builder
}

pub async fn concat_ints<T: Display>(separator: &str, input: Transport<T>) -> String {
    concat(separator, input, |item| item.to_string()).await
}

/// Floats are rendered with six decimal places
pub async fn concat_floats(separator: &str, input: Transport<f64>) -> String {
    concat(separator, input, |item| format!("{:.6}", item)).await
}
