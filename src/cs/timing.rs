use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `f(input)` once and returns its result with the wall-clock time it took.
///
/// # Examples
///
/// ```
/// use change_algos::timing::time_execution;
///
/// let (sum, elapsed) = time_execution(|n: u64| (1..=n).sum::<u64>(), 1_000);
/// assert_eq!(sum, 500_500);
/// assert!(elapsed.as_secs_f64() >= 0.0);
/// ```
pub fn time_execution<I, T, F>(f: F, input: I) -> (T, Duration)
where
    F: FnOnce(I) -> T,
{
    let start = Instant::now();
    let result = black_box(f(black_box(input)));
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Runs `f(input)` once and returns the elapsed wall-clock time in seconds.
///
/// This is a single-shot measurement with no warm-up or averaging. The
/// result of `f` is dropped after the clock stops.
pub fn measure_execution_time<I, T, F>(f: F, input: I) -> f64
where
    F: FnOnce(I) -> T,
{
    time_execution(f, input).1.as_secs_f64()
}
