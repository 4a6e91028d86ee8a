use std::time::{Duration, Instant};

/// Calls `f` `times` times (at least once) and returns the last result with
/// the total elapsed wall-clock time.
pub fn measure<T, F>(times: usize, mut f: F) -> (T, Duration)
where
    F: FnMut() -> T,
{
    let start = Instant::now();
    let mut last = f();
    for _ in 1..times {
        last = f();
    }
    (last, start.elapsed())
}
