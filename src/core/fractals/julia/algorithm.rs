use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Escape time of `z0` under `z ← z² + c`.
///
/// Returns the 1-based count of completed updates when the squared magnitude
/// first exceeds `escape_threshold`, or `max_iterations` if the orbit stays
/// bounded. The threshold is compared against the squared magnitude, so it is
/// a squared-radius bound.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32, escape_threshold: f32) -> u32 {
    let orbit = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;
        if next.magnitude_squared() > escape_threshold {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match orbit {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
