use crate::Vector3;

/// A state that can be advanced by its derivative over an increment.
///
/// The generic RK4 in `tribody-solvers` and the double pendulum integrate any
/// type implementing this trait. Stepping is assumed linear in the
/// derivative, `state + derivative * delta`, so several steps from the same
/// base can be chained to form weighted sums of derivatives.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state after stepping with `derivative` over `delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for Vector3 {
    type Derivative = Vector3;

    fn step(&self, derivative: Vector3, delta: f64) -> Self {
        *self + derivative * delta
    }
}

impl<T: StepIntegrable<f64>, const N: usize> StepIntegrable<f64> for [T; N] {
    type Derivative = [T::Derivative; N];

    fn step(&self, derivative: Self::Derivative, delta: f64) -> Self {
        let mut derivative = derivative.into_iter();
        self.each_ref().map(|value| match derivative.next() {
            Some(d) => value.step(d, delta),
            None => unreachable!("derivative has the same length as the state"),
        })
    }
}
