use super::Stage;

/// Folds every received item into an owned accumulator and emits a snapshot of the
/// whole accumulator after each item.
#[derive(Debug, Clone)]
pub struct ReduceStage<A, X> {
    acc: A,
    reducer: fn(&mut A, X),
}

impl<A, X> ReduceStage<A, X>
where
    A: Clone,
{
    /// Create a new instance starting from the initial accumulator `acc`.
    pub fn new(acc: A, reducer: fn(&mut A, X)) -> Self {
        Self { acc, reducer }
    }

    /// The current state of the accumulator.
    #[inline(always)]
    pub fn acc(&self) -> &A {
        &self.acc
    }
}

impl<A, X> Stage for ReduceStage<A, X>
where
    A: Clone,
{
    type Input = X;
    type Output = A;

    #[inline]
    fn receive(&mut self, item: X, emit: &mut dyn FnMut(A)) {
        (self.reducer)(&mut self.acc, item);
        emit(self.acc.clone());
    }
}
