use super::Stage;

/// Two stages connected in series, the output of `first` is the input of `second`.
#[derive(Debug, Clone)]
pub struct Pipe<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pipe<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    /// Connect `first` to `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The upstream stage.
    #[inline(always)]
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The downstream stage.
    #[inline(always)]
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Stage for Pipe<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    #[inline]
    fn receive(&mut self, item: A::Input, emit: &mut dyn FnMut(B::Output)) {
        let second = &mut self.second;
        self.first
            .receive(item, &mut |intermediate| second.receive(intermediate, &mut *emit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{MapStage, ReduceStage, StageExt};

    #[test]
    fn pipe_feeds_first_into_second() {
        let mut stage = ReduceStage::new(0_i64, |acc: &mut i64, x: i64| *acc += x)
            .pipe(MapStage::new(|sum: i64| (sum > 3).then_some(sum * 2)));
        let mut out = Vec::new();
        for x in [1, 2, 3, 4] {
            stage.receive(x, &mut |v| out.push(v));
        }
        assert_eq!(out, vec![12, 20]);
        assert_eq!(*stage.first().acc(), 10);
    }

    #[test]
    fn pipe_fan_out_keeps_order() {
        struct Repeat;
        impl Stage for Repeat {
            type Input = u8;
            type Output = u8;

            fn receive(&mut self, item: u8, emit: &mut dyn FnMut(u8)) {
                for _ in 0..item {
                    emit(item);
                }
            }
        }

        let mut stage = Repeat.pipe(MapStage::new(|x: u8| Some(u16::from(x) + 100)));
        let mut out = Vec::new();
        for x in [2, 0, 1, 3] {
            stage.receive(x, &mut |v| out.push(v));
        }
        assert_eq!(out, vec![102, 102, 101, 103, 103, 103]);
    }
}
