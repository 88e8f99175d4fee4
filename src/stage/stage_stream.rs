use std::{collections::VecDeque, iter::FusedIterator};

use tracing::debug;

use super::Stage;

/// Lazily drives a [`Stage`] from an upstream iterator of fallible items.
///
/// - The end of upstream ends the stream.
/// - An upstream error is yielded unchanged, after which the stream is terminal
///   and no further upstream items are pulled.
///
/// A terminated stream cannot be restarted, create a fresh stage instead.
pub struct StageStream<I, S>
where
    S: Stage,
{
    upstream: I,
    stage: S,
    /// Outputs emitted by the stage but not yet yielded.
    pending: VecDeque<S::Output>,
    terminated: bool,
}

impl<I, S> StageStream<I, S>
where
    S: Stage,
{
    pub(crate) fn new(upstream: I, stage: S) -> Self {
        Self {
            upstream,
            stage,
            pending: VecDeque::new(),
            terminated: false,
        }
    }

    /// The stage being driven.
    #[inline(always)]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Whether upstream has ended or failed.
    #[inline(always)]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<I, S, E> Iterator for StageStream<I, S>
where
    I: Iterator<Item = Result<S::Input, E>>,
    S: Stage,
{
    type Item = Result<S::Output, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(out) = self.pending.pop_front() {
                return Some(Ok(out));
            }
            if self.terminated {
                return None;
            }
            match self.upstream.next() {
                None => {
                    debug!("upstream ended");
                    self.terminated = true;
                    return None;
                }
                Some(Err(e)) => {
                    debug!("upstream error, terminating stream");
                    self.terminated = true;
                    return Some(Err(e));
                }
                Some(Ok(item)) => {
                    let pending = &mut self.pending;
                    self.stage.receive(item, &mut |out| pending.push_back(out));
                }
            }
        }
    }
}

impl<I, S, E> FusedIterator for StageStream<I, S>
where
    I: Iterator<Item = Result<S::Input, E>>,
    S: Stage,
{
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use crate::stage::{MapStage, ReduceStage, StageExt};

    fn running_sum() -> ReduceStage<i64, i64> {
        ReduceStage::new(0, |acc: &mut i64, x: i64| *acc += x)
    }

    #[test]
    #[tracing_test::traced_test]
    fn stage_stream_in_order() {
        let mut stream = running_sum().attach([1, 2, 3].map(Ok::<_, Infallible>));
        assert_eq!(stream.next(), Some(Ok(1)));
        assert_eq!(stream.next(), Some(Ok(3)));
        assert_eq!(stream.next(), Some(Ok(6)));
        assert!(!stream.is_terminated());
        assert_eq!(stream.next(), None);
        assert!(stream.is_terminated());
        assert_eq!(stream.next(), None);
        assert!(logs_contain("upstream ended"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn stage_stream_upstream_error_is_terminal() {
        let upstream = vec![Ok(1), Ok(2), Err("boom"), Ok(3)];
        let mut stream = running_sum().attach(upstream);
        assert_eq!(stream.next(), Some(Ok(1)));
        assert_eq!(stream.next(), Some(Ok(3)));
        assert_eq!(stream.next(), Some(Err("boom")));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        // The item after the error was never processed.
        assert_eq!(*stream.stage().acc(), 3);
        assert!(logs_contain("upstream error, terminating stream"));
    }

    #[test]
    fn stage_stream_skips_dropped_items() {
        let stream = running_sum()
            .pipe(MapStage::new(|sum: i64| (sum % 2 == 0).then_some(sum)))
            .attach((1..=5).map(Ok::<_, Infallible>));
        let out: Result<Vec<_>, _> = stream.collect();
        // running sums: 1, 3, 6, 10, 15
        assert_eq!(out, Ok(vec![6, 10]));
    }

    #[test]
    fn stage_stream_is_lazy() {
        let mut pulled = 0;
        let upstream = (1..).map(|x| {
            pulled += 1;
            Ok::<_, Infallible>(x)
        });
        let first: Vec<_> = running_sum().attach(upstream).take(3).collect();
        assert_eq!(first, vec![Ok(1), Ok(3), Ok(6)]);
        assert_eq!(pulled, 3);
    }
}
