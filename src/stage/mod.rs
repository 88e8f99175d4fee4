//! Push based transform stages.
//!
//! A [`Stage`] receives one item at a time and emits zero or more items downstream,
//! in the order the inputs arrived. Stages compose with [`StageExt::pipe`] and are driven
//! from an upstream iterator with [`StageExt::attach`].

mod map;
mod pipe;
mod reduce;
mod stage_stream;

pub use map::MapStage;
pub use pipe::Pipe;
pub use reduce::ReduceStage;
pub use stage_stream::StageStream;

/// A data-flow unit which receives items as they arrive and emits results downstream.
///
/// An item is processed completely, including all of its emissions, before the next one is received.
pub trait Stage {
    /// The type of items received from upstream.
    type Input;

    /// The type of items emitted downstream.
    type Output;

    /// Receive a single `item` and hand every resulting output to `emit`.
    fn receive(&mut self, item: Self::Input, emit: &mut dyn FnMut(Self::Output));
}

/// Combinators available on every [`Stage`].
pub trait StageExt: Stage + Sized {
    /// Feed the outputs of `self` into `next`.
    fn pipe<B>(self, next: B) -> Pipe<Self, B>
    where
        B: Stage<Input = Self::Output>,
    {
        Pipe::new(self, next)
    }

    /// Drive this stage from `upstream`, yielding the outputs lazily.
    /// An upstream error is forwarded unchanged and terminates the stream.
    fn attach<I, E>(self, upstream: I) -> StageStream<I::IntoIter, Self>
    where
        I: IntoIterator<Item = Result<Self::Input, E>>,
    {
        StageStream::new(upstream.into_iter(), self)
    }
}

impl<S> StageExt for S where S: Stage {}
