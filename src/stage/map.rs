use super::Stage;

/// Maps each received item with a pure function.
/// Emits the result if there is one, otherwise the item is dropped.
#[derive(Debug, Clone, Copy)]
pub struct MapStage<I, O> {
    map: fn(I) -> Option<O>,
}

impl<I, O> MapStage<I, O> {
    /// Create a new instance from the mapping function.
    pub fn new(map: fn(I) -> Option<O>) -> Self {
        Self { map }
    }
}

impl<I, O> Stage for MapStage<I, O> {
    type Input = I;
    type Output = O;

    #[inline]
    fn receive(&mut self, item: I, emit: &mut dyn FnMut(O)) {
        if let Some(out) = (self.map)(item) {
            emit(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_stage() {
        let mut stage = MapStage::new(|x: i32| (x % 2 == 0).then_some(x * 10));
        let mut out = Vec::new();
        for x in 0..5 {
            stage.receive(x, &mut |v| out.push(v));
        }
        assert_eq!(out, vec![0, 20, 40]);
    }
}
