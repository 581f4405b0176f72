use crate::either::Either;

pub struct LeftsIter<I> {
    iter: I,
}

impl<I> LeftsIter<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, L, R> Iterator for LeftsIter<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = L;

    fn next(&mut self) -> Option<Self::Item> {
        let payload = loop {
            let Some(value) = self.iter.next() else {
                return None;
            };
            match value {
                Either::Left(payload) => break payload,
                Either::Right(_) => continue,
            }
        };

        Some(payload)
    }
}

pub struct RightsIter<I> {
    iter: I,
}

impl<I> RightsIter<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, L, R> Iterator for RightsIter<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let payload = loop {
            let Some(value) = self.iter.next() else {
                return None;
            };
            match value {
                Either::Left(_) => continue,
                Either::Right(payload) => break payload,
            }
        };

        Some(payload)
    }
}

///One-sided projections over any stream of two-variant values. The
///adapters pull from the source only when polled and consume it as they
///go; to run a projection again, build a fresh source.
pub trait EitherIter<L, R>: Iterator<Item = Either<L, R>> + Sized {
    fn lefts_iter(self) -> LeftsIter<Self>;
    fn rights_iter(self) -> RightsIter<Self>;
}

impl<I, L, R> EitherIter<L, R> for I
where
    I: Iterator<Item = Either<L, R>>,
{
    fn lefts_iter(self) -> LeftsIter<Self> {
        LeftsIter::new(self)
    }

    fn rights_iter(self) -> RightsIter<Self> {
        RightsIter::new(self)
    }
}

pub fn lefts<I, L, R>(values: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    LeftsIter::new(values.into_iter()).collect()
}

pub fn rights<I, L, R>(values: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    RightsIter::new(values.into_iter()).collect()
}
