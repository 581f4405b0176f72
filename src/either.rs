use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

pub use Either::{Left, Right};

///A value holding exactly one of two payload types, tagged left or right.
///Neither tag is the "success" or the "error" side.
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(left) => Either::Left(f(left)),
            Self::Right(right) => Either::Right(right),
        }
    }

    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(f(right)),
        }
    }

    pub fn map<T, U>(self, f: impl FnOnce(L) -> T, g: impl FnOnce(R) -> U) -> Either<T, U> {
        match self {
            Self::Left(left) => Either::Left(f(left)),
            Self::Right(right) => Either::Right(g(right)),
        }
    }

    ///Applies whichever function matches the held variant and returns its
    ///result bare. The only way out of a heterogeneous value.
    pub fn either<T>(self, f: impl FnOnce(L) -> T, g: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(left) => f(left),
            Self::Right(right) => g(right),
        }
    }

    pub fn left_or(self, fallback: L) -> L {
        match self {
            Self::Left(left) => left,
            Self::Right(_) => fallback,
        }
    }

    pub fn left_or_else(self, f: impl FnOnce(R) -> L) -> L {
        match self {
            Self::Left(left) => left,
            Self::Right(right) => f(right),
        }
    }

    pub fn right_or(self, fallback: R) -> R {
        match self {
            Self::Left(_) => fallback,
            Self::Right(right) => right,
        }
    }

    pub fn right_or_else(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(left) => f(left),
            Self::Right(right) => right,
        }
    }

    ///Flip is its own inverse: two flips restore the tag and the payload.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(left) => Either::Right(left),
            Self::Right(right) => Either::Left(right),
        }
    }
}

impl<T> Either<T, T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(left) => left,
            Self::Right(right) => right,
        }
    }
}

impl<L: Debug, R: Debug> Debug for Either<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left(arg0) => f.debug_tuple("Left").field(arg0).finish(),
            Self::Right(arg0) => f.debug_tuple("Right").field(arg0).finish(),
        }
    }
}

impl<L: Clone, R: Clone> Clone for Either<L, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Left(arg0) => Self::Left(arg0.clone()),
            Self::Right(arg0) => Self::Right(arg0.clone()),
        }
    }
}

impl<L: Copy, R: Copy> Copy for Either<L, R> {}

impl<L: PartialEq, R: PartialEq> PartialEq for Either<L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Left(a), Self::Left(b)) => a == b,
            (Self::Right(a), Self::Right(b)) => a == b,
            _ => false,
        }
    }
}

impl<L: Eq, R: Eq> Eq for Either<L, R> {}

impl<L: PartialOrd, R: PartialOrd> PartialOrd for Either<L, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Left(a), Self::Left(b)) => a.partial_cmp(b),
            (Self::Right(a), Self::Right(b)) => a.partial_cmp(b),
            (Self::Left(_), Self::Right(_)) => Some(Ordering::Less),
            (Self::Right(_), Self::Left(_)) => Some(Ordering::Greater),
        }
    }
}

impl<L: Ord, R: Ord> Ord for Either<L, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Left(a), Self::Left(b)) => a.cmp(b),
            (Self::Right(a), Self::Right(b)) => a.cmp(b),
            (Self::Left(_), Self::Right(_)) => Ordering::Less,
            (Self::Right(_), Self::Left(_)) => Ordering::Greater,
        }
    }
}

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        //the tag feeds the hasher first, so Left(x) and Right(x)
        //hash differently when L and R are the same type
        match self {
            Self::Left(left) => {
                state.write_u8(0);
                left.hash(state);
            }
            Self::Right(right) => {
                state.write_u8(1);
                right.hash(state);
            }
        }
    }
}

pub fn left<L, R>(left: L) -> Either<L, R> {
    Either::Left(left)
}

pub fn right<L, R>(right: R) -> Either<L, R> {
    Either::Right(right)
}
