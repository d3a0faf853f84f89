/// Outcome of pulling a cursor or resuming a producer.
///
/// A cursor answers every [`advance`](crate::Cursor::advance) with either the next
/// value (`Yielded`) or the terminal signal (`Complete`). Plain sequences complete
/// with `()`; producers complete with the value their body returned.
///
/// # Examples
///
/// ```rust
/// use seqflow::Step;
///
/// let next: Step<i32> = Step::Yielded(7);
/// let done: Step<i32> = Step::Complete(());
///
/// assert_eq!(next.map_yielded(|v| v * 2), Step::Yielded(14));
/// assert_eq!(done.yielded_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The cursor produced its next value.
    Yielded(Y),
    /// The cursor is exhausted.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step carries a value.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is the terminal signal.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into the yielded value, discarding a completion.
    ///
    /// ```rust
    /// use seqflow::Step;
    ///
    /// assert_eq!(Step::<_, ()>::Yielded(3).yielded_value(), Some(3));
    /// assert_eq!(Step::<i32, _>::Complete("end").yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Maps the yielded value, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the completion value, leaving a yield untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Complete`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}

impl<Y> From<Step<Y>> for Option<Y> {
    fn from(step: Step<Y>) -> Self {
        step.yielded_value()
    }
}
