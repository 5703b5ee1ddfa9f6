//! Bounded resource levels.
//!
//! A [`BoundedLevel`] is a quantity pinned to `[0, capacity]`. Entities use the
//! `checked_*` queries while validating a command and the mutating methods
//! while applying the resulting event. The mutating methods clamp, so the
//! bound holds even for events that were never validated.

/// Numeric kinds a [`BoundedLevel`] can hold.
pub trait Quantity: Copy + PartialOrd + core::fmt::Debug + core::fmt::Display {
    const ZERO: Self;

    /// Strictly greater than zero (and finite, for floats).
    fn is_positive(self) -> bool;

    /// `None` on integer overflow.
    fn add_checked(self, rhs: Self) -> Option<Self>;

    /// `None` when `rhs > self`.
    fn sub_checked(self, rhs: Self) -> Option<Self>;
}

impl Quantity for u32 {
    const ZERO: Self = 0;

    fn is_positive(self) -> bool {
        self > 0
    }

    fn add_checked(self, rhs: Self) -> Option<Self> {
        u32::checked_add(self, rhs)
    }

    fn sub_checked(self, rhs: Self) -> Option<Self> {
        u32::checked_sub(self, rhs)
    }
}

impl Quantity for f64 {
    const ZERO: Self = 0.0;

    fn is_positive(self) -> bool {
        self.is_finite() && self > 0.0
    }

    fn add_checked(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn sub_checked(self, rhs: Self) -> Option<Self> {
        // IEEE subtraction of a smaller value from a larger one never goes negative.
        (rhs <= self).then_some(self - rhs)
    }
}

/// A level in `[0, capacity]` with a fixed, positive capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedLevel<Q> {
    level: Q,
    capacity: Q,
}

impl<Q: Quantity> BoundedLevel<Q> {
    /// Empty level. `None` if `capacity` is not positive.
    pub fn empty(capacity: Q) -> Option<Self> {
        capacity.is_positive().then_some(Self {
            level: Q::ZERO,
            capacity,
        })
    }

    /// Level starting at capacity. `None` if `capacity` is not positive.
    pub fn full(capacity: Q) -> Option<Self> {
        capacity.is_positive().then_some(Self {
            level: capacity,
            capacity,
        })
    }

    pub fn level(&self) -> Q {
        self.level
    }

    pub fn capacity(&self) -> Q {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.level == Q::ZERO
    }

    pub fn is_full(&self) -> bool {
        self.level >= self.capacity
    }

    pub fn headroom(&self) -> Q {
        self.capacity.sub_checked(self.level).unwrap_or(Q::ZERO)
    }

    /// Level after adding `amount`, or `None` if it would exceed capacity.
    ///
    /// The bound is inclusive: filling exactly to capacity succeeds.
    pub fn checked_fill(&self, amount: Q) -> Option<Q> {
        self.level
            .add_checked(amount)
            .filter(|next| *next <= self.capacity)
    }

    /// Level after removing `amount`, or `None` if there isn't enough.
    pub fn checked_drain(&self, amount: Q) -> Option<Q> {
        self.level.sub_checked(amount)
    }

    /// How much of `amount` a saturating fill would actually add.
    pub fn saturating_gain(&self, amount: Q) -> Q {
        match self.checked_fill(amount) {
            Some(_) => amount,
            None => self.headroom(),
        }
    }

    /// Add `amount`, clamping at capacity. Returns the amount gained.
    pub fn fill_saturating(&mut self, amount: Q) -> Q {
        let gained = self.saturating_gain(amount);
        self.level = match self.checked_fill(amount) {
            Some(next) => next,
            None => self.capacity,
        };
        gained
    }

    /// Remove `amount`, clamping at zero. Returns the amount removed.
    pub fn drain_saturating(&mut self, amount: Q) -> Q {
        match self.checked_drain(amount) {
            Some(next) => {
                self.level = next;
                amount
            }
            None => {
                let drained = self.level;
                self.level = Q::ZERO;
                drained
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capacity_must_be_positive() {
        assert!(BoundedLevel::<u32>::empty(0).is_none());
        assert!(BoundedLevel::<f64>::empty(0.0).is_none());
        assert!(BoundedLevel::<f64>::empty(-1.0).is_none());
        assert!(BoundedLevel::<f64>::full(f64::NAN).is_none());
        assert!(BoundedLevel::<f64>::full(f64::INFINITY).is_none());
    }

    #[test]
    fn empty_and_full_constructors() {
        let empty = BoundedLevel::empty(50.0).unwrap();
        assert_eq!(empty.level(), 0.0);
        assert!(empty.is_empty());

        let full = BoundedLevel::full(4000u32).unwrap();
        assert_eq!(full.level(), 4000);
        assert!(full.is_full());
        assert_eq!(full.headroom(), 0);
    }

    #[test]
    fn checked_fill_is_inclusive_at_capacity() {
        let level = BoundedLevel::empty(50.0).unwrap();
        assert_eq!(level.checked_fill(50.0), Some(50.0));
        assert_eq!(level.checked_fill(51.0), None);
    }

    #[test]
    fn checked_fill_treats_integer_overflow_as_exceeding() {
        let level = BoundedLevel::full(u32::MAX).unwrap();
        assert_eq!(level.checked_fill(1), None);
    }

    #[test]
    fn saturating_fill_clamps_and_reports_gain() {
        let mut level = BoundedLevel::full(100u32).unwrap();
        level.drain_saturating(30);
        assert_eq!(level.fill_saturating(50), 30);
        assert_eq!(level.level(), 100);
    }

    #[test]
    fn drain_saturating_stops_at_zero() {
        let mut level = BoundedLevel::full(10u32).unwrap();
        assert_eq!(level.drain_saturating(25), 10);
        assert!(level.is_empty());
    }

    proptest! {
        /// Property: no mix of saturating fills and drains leaves the bounds.
        #[test]
        fn level_stays_within_bounds(
            capacity in 1u32..10_000,
            ops in proptest::collection::vec((any::<bool>(), 0u32..20_000), 0..64)
        ) {
            let mut level = BoundedLevel::empty(capacity).unwrap();
            for (fill, amount) in ops {
                if fill {
                    level.fill_saturating(amount);
                } else {
                    level.drain_saturating(amount);
                }
                prop_assert!(level.level() <= level.capacity());
            }
        }
    }
}
