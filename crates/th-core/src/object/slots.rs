//! Fixed-capacity set of distinct values
//!
//! Backs both the hunter's kit and the treasure record. A value goes into
//! the first empty slot and removal empties its slot without shifting the
//! others, so slot order is the display order.

use thiserror::Error;

/// Why a value could not be inserted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("already held")]
    Duplicate,

    #[error("no free slot (capacity {capacity})")]
    Full { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSet<T> {
    slots: Vec<Option<T>>,
}

impl<T: Copy + PartialEq> SlotSet<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn contains(&self, value: T) -> bool {
        self.slots.contains(&Some(value))
    }

    /// Put a value that is not yet held into the first empty slot
    pub fn insert(&mut self, value: T) -> Result<(), SlotError> {
        if self.contains(value) {
            return Err(SlotError::Duplicate);
        }
        let capacity = self.capacity();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(SlotError::Full { capacity })?;
        *slot = Some(value);
        Ok(())
    }

    /// Empty the slot holding `value`; returns false if it was not held
    pub fn remove(&mut self, value: T) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(value)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Add empty slots up to `capacity`. Never shrinks; held values keep
    /// their slots.
    pub fn grow(&mut self, capacity: usize) {
        if capacity > self.slots.len() {
            self.slots.resize(capacity, None);
        }
    }

    /// Held values in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = SlotSet::with_capacity(3);
        assert_eq!(set.insert(1), Ok(()));
        assert_eq!(set.insert(1), Err(SlotError::Duplicate));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_respects_capacity() {
        let mut set = SlotSet::with_capacity(2);
        set.insert('a').unwrap();
        set.insert('b').unwrap();
        assert!(set.is_full());
        assert_eq!(set.insert('c'), Err(SlotError::Full { capacity: 2 }));
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut set = SlotSet::with_capacity(2);
        set.insert(1).unwrap();
        set.insert(2).unwrap();
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.insert(3), Ok(()));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_insert_fills_first_gap() {
        let mut set = SlotSet::with_capacity(4);
        for v in [1, 2, 3] {
            set.insert(v).unwrap();
        }
        assert!(set.remove(2));
        assert!(set.remove(1));
        set.insert(4).unwrap();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![4, 3]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_full());
    }

    #[test]
    fn test_grow_keeps_values() {
        let mut set = SlotSet::with_capacity(1);
        set.insert(9).unwrap();
        set.grow(4);
        assert_eq!(set.capacity(), 4);
        assert!(set.contains(9));
        set.grow(2);
        assert_eq!(set.capacity(), 4);
        set.insert(5).unwrap();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![9, 5]);
    }
}
