/// Overwrite `slot` only when the update carried a value.
pub fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// A partial update over a closed set of fields of `T`.
pub trait Patch<T: Clone> {
    /// Write every present field into `target`.
    fn apply_to(self, target: &mut T);

    fn is_empty(&self) -> bool;

    /// Merge into a copy of `current`, leaving the original untouched.
    fn merged(self, current: &T) -> T
    where
        Self: Sized,
    {
        let mut next = current.clone();
        self.apply_to(&mut next);
        next
    }
}
