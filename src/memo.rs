/// Single-entry cache that recomputes only when its key changes.
///
/// Keys are compared with `PartialEq`; callback-bearing keys compare by
/// identity through [`crate::Shared`], so a new closure counts as a change.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the cached value for `key`, computing and storing it first if
    /// the key differs from the cached one.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached, value)) = &self.entry {
            if *cached == key {
                return value.clone();
            }
        }

        let value = compute(&key);
        self.entry = Some((key, value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DisabledHours;
    use std::cell::Cell;

    #[test]
    fn test_recomputes_only_on_key_change() {
        let calls = Cell::new(0);
        let mut memo = Memo::new();
        let square = |memo: &mut Memo<u32, u32>, key: u32| {
            memo.get_or_compute(key, |k| {
                calls.set(calls.get() + 1);
                k * k
            })
        };

        assert_eq!(square(&mut memo, 3), 9);
        assert_eq!(square(&mut memo, 3), 9);
        assert_eq!(calls.get(), 1);

        assert_eq!(square(&mut memo, 4), 16);
        assert_eq!(calls.get(), 2);

        // only the latest key is kept
        assert_eq!(square(&mut memo, 3), 9);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_new_callback_is_a_new_key() {
        let calls = Cell::new(0);
        let mut memo: Memo<DisabledHours, usize> = Memo::default();
        let count = |memo: &mut Memo<DisabledHours, usize>, key: &DisabledHours| {
            memo.get_or_compute(key.clone(), |k| {
                calls.set(calls.get() + 1);
                (**k)().len()
            })
        };

        let hours = DisabledHours::new(|| vec![1, 2]);
        assert_eq!(count(&mut memo, &hours), 2);
        assert_eq!(count(&mut memo, &hours.clone()), 2);
        assert_eq!(calls.get(), 1);

        // same behavior, different closure
        assert_eq!(count(&mut memo, &DisabledHours::new(|| vec![1, 2])), 2);
        assert_eq!(calls.get(), 2);
    }
}
