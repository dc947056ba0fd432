// special lint
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
// rust compiler lints
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

mod array;
mod into_iter;
mod raw_buf;

pub(crate) use raw_buf::RawBuf;
pub use {
    array::DynamicArray,
    into_iter::IntoIter,
    raw_buf::{Error, Result},
};

fn _assertion() {
    fn assert_sync_send<T: Sync + Send>() {}

    assert_sync_send::<DynamicArray<u64>>();
    assert_sync_send::<IntoIter<u64>>();
}

#[test]
fn miri() {
    fn inner<T: Clone + PartialEq + std::fmt::Debug>(make: impl Fn(usize) -> T) {
        const STEP: usize = if cfg!(miri) { 10 } else { 1_000 };

        let mut array = DynamicArray::new();
        for i in 0..STEP {
            array.push(make(i));
        }
        assert_eq!(array.len(), STEP);
        assert!(array.capacity() >= STEP);

        for i in (0..STEP).step_by(2).rev() {
            array.remove(i);
        }
        assert_eq!(array.len(), STEP / 2);

        let clone = array.clone();
        assert_eq!(clone, array);
        assert_eq!(clone.capacity(), clone.len());

        array.clear();
        assert_eq!(array.len(), 0);
        assert_eq!(clone.len(), STEP / 2);

        let drained: Vec<T> = clone.into_iter().collect();
        assert_eq!(drained.len(), STEP / 2);
    }

    inner(|i| i as u64);
    inner(|i| i.to_string());
}
