//! Property tests: under any operation sequence the array must agree with a
//! `Vec` model.

use {
    dynarray::DynamicArray,
    quickcheck::{Arbitrary, Gen},
    quickcheck_macros::quickcheck,
};

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    RemoveRange(usize, usize),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 8 {
            // biased towards growth so sequences reach interesting sizes
            0 | 1 | 2 => Op::Push(i32::arbitrary(g)),
            3 => Op::Pop,
            4 => Op::Insert(usize::arbitrary(g), i32::arbitrary(g)),
            5 => Op::Remove(usize::arbitrary(g)),
            6 => Op::RemoveRange(usize::arbitrary(g), usize::arbitrary(g)),
            _ => Op::Clear,
        }
    }
}

/// Runs `ops` against the array and the model, with raw indices wrapped into
/// the valid range of the moment.
fn apply(ops: &[Op]) -> (DynamicArray<i32>, Vec<i32>) {
    let mut array = DynamicArray::new();
    let mut model = Vec::new();

    for op in ops {
        match *op {
            Op::Push(value) => {
                array.push(value);
                model.push(value);
            }
            Op::Pop => assert_eq!(array.pop(), model.pop()),
            Op::Insert(index, value) => {
                let index = index % (model.len() + 1);
                array.insert(index, value);
                model.insert(index, value);
            }
            Op::Remove(index) => {
                if !model.is_empty() {
                    let index = index % model.len();
                    assert_eq!(array.remove(index), model.remove(index));
                }
            }
            Op::RemoveRange(from, to) => {
                let to = to % (model.len() + 1);
                let from = from % (to + 1);
                array.remove_range(from..to);
                model.drain(from..to);
            }
            Op::Clear => {
                array.clear();
                model.clear();
            }
        }
    }
    (array, model)
}

#[quickcheck]
fn behaves_like_vec(ops: Vec<Op>) -> bool {
    let (array, model) = apply(&ops);
    array.len() == model.len()
        && array.capacity() >= array.len()
        && array.as_slice() == model.as_slice()
}

#[quickcheck]
fn clone_matches_and_stays_independent(ops: Vec<Op>) -> bool {
    let (mut array, model) = apply(&ops);
    let clone = array.clone();
    let copied = clone.as_slice() == model.as_slice() && clone.capacity() == clone.len();

    // mutating the original must not reach the clone
    array.push(i32::MIN);
    copied && clone.as_slice() == model.as_slice()
}

#[quickcheck]
fn push_preserves_order(values: Vec<i32>) -> bool {
    let mut array = DynamicArray::new();
    for &value in &values {
        array.push(value);
    }
    array.as_slice() == values.as_slice()
}

#[quickcheck]
fn into_iter_yields_all(values: Vec<String>) -> bool {
    let array: DynamicArray<String> = values.iter().cloned().collect();
    array.into_iter().collect::<Vec<_>>() == values
}

#[quickcheck]
fn swap_is_an_involution(left: Vec<i32>, right: Vec<i32>) -> bool {
    let mut first: DynamicArray<i32> = left.iter().copied().collect();
    let mut second: DynamicArray<i32> = right.iter().copied().collect();

    first.swap(&mut second);
    let swapped = first.as_slice() == right.as_slice() && second.as_slice() == left.as_slice();

    first.swap(&mut second);
    swapped && first.as_slice() == left.as_slice() && second.as_slice() == right.as_slice()
}

#[quickcheck]
fn clear_keeps_capacity(values: Vec<u64>) -> bool {
    let mut array: DynamicArray<u64> = values.iter().copied().collect();
    let capacity = array.capacity();
    array.clear();
    array.is_empty() && array.capacity() == capacity
}

macro_rules! per_type_roundtrip {
    ($($ty:ty => $make:expr),* $(,)?) => {
        paste::paste! {$(
            #[test]
            fn [<roundtrip_ $ty:snake>]() {
                let values: Vec<$ty> = (0..64).map($make).collect();
                let mut array = DynamicArray::new();
                for value in values.clone() {
                    array.push(value);
                }
                assert_eq!(array.as_slice(), values.as_slice());
                assert_eq!(array.into_iter().collect::<Vec<_>>(), values);
            }
        )*}
    };
}

per_type_roundtrip! {
    u8 => |i: i32| i as u8,
    u64 => |i: i32| i as u64,
    String => |i: i32| i.to_string(),
    bool => |i: i32| i % 2 == 0,
}
