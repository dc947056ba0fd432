use dynarray::DynamicArray;

fn main() {
    let mut array = DynamicArray::new();

    // Append, then insert into the middle
    array.push(10);
    array.push(20);
    array.push(30);
    array.insert(1, 15);
    assert_eq!(array.as_slice(), &[10, 15, 20, 30]);

    // Remove one element, then a whole range
    assert_eq!(array.remove(1), 15);
    array.remove_range(0..2);
    assert_eq!(array.as_slice(), &[30]);

    // Clear keeps the capacity for reuse
    let capacity = array.capacity();
    array.clear();
    assert_eq!((array.len(), array.capacity()), (0, capacity));

    println!("Example 1 passed: basic array operations work!");
}
