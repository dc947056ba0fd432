use dynarray::DynamicArray;

fn main() {
    let mut first: DynamicArray<String> =
        ["foo", "bar", "baz"].iter().map(|s| s.to_string()).collect();

    // A clone is an independent copy sized exactly to its length
    let second = first.clone();
    assert_eq!(second.capacity(), second.len());
    first.push("qux".to_string());
    assert_eq!(second.len(), 3);

    // Swap exchanges whole containers in O(1)
    let mut third = DynamicArray::new();
    third.swap(&mut first);
    assert!(first.is_empty());
    assert_eq!(third.len(), 4);

    println!("Example 2 passed: clone and swap work!");
}
