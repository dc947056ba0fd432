//! Random-contents demo. Everything here is a plain caller of the array's
//! public contract.

use {
    dynarray::DynamicArray,
    rand::{distributions::Uniform, prelude::*},
    std::fmt::Display,
};

fn print<T: Display>(array: &DynamicArray<T>) {
    let mut first = true;
    print!("[");
    for item in array {
        if !first {
            print!("; ");
        }
        print!("{item}");
        first = false;
    }
    println!("]");
}

fn numbers() {
    let mut rng = thread_rng();
    let number = Uniform::new_inclusive(0, 100);

    let mut array = DynamicArray::new();

    println!("Inserting 20 random numbers:");
    for _ in 0..20 {
        array.push(number.sample(&mut rng));
    }
    print(&array);

    println!("Sorting by ascending:");
    array.as_mut_slice().sort_unstable();
    print(&array);

    println!("Deleting in steps of 2:");
    {
        let mut temp: DynamicArray<i32> = array.iter().copied().skip(1).step_by(2).collect();
        array.swap(&mut temp);
    }
    print(&array);

    println!("Inserting 10 random numbers:");
    for _ in 0..10 {
        let index = rng.gen_range(0..array.len());
        array.insert(index, number.sample(&mut rng));
    }
    print(&array);

    println!("Clearing of container:");
    array.clear();
    print(&array);
}

fn random_word(rng: &mut ThreadRng) -> String {
    let letter = Uniform::new_inclusive(b'a', b'z');
    let length = rng.gen_range(5..=20);
    (0..length).map(|_| letter.sample(rng) as char).collect()
}

fn words() {
    let mut rng = thread_rng();

    let mut array = DynamicArray::new();

    println!("Inserting 15 random words:");
    for _ in 0..15 {
        array.push(random_word(&mut rng));
    }
    print(&array);

    println!("Sorting by ascending:");
    array.as_mut_slice().sort();
    print(&array);

    println!("Deleting words with 'abcde':");
    {
        let mut temp: DynamicArray<String> = array
            .iter()
            .filter(|word| !word.chars().any(|c| matches!(c, 'a'..='e')))
            .cloned()
            .collect();
        array.swap(&mut temp);
    }
    print(&array);

    println!("Inserting 3 random words:");
    for _ in 0..3 {
        // the filter may have kept nothing, so appending is a valid position
        let index = rng.gen_range(0..=array.len());
        let word = random_word(&mut rng);
        array.insert(index, word);
    }
    print(&array);
}

fn main() {
    numbers();
    words();
}
