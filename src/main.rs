use quadlist::{Entry, SkipList};

fn show(name: &str, entry: Option<&Entry<&str, i32>>) {
    match entry {
        Some(entry) => println!("{name}: ({}, {})", entry.key(), entry.value()),
        None => println!("{name}: none"),
    }
}

fn main() {
    let mut map = SkipList::with_seed(2026);
    for (key, value) in [("b", 2), ("d", 4), ("f", 6), ("h", 8), ("j", 10)] {
        map.insert(key, value);
    }
    map.print();
    println!("height: {}", map.height());

    show("find(d)", map.find(&"d"));
    show("ceiling(c)", map.ceiling_entry(&"c"));
    show("floor(e)", map.floor_entry(&"e"));
    show("greater(d)", map.greater_entry(&"d"));
    show("lesser(d)", map.lesser_entry(&"d"));

    map.remove(&"d");
    println!();
    map.print();
    show("find(d)", map.find(&"d"));
    show("ceiling(c)", map.ceiling_entry(&"c"));
}
