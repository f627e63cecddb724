use intset::IntSet;

fn main() {
    let mut x: IntSet = IntSet::new();
    let mut y: IntSet = IntSet::new();

    x.insert(1);
    x.insert(144);
    x.insert(9);
    println!("{} has {} items", x, x.len());

    y.insert(9);
    y.insert(42);
    println!("{} has {} items", y, y.len());

    x.union_with(&y);
    println!("{} union has {} items", x, x.len());

    println!("{} {}", x.contains(9), x.contains(123));

    x.clear();
    println!("{} is cleared", x);

    let z = y.copy();
    y.remove(9);
    println!("{} has {} items", y, y.len());
    println!("{} copy has {} items", z, z.len());
}
