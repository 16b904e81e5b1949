use modelkit::prelude::*;

#[derive(Model)]
struct Point {
    #[node]
    x: i32,

    #[node(value)]
    y: i32,

    #[node(derived)]
    label: String,

    #[allow(dead_code)]
    cache: Vec<u8>,
}

#[derive(Model)]
struct Empty;

fn main() {
    let a = Point {
        x: 1,
        y: 2,
        label: "a".to_string(),
        cache: Vec::new(),
    };
    let b = Point {
        x: 1,
        y: 2,
        label: "b".to_string(),
        cache: vec![1],
    };

    assert_eq!(a, b);
    assert_eq!(a.repr(), "Point(label='a', x=1, y=2)");
    assert_eq!(Empty.repr(), "Empty()");
}
