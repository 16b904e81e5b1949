use modelkit::prelude::*;

#[derive(Model)]
struct Animal {
    #[node]
    legs: u8,
}

#[derive(Model)]
struct Dog {
    #[model(base)]
    animal: Animal,

    #[node(value)]
    name: String,
}

fn main() {
    let dog = Dog {
        animal: Animal { legs: 4 },
        name: "rex".to_string(),
    };
    let animal = Animal { legs: 4 };

    assert_eq!(animal.try_eq(&dog), Ok(true));
    assert_eq!(dog.try_eq(&animal), Ok(false));
    assert_eq!(dog.repr(), "Dog(legs=4, name='rex')");
}
