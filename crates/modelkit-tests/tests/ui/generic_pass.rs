use modelkit::prelude::*;
use std::fmt::Debug;

#[derive(Model)]
struct Labelled<T>
where
    T: Debug,
{
    #[node]
    value: T,
}

#[derive(Model)]
#[model(crate = "::modelkit")]
struct Explicit {
    #[node]
    inner: Labelled<u8>,
}

fn main() {
    let explicit = Explicit {
        inner: Labelled { value: 7 },
    };

    assert_eq!(explicit.repr(), "Explicit(inner=Labelled(value=7))");
    assert_eq!(explicit.child_attributes(), ["inner"]);
}
