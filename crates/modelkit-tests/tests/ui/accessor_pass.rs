use modelkit::prelude::*;

#[derive(Model)]
#[model(
    name = "Rect",
    accessor(ident = "area", derived),
    accessor(ident = "dims", walk = false)
)]
struct Rectangle {
    #[node]
    width: u32,

    #[node]
    height: u32,
}

impl Rectangle {
    fn area(&self) -> u32 {
        self.width * self.height
    }

    fn dims(&self) -> Vec<u32> {
        vec![self.width, self.height]
    }
}

fn main() {
    let rect = Rectangle {
        width: 2,
        height: 3,
    };

    assert_eq!(
        rect.repr(),
        "Rect(area=6, dims=[2, 3], height=3, width=2)"
    );
    assert_eq!(Rectangle::schema().child_attributes(), ["height", "width"]);
}
