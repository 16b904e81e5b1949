//! Models built with `#[derive(Model)]`, each module paired with the tests
//! that exercise it through the public `modelkit` surface.


pub(crate) mod prelude {
    pub use modelkit::prelude::*;
}
