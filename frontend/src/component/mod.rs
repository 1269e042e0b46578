pub(crate) mod prelude {
    pub use yew::prelude::*;
    pub use cardpager_common::*;
    pub use std::rc::Rc;
}

pub mod paginator;
