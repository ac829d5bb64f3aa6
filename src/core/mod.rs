// Domain-layer modules and shared errors/models
pub mod builder {
    pub use crate::builder::*;
}

pub mod fields {
    pub use crate::fields::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
