pub use self::{catalog::*, fraction::*, language::*, precision::*};

mod catalog;
mod fraction;
mod language;
mod precision;
