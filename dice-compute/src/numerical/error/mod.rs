pub mod kind;

pub use dice_error::Error;
