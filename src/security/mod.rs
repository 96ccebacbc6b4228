pub mod screen;
pub mod signatures;

pub use screen::{SecurityScreen, SecurityVerdict};
pub use signatures::{AttackClass, Signature, INPUT_TOO_LONG, SIGNATURES};
