pub mod eval;
pub mod pow;
pub mod verify;
