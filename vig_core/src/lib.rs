pub mod cipher;
pub mod error;
pub mod key;

pub use cipher::{decode, encode, Vigenere};
pub use error::CipherError;
pub use key::Key;
