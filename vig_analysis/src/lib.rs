mod coincidence;
mod histogram;
mod keyguess;

pub use coincidence::{average_column_ic, best_key_length, estimate_key_length, index_of_coincidence};
pub use histogram::Histogram;
pub use keyguess::{guess_key, plausible_plaintext, ColumnScore, KeyGuess};
