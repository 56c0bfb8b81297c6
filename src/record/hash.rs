use crate::*;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Random alphanumeric identifier (62-symbol alphabet) naming one archive.
pub fn hash() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(FILE_HASH_LENGTH)
        .map(char::from)
        .collect()
}
