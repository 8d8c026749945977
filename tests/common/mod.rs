use rand::distributions::{Alphanumeric, Slice};
use rand::Rng;
use rand_distr::WeightedIndex;

/// Every operator surface form in the default table
pub const SURFACES: [&str; 24] = [
    "int", "sum", "production", "prod", "to", "of", "(", ")", "=", ">=", "<=", "!=", "~=", "+",
    "-", "**", "*", "/", "\\", ",", "^", "_", "@", "#",
];

pub fn random_string(rng: &mut impl Rng) -> String {
    let surface = Slice::new(&SURFACES).unwrap();
    let choice = WeightedIndex::new([1, 3, 2]).unwrap();

    let mut res = String::new();
    for _ in 0..30 {
        match rng.sample(&choice) {
            0 => res.push(' '),
            1 => res.push(rng.sample(Alphanumeric).into()),
            2 => res.push_str(rng.sample(&surface)),
            _ => unreachable!(),
        }
    }
    res
}
