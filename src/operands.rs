//! Random operand generation for benchmark trials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::matrix::Matrix;

/// The two input matrices for one benchmark trial.
///
/// Generated fresh per trial and discarded afterwards - nothing is cached
/// or shared across trials.
#[derive(Debug, Clone)]
pub struct Operands {
    pub a: Matrix,
    pub b: Matrix,
}

impl Operands {
    /// Generate two independent n × n matrices, every cell drawn uniformly
    /// from [0, 1).
    ///
    /// `Some(seed)` makes the output reproducible; `None` seeds from OS
    /// entropy, so repeated generations are statistically distinct.
    pub fn generate(n: usize, seed: Option<u64>) -> Result<Operands> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let a = random_matrix(n, &mut rng)?;
        let b = random_matrix(n, &mut rng)?;
        Ok(Operands { a, b })
    }

    pub fn n(&self) -> usize {
        self.a.rows()
    }
}

/// One n × n matrix of uniform [0, 1) values from the given rng.
pub fn random_matrix<R: Rng>(n: usize, rng: &mut R) -> Result<Matrix> {
    let mut m = Matrix::zeros(n, n)?;
    for cell in m.as_mut_slice() {
        *cell = rng.gen_range(0.0..1.0);
    }
    Ok(m)
}
