use rand::{distributions::uniform::SampleRange, Rng};

/// Every randomness-consuming operation in the engine goes through this
/// trait so tests can script the exact draws (tournament sampling, crossover
/// coin flips, mutation rolls).
pub trait RngWrapper {
    fn gen_range<R>(&mut self, range: R) -> usize
    where
        R: SampleRange<usize>;

    /// Unbiased coin flip, used to pick the source parent of one gene.
    fn coin_flip(&mut self) -> bool;

    /// Uniform draw from [0, 1).
    fn unit_fraction(&mut self) -> f32;
}

/// Adapts any `rand::Rng` to the engine's randomness seam.
pub struct Random<'a, T>
where
    T: Rng,
{
    rng: &'a mut T,
}

impl<'a, T> Random<'a, T>
where
    T: Rng,
{
    pub fn new(rng: &'a mut T) -> Self {
        Random { rng }
    }
}

impl<'a, T> RngWrapper for Random<'a, T>
where
    T: Rng,
{
    fn gen_range<R>(&mut self, range: R) -> usize
    where
        R: SampleRange<usize>,
    {
        self.rng.gen_range(range)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn unit_fraction(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}


#[cfg(test)]
mod tests {
    use common_test::seeded_rng;

    use super::{Random, RngWrapper};

    #[test]
    fn test_random_unit_fraction_stays_in_unit_interval() {
        let mut rng = seeded_rng();
        let mut random = Random::new(&mut rng);

        for _ in 0..1000 {
            let value = random.unit_fraction();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_random_gen_range_respects_bounds() {
        let mut rng = seeded_rng();
        let mut random = Random::new(&mut rng);

        for _ in 0..1000 {
            let value = random.gen_range(3..10);
            assert!((3..10).contains(&value));
        }
    }
}
