use rand::Rng;

/// Uniform weight initializer over `[-bound, bound]`,
/// with `bound = sqrt(6 / (input_count + output_count))`.
///
/// The bound is computed once from the network's global
/// input and output counts and shared by every layer.
pub struct XavierUniform<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    bound: f32,
}

impl<'a, R> XavierUniform<'a, R>
where
    R: Rng + ?Sized,
{
    /// Wraps `rng`, sampling with the bound derived
    /// from the given node counts.
    ///
    /// # Examples
    /// ```
    /// use nodenet::rng::XavierUniform;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut sampler = XavierUniform::new(&mut rng, 2, 1);
    ///
    /// assert_eq!(sampler.bound(), 2f32.sqrt());
    /// assert!(sampler.sample().abs() <= sampler.bound());
    /// ```
    pub fn new(rng: &'a mut R, input_count: usize, output_count: usize) -> XavierUniform<'a, R> {
        XavierUniform {
            rng,
            bound: (6.0 / (input_count + output_count) as f32).sqrt(),
        }
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }

    /// Draws the next weight or bias.
    pub fn sample(&mut self) -> f32 {
        self.rng.gen_range(-self.bound..=self.bound)
    }
}
