/// A built interpolant that can be evaluated at arbitrary points.
pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points, order-preserving
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
