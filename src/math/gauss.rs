//! Gauss-Legendre quadrature over arbitrary 1D intervals
//!
//! The abscissae/weights are the standard rules on [-1, 1]. An n-point rule
//! integrates polynomials up to degree 2n - 1 exactly.

use super::Mat;
use crate::error::{FEAError, FEAResult};

/// Largest tabulated rule
pub const MAX_GAUSS_POINTS: usize = 8;

static GAUSS_1: [(f64, f64); 1] = [(0.0, 2.0)];

static GAUSS_2: [(f64, f64); 2] = [
    (-0.577_350_269_189_625_8, 1.0),
    (0.577_350_269_189_625_8, 1.0),
];

static GAUSS_3: [(f64, f64); 3] = [
    (-0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
    (0.0, 0.888_888_888_888_888_9),
    (0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
];

static GAUSS_4: [(f64, f64); 4] = [
    (-0.861_136_311_594_052_6, 0.347_854_845_137_453_9),
    (-0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
    (0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
    (0.861_136_311_594_052_6, 0.347_854_845_137_453_9),
];

static GAUSS_5: [(f64, f64); 5] = [
    (-0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.0, 0.568_888_888_888_888_9),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
];

static GAUSS_6: [(f64, f64); 6] = [
    (-0.932_469_514_203_152_1, 0.171_324_492_379_170_4),
    (-0.661_209_386_466_264_5, 0.360_761_573_048_138_6),
    (-0.238_619_186_083_196_9, 0.467_913_934_572_691_0),
    (0.238_619_186_083_196_9, 0.467_913_934_572_691_0),
    (0.661_209_386_466_264_5, 0.360_761_573_048_138_6),
    (0.932_469_514_203_152_1, 0.171_324_492_379_170_4),
];

static GAUSS_7: [(f64, f64); 7] = [
    (-0.949_107_912_342_758_5, 0.129_484_966_168_869_7),
    (-0.741_531_185_599_394_5, 0.279_705_391_489_276_6),
    (-0.405_845_151_377_397_2, 0.381_830_050_505_118_9),
    (0.0, 0.417_959_183_673_469_4),
    (0.405_845_151_377_397_2, 0.381_830_050_505_118_9),
    (0.741_531_185_599_394_5, 0.279_705_391_489_276_6),
    (0.949_107_912_342_758_5, 0.129_484_966_168_869_7),
];

static GAUSS_8: [(f64, f64); 8] = [
    (-0.960_289_856_497_536_3, 0.101_228_536_290_376_3),
    (-0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (-0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (-0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (0.960_289_856_497_536_3, 0.101_228_536_290_376_3),
];

static GAUSS_TABLES: [&[(f64, f64)]; MAX_GAUSS_POINTS] = [
    &GAUSS_1, &GAUSS_2, &GAUSS_3, &GAUSS_4, &GAUSS_5, &GAUSS_6, &GAUSS_7, &GAUSS_8,
];

/// Abscissa/weight pairs of the n-point rule on [-1, 1]
pub fn gauss_legendre(points: usize) -> FEAResult<&'static [(f64, f64)]> {
    if points == 0 || points > MAX_GAUSS_POINTS {
        return Err(FEAError::OutOfRange(format!(
            "{} Gauss points requested, rules exist for 1..={}",
            points, MAX_GAUSS_POINTS
        )));
    }
    Ok(GAUSS_TABLES[points - 1])
}

/// Minimal point count that integrates a polynomial of the given degree exactly
pub fn points_for_degree(degree: usize) -> usize {
    degree / 2 + 1
}

/// Integrates a matrix-valued function over [a, b] with an n-point rule
#[derive(Debug, Clone, Copy)]
pub struct GaussianIntegrator {
    a: f64,
    b: f64,
    points: usize,
}

impl GaussianIntegrator {
    /// Create an integrator for the interval [a, b]
    pub fn new(a: f64, b: f64, points: usize) -> FEAResult<Self> {
        gauss_legendre(points)?;
        if !a.is_finite() || !b.is_finite() {
            return Err(FEAError::InvalidInput(format!(
                "integration bounds must be finite, got [{}, {}]",
                a, b
            )));
        }
        Ok(Self { a, b, points })
    }

    /// Rule points rescaled to [a, b] as (x, weight) pairs
    pub fn scaled_points(&self) -> FEAResult<Vec<(f64, f64)>> {
        let half = (self.b - self.a) / 2.0;
        let mid = (self.b + self.a) / 2.0;

        Ok(gauss_legendre(self.points)?
            .iter()
            .map(|&(xi, w)| (mid + half * xi, w * half))
            .collect())
    }

    /// Weighted sum of `f` evaluated at the scaled points
    ///
    /// Every evaluation must return a matrix of the same shape.
    pub fn integrate<F>(&self, mut f: F) -> FEAResult<Mat>
    where
        F: FnMut(f64) -> FEAResult<Mat>,
    {
        let mut sum: Option<Mat> = None;

        for (x, w) in self.scaled_points()? {
            let value = f(x)?;

            match sum.as_mut() {
                None => sum = Some(value * w),
                Some(acc) => {
                    if acc.shape() != value.shape() {
                        return Err(FEAError::InvalidInput(format!(
                            "integrand changed shape from {:?} to {:?}",
                            acc.shape(),
                            value.shape()
                        )));
                    }
                    *acc += value * w;
                }
            }
        }

        log::trace!(
            "integrated over [{}, {}] with {} points",
            self.a,
            self.b,
            self.points
        );

        // The table is never empty
        sum.ok_or_else(|| FEAError::InvalidInput("empty Gauss rule".to_string()))
    }

    /// Scalar convenience wrapper around [`integrate`](Self::integrate)
    pub fn integrate_scalar<F>(&self, mut f: F) -> FEAResult<f64>
    where
        F: FnMut(f64) -> f64,
    {
        let m = self.integrate(|x| Ok(Mat::from_element(1, 1, f(x))))?;
        Ok(m[(0, 0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(coeffs: &[f64], x: f64) -> f64 {
        coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    fn poly_integral(coeffs: &[f64], a: f64, b: f64) -> f64 {
        coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| {
                let p = (k + 1) as i32;
                c * (b.powi(p) - a.powi(p)) / p as f64
            })
            .sum()
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        for n in 1..=MAX_GAUSS_POINTS {
            let total: f64 = gauss_legendre(n).unwrap().iter().map(|p| p.1).sum();
            assert_relative_eq!(total, 2.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_exact_for_degree_2n_minus_1() {
        for n in 1..=MAX_GAUSS_POINTS {
            let degree = 2 * n - 1;
            let coeffs: Vec<f64> = (0..=degree).map(|k| 1.0 + 0.5 * k as f64).collect();
            let (a, b) = (-0.3, 1.7);

            let intg = GaussianIntegrator::new(a, b, n).unwrap();
            let value = intg.integrate_scalar(|x| poly(&coeffs, x)).unwrap();
            let exact = poly_integral(&coeffs, a, b);

            assert_relative_eq!(value, exact, epsilon = 1e-10, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_extra_points_do_not_change_result() {
        let coeffs = [2.0, -1.0, 0.5, 3.0];
        let minimal = points_for_degree(3);
        let base = GaussianIntegrator::new(0.0, 2.5, minimal)
            .unwrap()
            .integrate_scalar(|x| poly(&coeffs, x))
            .unwrap();

        for n in minimal + 1..=MAX_GAUSS_POINTS {
            let value = GaussianIntegrator::new(0.0, 2.5, n)
                .unwrap()
                .integrate_scalar(|x| poly(&coeffs, x))
                .unwrap();
            assert_relative_eq!(value, base, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_matrix_integrand() {
        let intg = GaussianIntegrator::new(-1.0, 1.0, 2).unwrap();
        let m = intg
            .integrate(|x| Ok(Mat::from_row_slice(1, 2, &[1.0, x * x])))
            .unwrap();

        assert_relative_eq!(m[(0, 0)], 2.0, epsilon = 1e-14);
        assert_relative_eq!(m[(0, 1)], 2.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_shape_change_rejected() {
        let intg = GaussianIntegrator::new(-1.0, 1.0, 2).unwrap();
        let result = intg.integrate(|x| {
            if x < 0.0 {
                Ok(Mat::zeros(1, 1))
            } else {
                Ok(Mat::zeros(2, 1))
            }
        });
        assert!(matches!(result, Err(FEAError::InvalidInput(_))));
    }

    #[test]
    fn test_unsupported_point_count() {
        assert!(matches!(gauss_legendre(0), Err(FEAError::OutOfRange(_))));
        assert!(matches!(
            GaussianIntegrator::new(0.0, 1.0, MAX_GAUSS_POINTS + 1),
            Err(FEAError::OutOfRange(_))
        ));
    }
}
