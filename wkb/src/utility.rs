/// Returns `n` evenly spaced values covering `[start, end]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let step = (end - start) / (n as f64 - 1.);

    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Failure modes of [`brent_root_method`].
#[derive(Debug, Clone, PartialEq)]
pub enum BrentError<E> {
    /// The initial points do not bracket a root.
    NoSignChange,
    /// Iteration budget exhausted before the bracket shrank below tolerance,
    /// with the best estimate and bracket reached so far.
    IterationBudget { best: f64, bracket: (f64, f64) },
    /// The searched function failed to evaluate.
    Evaluation(E),
}

/// Brent root search of `f` starting from the two points `point_a` and
/// `point_b`, each given as `[x, f(x)]`, iterated until the bracket width
/// falls below `err` or for at most `max_iter` iterations.
///
/// The bracketing invariant is kept throughout: the returned estimate always
/// lies inside an interval over which `f` changes sign.
pub fn brent_root_method<E>(
    point_a: [f64; 2],
    point_b: [f64; 2],
    mut f: impl FnMut(f64) -> Result<f64, E>,
    err: f64,
    max_iter: usize,
) -> Result<f64, BrentError<E>> {
    let [mut a, mut fa] = point_a;
    let [mut b, mut fb] = point_b;

    if fa * fb > 0. {
        return Err(BrentError::NoSignChange);
    }

    let (mut c, mut fc) = (a, fa);
    let mut d = b - a;
    let mut e = b - a;

    for _ in 0..max_iter {
        if fb * fc > 0. {
            (c, fc) = (a, fa);
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            (a, fa) = (b, fb);
            (b, fb) = (c, fc);
            (c, fc) = (a, fa);
        }

        let tol = 2. * f64::EPSILON * b.abs() + 0.5 * err;
        let half = 0.5 * (c - b);

        if half.abs() <= tol || fb == 0. {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // inverse quadratic interpolation, reduced to the secant form
            // when only two distinct points are available
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2. * half * s, 1. - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;

                (
                    s * (2. * half * q * (q - r) - (b - a) * (r - 1.)),
                    (q - 1.) * (r - 1.) * (s - 1.),
                )
            };

            if p > 0. {
                q = -q;
            }
            p = p.abs();

            if 2. * p < (3. * half * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = half;
                e = d;
            }
        } else {
            d = half;
            e = d;
        }

        (a, fa) = (b, fb);
        b += if d.abs() > tol { d } else { tol * half.signum() };
        fb = f(b).map_err(BrentError::Evaluation)?;
    }

    Err(BrentError::IterationBudget {
        best: b,
        bracket: (b.min(c), b.max(c)),
    })
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::{BrentError, brent_root_method, linspace};

    #[test]
    fn test_linspace() {
        let grid = linspace(0., 1., 5);
        assert_eq!(grid, vec![0., 0.25, 0.5, 0.75, 1.]);

        assert_eq!(linspace(2., 5., 1), vec![2.]);
    }

    #[test]
    fn test_brent_root() {
        let f = |x: f64| Ok::<f64, ()>(x * x - 2.);

        let root = brent_root_method([1., -1.], [2., 2.], f, 1e-10, 100).unwrap();
        assert_abs_diff_eq!(root, 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_brent_no_bracket() {
        let f = |x: f64| Ok::<f64, ()>(x * x + 1.);

        let result = brent_root_method([1., 2.], [2., 5.], f, 1e-10, 100);
        assert_eq!(result, Err(BrentError::NoSignChange));
    }

    #[test]
    fn test_brent_iteration_budget() {
        let f = |x: f64| Ok::<f64, ()>(x * x - 2.);

        let result = brent_root_method([1., -1.], [2., 2.], f, 1e-15, 2);
        match result {
            Err(BrentError::IterationBudget { best, bracket }) => {
                assert!(bracket.0 <= best && best <= bracket.1);
                assert!((1.0..=2.0).contains(&best));
            }
            other => panic!("expected IterationBudget, got {:?}", other),
        }
    }
}
