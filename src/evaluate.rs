//// # Evaluation
////
//// Turns a validated pair of distribution parameters and a query into the
//// number to show, the region to highlight, and the text of the result.

use crate::error::InvalidInput;
use crate::query::*;
use crate::stats::Normal;
use log::debug;

/// Mean and standard deviation of the distribution under study. Values of
/// this type always have a finite, strictly positive standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParameters {
    normal: Normal,
}

impl DistributionParameters {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, InvalidInput> {
        Ok(Self {
            normal: Normal::new(mean, std_dev)?,
        })
    }

    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    pub fn distribution(&self) -> &Normal {
        &self.normal
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// A probability in `[0, 1]`, except for `Equals` queries where this is
    /// the value of the density and can exceed one.
    pub probability: f64,
    pub region: Region,
    pub label: String,
}

pub fn evaluate(params: &DistributionParameters, query: &Query) -> EvaluationResult {
    let normal = params.distribution();
    let probability = match *query {
        Query::Equals(x) => normal.pdf(x),
        Query::LessThan(x) | Query::LessOrEqual(x) => normal.cdf(x),
        Query::GreaterThan(x) | Query::GreaterOrEqual(x) => normal.survival(x),
        Query::IntervalInclusive(a, b)
        | Query::IntervalExclusive(a, b)
        | Query::IntervalLeftOpen(a, b)
        | Query::IntervalRightOpen(a, b) => normal.interval(a, b),
    };
    let label = label(query, probability);
    debug!(
        "evaluated {:?} under N({}, {}): {}",
        query,
        params.mean(),
        params.std_dev(),
        probability
    );
    EvaluationResult {
        probability,
        region: query.region(),
        label,
    }
}

fn label(query: &Query, probability: f64) -> String {
    match *query {
        Query::Equals(x) => format!("P(X = {}) = {:.5}", x, probability),
        Query::LessThan(x) => format!("P(X < {}) = {:.5}", x, probability),
        Query::LessOrEqual(x) => format!("P(X <= {}) = {:.5}", x, probability),
        Query::GreaterThan(x) => format!("P(X > {}) = {:.5}", x, probability),
        Query::GreaterOrEqual(x) => format!("P(X >= {}) = {:.5}", x, probability),
        Query::IntervalInclusive(..)
        | Query::IntervalExclusive(..)
        | Query::IntervalLeftOpen(..)
        | Query::IntervalRightOpen(..) => format!("{}: {:.5}", query.kind(), probability),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(mean: f64, sd: f64) -> DistributionParameters {
        DistributionParameters::new(mean, sd).unwrap()
    }

    #[test]
    fn test_known_values() {
        let std = params(0.0, 1.0);
        let r = evaluate(&std, &Query::LessOrEqual(0.0));
        assert!((r.probability - 0.5).abs() < 1e-9);

        let r = evaluate(&std, &Query::IntervalInclusive(-1.0, 1.0));
        assert!((r.probability - 0.6827).abs() < 1e-4);

        let r = evaluate(&params(5.0, 2.0), &Query::GreaterThan(5.0));
        assert!((r.probability - 0.5).abs() < 1e-9);

        let r = evaluate(&std, &Query::Equals(0.0));
        assert!((r.probability - 0.3989).abs() < 1e-4);
    }

    #[test]
    fn test_density_can_exceed_one() {
        let narrow = params(0.0, 0.1);
        let r = evaluate(&narrow, &Query::Equals(0.0));
        assert!(r.probability > 3.9);
    }

    #[test]
    fn test_complementary_tails() {
        use rand::prelude::*;
        use rand_distr::Uniform;
        use rand_xoshiro::Xoroshiro128Plus;

        let mut rng = Xoroshiro128Plus::seed_from_u64(3462);
        let means = Uniform::new(-100.0, 100.0);
        let sds = Uniform::new(0.01, 50.0);
        let offsets = Uniform::new(-6.0, 6.0);
        for _ in 0..1000 {
            let p = params(rng.sample(&means), rng.sample(&sds));
            let x = p.mean() + rng.sample(&offsets) * p.std_dev();
            let lt = evaluate(&p, &Query::LessThan(x)).probability;
            let ge = evaluate(&p, &Query::GreaterOrEqual(x)).probability;
            assert!((lt + ge - 1.0).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&lt));
            assert!((0.0..=1.0).contains(&ge));
        }
    }

    #[test]
    fn test_interval_variants_agree() {
        use rand::prelude::*;
        use rand_distr::StandardNormal;
        use rand_xoshiro::Xoroshiro128Plus;

        let mut rng = Xoroshiro128Plus::seed_from_u64(12344);
        let p = params(1.5, 3.0);
        for _ in 0..200 {
            let u: f64 = rng.sample::<f64, _>(StandardNormal) * 4.0;
            let v: f64 = rng.sample::<f64, _>(StandardNormal) * 4.0;
            let (a, b) = if u <= v { (u, v) } else { (v, u) };
            let expected = p.distribution().cdf(b) - p.distribution().cdf(a);
            for kind in QueryKind::ALL.into_iter().filter(|k| k.is_interval()) {
                let q = Query::interval(kind, a, b).unwrap().unwrap();
                let r = evaluate(&p, &q);
                assert_eq!(r.probability, expected);
                assert_eq!(r.region, q.region());
            }
        }
    }

    #[test]
    fn test_non_positive_sd_is_rejected() {
        for sd in [0.0, -0.0, -1e-12, -3.0, f64::NEG_INFINITY] {
            assert!(DistributionParameters::new(0.0, sd).is_err());
            assert!(DistributionParameters::new(42.0, sd).is_err());
        }
    }

    #[test]
    fn test_labels() {
        let std = params(0.0, 1.0);
        assert_eq!(
            evaluate(&std, &Query::LessOrEqual(0.0)).label,
            "P(X <= 0) = 0.50000"
        );
        assert_eq!(
            evaluate(&std, &Query::Equals(0.5)).label,
            "P(X = 0.5) = 0.35207"
        );
        assert_eq!(
            evaluate(&std, &Query::GreaterThan(-1.0)).label,
            "P(X > -1) = 0.84134"
        );
        assert_eq!(
            evaluate(&std, &Query::IntervalInclusive(-1.0, 1.0)).label,
            "P(a <= X <= b): 0.68269"
        );
        assert_eq!(
            evaluate(&std, &Query::IntervalLeftOpen(-1.0, 1.0)).label,
            "P(a < X <= b): 0.68269"
        );
    }
}
