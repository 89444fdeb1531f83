//quantum_tests.rs

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    use cvsim::config::NumericConfig;
    use cvsim::error::LinalgError;
    use cvsim::linalg::ComplexMatrix;
    use cvsim::quantum::{Ket, Observable};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn sample_observable() -> (ComplexMatrix, Ket) {
        let operator = ComplexMatrix::new(vec![
            vec![c(1.0, 0.0), c(0.0, -1.0)],
            vec![c(0.0, 1.0), c(2.0, 0.0)],
        ]).unwrap();
        let half = 2.0_f64.sqrt() / 2.0;
        let state = Ket::from_amplitudes(vec![c(half, 0.0), c(0.0, half)]).unwrap();
        (operator, state)
    }

    #[test]
    fn test_ket_probabilities() {
        let ket = Ket::from_amplitudes(vec![c(0.0, 1.0), c(-1.0, 0.0)]).unwrap();

        // Divides by the norm, sqrt(2), not by its square
        assert!(approx_eq(ket.probability(0).unwrap(), FRAC_1_SQRT_2, 1e-12));
        assert!(approx_eq(ket.probability(1).unwrap(), FRAC_1_SQRT_2, 1e-12));

        assert!(approx_eq(ket.normalized_probability(0).unwrap(), 0.5, 1e-12));
        assert!(approx_eq(ket.normalized_probability(1).unwrap(), 0.5, 1e-12));
    }

    #[test]
    fn test_probability_conventions_agree_for_unit_kets() {
        let ket = Ket::from_amplitudes(vec![c(0.6, 0.0), c(0.0, 0.8)]).unwrap();
        assert!(approx_eq(ket.norm().unwrap(), 1.0, 1e-12));

        for index in 0..2 {
            assert!(approx_eq(
                ket.probability(index).unwrap(),
                ket.normalized_probability(index).unwrap(),
                1e-12
            ));
        }
        assert!(approx_eq(ket.probability(1).unwrap(), 0.64, 1e-12));
    }

    #[test]
    fn test_probability_index_out_of_range() {
        let ket = Ket::from_amplitudes(vec![1.0, 0.0]).unwrap();
        assert!(matches!(ket.probability(2), Err(LinalgError::InvalidArgument(_))));
    }

    #[test]
    fn test_transition_probability() {
        let ket = Ket::from_amplitudes(vec![c(0.0, 1.0), c(-1.0, 0.0)]).unwrap();
        let ket2 = Ket::from_amplitudes(vec![c(1.0, 0.0), c(0.0, -1.0)]).unwrap();

        // ⟨ket|ket2⟩ = -i + i = 0
        assert!(approx_eq(ket.transition_probability(&ket2).unwrap(), 0.0, 1e-12));
        assert!(approx_eq(ket2.transition_probability(&ket).unwrap(), 0.0, 1e-12));

        // A ket and any nonzero multiple of it overlap completely
        let scaled = Ket::new(ket.amplitudes().scale(c(0.0, 3.0))).unwrap();
        assert!(approx_eq(ket.transition_probability(&scaled).unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn test_transition_probability_requires_same_dimension() {
        let ket = Ket::from_amplitudes(vec![1.0, 0.0]).unwrap();
        let other = Ket::from_amplitudes(vec![1.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            ket.transition_probability(&other),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_bra_is_adjoint_row() {
        let ket = Ket::from_amplitudes(vec![c(1.0, 2.0), c(0.0, -1.0)]).unwrap();
        let bra = ket.bra();
        assert_eq!(bra.shape(), (1, 2));
        assert_eq!(bra.get(0, 0), Some(c(1.0, -2.0)));
        assert_eq!(bra.get(0, 1), Some(c(0.0, 1.0)));
    }

    #[test]
    fn test_tensor_of_kets() {
        let zero = Ket::from_amplitudes(vec![1.0, 0.0]).unwrap();
        let plus = Ket::from_amplitudes(vec![FRAC_1_SQRT_2, FRAC_1_SQRT_2]).unwrap();

        let joint = zero.tensor(&plus);
        assert_eq!(joint.dimension(), 4);
        assert!(approx_eq(joint.normalized_probability(0).unwrap(), 0.5, 1e-12));
        assert!(approx_eq(joint.normalized_probability(1).unwrap(), 0.5, 1e-12));
        assert_eq!(joint.normalized_probability(2).unwrap(), 0.0);
    }

    #[test]
    fn test_measure_basis_state() {
        let mut rng = StdRng::seed_from_u64(7);
        let ket = Ket::from_amplitudes(vec![0.0, 1.0, 0.0]).unwrap();

        for _ in 0..100 {
            assert_eq!(ket.measure(&mut rng), 1);
        }
    }

    #[test]
    fn test_measure_follows_born_rule() {
        let mut rng = StdRng::seed_from_u64(42);
        // Unnormalized on purpose: probabilities 1/4 and 3/4
        let ket = Ket::from_amplitudes(vec![c(1.0, 0.0), c(0.0, 3.0_f64.sqrt())]).unwrap();

        let samples = 20_000;
        let ones = (0..samples).filter(|_| ket.measure(&mut rng) == 1).count();
        let fraction = ones as f64 / samples as f64;
        assert!(approx_eq(fraction, 0.75, 0.02), "fraction of |1⟩ was {}", fraction);
    }

    #[test]
    fn test_observable_mean_and_variance() {
        let (operator, state) = sample_observable();
        let observable = Observable::new(operator, &state).unwrap();

        let mean = observable.mean().unwrap();
        let variance = observable.variance().unwrap();

        assert!(approx_eq(mean, 2.5, 1e-10));
        assert!(variance >= 0.0);
        assert!(approx_eq(variance, 0.25, 1e-10));
        assert!(approx_eq(observable.standard_deviation().unwrap(), 0.5, 1e-10));
    }

    #[test]
    fn test_eigenstate_has_zero_variance() {
        let operator = ComplexMatrix::new(vec![vec![3.0, 0.0], vec![0.0, -1.0]]).unwrap();
        let state = Ket::from_amplitudes(vec![0.0, 1.0]).unwrap();
        let observable = Observable::new(operator, &state).unwrap();

        assert!(approx_eq(observable.mean().unwrap(), -1.0, 1e-12));
        assert!(approx_eq(observable.variance().unwrap(), 0.0, 1e-12));
    }

    #[test]
    fn test_observable_requires_hermitian_operator() {
        let operator = ComplexMatrix::new(vec![
            vec![c(1.0, 0.0), c(0.0, 1.0)],
            vec![c(0.0, 1.0), c(2.0, 0.0)],
        ]).unwrap();
        let (_, state) = sample_observable();

        assert!(matches!(
            Observable::new(operator, &state),
            Err(LinalgError::InvalidOperator(_))
        ));
    }

    #[test]
    fn test_observable_requires_square_operator() {
        let operator = ComplexMatrix::zeros(2, 3).unwrap();
        let (_, state) = sample_observable();

        assert!(matches!(
            Observable::new(operator, &state),
            Err(LinalgError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_observable_requires_matching_dimension() {
        let (_, state) = sample_observable();
        assert!(matches!(
            Observable::new(ComplexMatrix::identity(3).unwrap(), &state),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_observable_tolerance_is_opt_in() {
        let operator = ComplexMatrix::new(vec![
            vec![c(1.0, 0.0), c(0.0, -1.0 - 1e-13)],
            vec![c(0.0, 1.0), c(2.0, 0.0)],
        ]).unwrap();
        let (_, state) = sample_observable();

        assert!(Observable::new(operator.clone(), &state).is_err());

        let observable = Observable::with_config(operator, &state, &NumericConfig::with_epsilon(1e-9)).unwrap();
        assert!(approx_eq(observable.mean().unwrap(), 2.5, 1e-9));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: NumericConfig = serde_json::from_str(r#"{ "hermitian_epsilon": 1e-8 }"#).unwrap();
        assert_eq!(config.hermitian_epsilon, 1e-8);
        assert_eq!(config.unitary_epsilon, 0.0);
        assert_eq!(config.interference_epsilon, NumericConfig::default().interference_epsilon);
    }
}
