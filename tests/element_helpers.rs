use std::sync::Arc;

use approx::assert_relative_eq;
use fea_elements::math::MAX_GAUSS_POINTS;
use fea_elements::prelude::*;

fn inclined_bar() -> BarElement {
    BarElement::new(
        Node::new(1.0, 2.0, 0.5),
        Node::new(4.0, 6.0, 2.5),
        Section::wide_flange(0.3, 0.2, 0.012, 0.008),
        Material::steel(),
    )
}

fn all_helpers() -> Vec<Box<dyn ElementHelper>> {
    vec![
        Box::new(EulerBernoulliBeamHelper::new(BeamDirection::Y)),
        Box::new(EulerBernoulliBeamHelper::new(BeamDirection::Z)),
        Box::new(ShaftHelper::new()),
    ]
}

#[test]
fn test_iso_local_round_trip() {
    let element = Element::from(inclined_bar());
    let length = element.as_bar().unwrap().length().unwrap();

    for helper in all_helpers() {
        for i in 0..=10 {
            let xi = -1.0 + 0.2 * i as f64;
            let xi = xi.clamp(-1.0, 1.0);
            let x = helper.iso_to_local(&element, xi).unwrap();
            assert_relative_eq!(helper.local_to_iso(&element, x).unwrap(), xi, epsilon = 1e-14);

            let x = length * i as f64 / 10.0;
            let back = helper.iso_to_local(&element, helper.local_to_iso(&element, x).unwrap());
            assert_relative_eq!(back.unwrap(), x, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_jacobian_is_half_length() {
    let element = Element::from(inclined_bar());
    let length = element.as_bar().unwrap().length().unwrap();

    for helper in all_helpers() {
        for xi in [-1.0, -0.3, 0.7] {
            let j = helper.j_matrix_at(&element, xi).unwrap();
            assert_eq!(j.shape(), (1, 1));
            assert_relative_eq!(j[(0, 0)], length / 2.0, epsilon = 1e-14);
        }
    }
}

#[test]
fn test_matrix_dimensions_follow_dof_order() {
    let element = Element::from(inclined_bar());

    for helper in all_helpers() {
        let n = helper.dof_order(&element).unwrap().len();
        assert_eq!(helper.calc_local_k_matrix(&element).unwrap().shape(), (n, n));
        assert_eq!(helper.calc_local_m_matrix(&element).unwrap().shape(), (n, n));
        assert_eq!(helper.calc_local_c_matrix(&element).unwrap().shape(), (n, n));
        assert_eq!(helper.b_matrix_at(&element, 0.0).unwrap().ncols(), n);
        assert_eq!(helper.n_matrix_at(&element, 0.0).unwrap().ncols(), n);
    }
}

#[test]
fn test_dof_order_is_stable() {
    let element = Element::from(inclined_bar());

    for helper in all_helpers() {
        let first = helper.dof_order(&element).unwrap();
        for _ in 0..3 {
            assert_eq!(helper.dof_order(&element).unwrap(), first);
        }
    }
}

#[test]
fn test_quad_rejected_by_bar_helpers() {
    let quad = Element::from(QuadElement::new(
        [
            Node::new(0.0, 0.0, 0.0),
            Node::new(1.0, 0.0, 0.0),
            Node::new(1.0, 1.0, 0.0),
            Node::new(0.0, 1.0, 0.0),
        ],
        0.01,
    ));

    for helper in all_helpers() {
        assert!(matches!(helper.dof_order(&quad), Err(FEAError::TypeMismatch(_))));
        assert!(matches!(helper.j_matrix_at(&quad, 0.0), Err(FEAError::TypeMismatch(_))));
        assert!(matches!(helper.iso_to_local(&quad, 0.0), Err(FEAError::TypeMismatch(_))));
        assert!(matches!(helper.calc_local_m_matrix(&quad), Err(FEAError::TypeMismatch(_))));
    }
}

#[test]
fn test_global_dof_scatter() {
    let element = Element::from(inclined_bar());
    let helper = EulerBernoulliBeamHelper::new(BeamDirection::Z);
    let order = helper.dof_order(&element).unwrap();

    let indices = global_dof_indices(&order, &[3, 7]).unwrap();
    assert_eq!(indices, vec![19, 23, 43, 47]);

    assert!(matches!(
        global_dof_indices(&order, &[3]),
        Err(FEAError::InvalidInput(_))
    ));
}

#[test]
fn test_parallel_computation_matches_serial() {
    let section: Arc<dyn SectionProvider> = Arc::new(Section::rectangular(0.3, 0.5));
    let material: Arc<dyn MaterialProvider> = Arc::new(Material::steel());

    let elements: Vec<Element> = (0..16)
        .map(|i| {
            let x = i as f64;
            BarElement::with_providers(
                Node::new(x, 0.0, 0.0),
                Node::new(x + 1.0 + 0.1 * x, 0.5, 0.0),
                section.clone(),
                material.clone(),
            )
            .into()
        })
        .collect();

    let helper = EulerBernoulliBeamHelper::new(BeamDirection::Y);
    let serial: Vec<Mat> = elements
        .iter()
        .map(|e| helper.calc_local_k_matrix(e).unwrap())
        .collect();

    let parallel: Vec<Mat> = std::thread::scope(|scope| {
        let handles: Vec<_> = elements
            .chunks(4)
            .map(|chunk| {
                let helper = &helper;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|e| helper.calc_local_k_matrix(e).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(serial, parallel);
}

#[test]
fn test_options_loaded_from_json() {
    let options = IntegrationOptions::from_json(r#"{ "extra_points": 1 }"#).unwrap();
    let helper = EulerBernoulliBeamHelper::new(BeamDirection::Z).with_options(options);
    assert_eq!(helper.integration_options().extra_points, 1);

    let element = Element::from(inclined_bar());
    assert_relative_eq!(
        helper.calc_local_k_matrix(&element).unwrap(),
        EulerBernoulliBeamHelper::new(BeamDirection::Z)
            .calc_local_k_matrix(&element)
            .unwrap(),
        max_relative = 1e-12
    );
}

#[test]
fn test_gauss_rule_limit() {
    let element = Element::from(inclined_bar());
    let helper = EulerBernoulliBeamHelper::new(BeamDirection::Z)
        .with_options(IntegrationOptions::default().with_extra_points(MAX_GAUSS_POINTS));

    assert!(matches!(
        helper.calc_local_m_matrix(&element),
        Err(FEAError::OutOfRange(_))
    ));
}
