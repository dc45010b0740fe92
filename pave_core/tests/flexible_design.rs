//! End-to-end checks of the flexible pavement design pipeline through the
//! public API.

use pave_core::calculations::flexible_design::{calculate, FlexibleDesignInput};
use pave_core::calculations::required_sn::{esal_sweep, linspace, residual_curve};
use pave_core::calculations::{
    compute_provided_sn, evaluate_design, solve_required_sn, DesignInputs, PavementLayer, SolverSettings,
};
use pave_core::materials::{PavementMaterial, SubgradeSupport};
use pave_core::reliability::Reliability;
use pave_core::PaveError;

fn reference_inputs() -> DesignInputs {
    DesignInputs::from_reliability(
        5_000_000.0,
        Reliability::R90,
        0.45,
        4.2,
        2.5,
        SubgradeSupport::ResilientModulus { mr_psi: 5000.0 },
    )
    .expect("reference inputs are valid")
}

fn reference_layers() -> Vec<PavementLayer> {
    vec![
        PavementLayer::from_material(PavementMaterial::AsphaltConcrete, 10.0, 1.0).unwrap(),
        PavementLayer::from_material(PavementMaterial::CementTreatedBase, 20.0, 1.0).unwrap(),
        PavementLayer::from_material(PavementMaterial::GranularSubbase, 15.0, 1.0).unwrap(),
    ]
}

#[test]
fn reference_scenario_fails_by_about_one_sn() {
    let input = FlexibleDesignInput {
        label: "Reference".to_string(),
        inputs: reference_inputs(),
        layers: reference_layers(),
    };

    let result = calculate(&input).unwrap();

    assert_eq!(result.sn_required, 5.137);
    assert_eq!(result.sn_provided, 4.193);
    assert!(!result.passed);
    assert_eq!(result.margin, -0.944);

    let labels: Vec<_> = result
        .layer_contributions
        .iter()
        .map(|c| c.label.clone().unwrap_or_default())
        .collect();
    assert_eq!(labels, ["AC", "CTB", "GSB"]);
}

#[test]
fn solved_sn_satisfies_design_equation_across_inputs() {
    let base = reference_inputs();
    for &w18 in &[5.0e4, 2.5e5, 1.0e6, 5.0e6, 2.0e7, 1.0e8] {
        for &mr in &[3000.0, 5000.0, 10_000.0, 20_000.0] {
            for reliability in [Reliability::R50, Reliability::R90, Reliability::R99_9] {
                let inputs = DesignInputs {
                    design_esals: w18,
                    subgrade_modulus_psi: mr,
                    reliability_zr: reliability.zr(),
                    ..base
                };
                match solve_required_sn(&inputs) {
                    Ok(report) => {
                        assert!(
                            inputs.residual(report.sn_exact).abs() < 1e-5,
                            "residual too large for W18={w18}, Mr={mr}, R={reliability}"
                        );
                        assert!((0.1..=20.0).contains(&report.sn_exact));
                    }
                    Err(PaveError::NoRootInBracket { .. }) => {
                        // Only legitimate when the bracket endpoints share a sign
                        assert!(inputs.residual(0.1) * inputs.residual(20.0) > 0.0);
                    }
                    Err(other) => panic!("unexpected error {other:?}"),
                }
            }
        }
    }
}

#[test]
fn residual_is_strictly_increasing_over_bracket() {
    let curve = residual_curve(&reference_inputs(), &linspace(0.1, 20.0, 400)).unwrap();
    assert!(curve.windows(2).all(|w| w[1].residual > w[0].residual));
}

#[test]
fn higher_reliability_needs_more_structure() {
    let sns: Vec<f64> = Reliability::ALL
        .iter()
        .map(|r| {
            let inputs = DesignInputs { reliability_zr: r.zr(), ..reference_inputs() };
            solve_required_sn(&inputs).unwrap().sn_exact
        })
        .collect();
    assert!(sns.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn surface_layer_drainage_is_ignored() {
    let mut layers = reference_layers();
    let baseline = compute_provided_sn(&layers).unwrap();

    layers[0] = PavementLayer::new(0.44, 10.0, 0.5).with_label("AC");
    let overridden = compute_provided_sn(&layers).unwrap();

    assert_eq!(overridden.contributions[0].drainage_coefficient, 1.0);
    assert_eq!(baseline.sn_exact, overridden.sn_exact);
}

#[test]
fn margin_sign_matches_pass_flag() {
    let inputs = reference_inputs();
    let required = solve_required_sn(&inputs).unwrap().sn_required;

    for ac_cm in [5.0, 10.0, 15.0, 20.0, 25.0] {
        let mut layers = reference_layers();
        layers[0].thickness_cm = ac_cm;
        let provided = compute_provided_sn(&layers).unwrap().sn_provided;
        let check = evaluate_design(required, provided);
        assert_eq!(check.passed, provided - required >= 0.0);
        assert_eq!(check.passed, check.margin >= 0.0);
    }
}

#[test]
fn sweep_matches_individual_solves() {
    let esals = linspace(1.0e6, 1.0e7, 5);
    let sweep = esal_sweep(&reference_inputs(), &esals, &SolverSettings::default());

    for point in sweep {
        let single = solve_required_sn(&DesignInputs {
            design_esals: point.design_esals,
            ..reference_inputs()
        })
        .unwrap();
        assert_eq!(point.outcome.unwrap().sn_exact, single.sn_exact);
    }
}

#[test]
fn design_input_from_json() {
    let json = r#"{
        "label": "JSON Road",
        "inputs": {
            "design_esals": 5000000.0,
            "reliability_zr": -1.282,
            "overall_std_dev": 0.45,
            "initial_serviceability": 4.2,
            "terminal_serviceability": 2.5,
            "subgrade_modulus_psi": 5000.0
        },
        "layers": [
            { "material": "AC", "layer_coefficient": 0.44, "thickness_cm": 10.0, "drainage_coefficient": 1.0 },
            { "material": "CTB", "layer_coefficient": 0.23, "thickness_cm": 20.0, "drainage_coefficient": 1.0 },
            { "material": "GSB", "layer_coefficient": 0.11, "thickness_cm": 15.0, "drainage_coefficient": 1.0 }
        ]
    }"#;

    let input: FlexibleDesignInput = serde_json::from_str(json).unwrap();
    let result = calculate(&input).unwrap();
    assert_eq!(result.sn_provided, 4.193);
}
