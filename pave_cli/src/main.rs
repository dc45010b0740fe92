//! # Pavestack CLI Application
//!
//! Terminal interface for AASHTO 1993 flexible pavement design.
//! Prompts for each input with the usual defaults (press Enter to accept),
//! runs the design check, then prints a summary and the JSON result.

mod logging;

use std::io::{self, BufRead, Write};

use pave_core::calculations::flexible_design::{calculate, DesignResult, FlexibleDesignInput};
use pave_core::calculations::{DesignInputs, PavementLayer};
use pave_core::materials::{PavementMaterial, SubgradeSupport};
use pave_core::reliability::Reliability;
use pave_core::units::{Mpa, Psi};
use pave_core::PaveResult;

/// Default layer stack: material, thickness (cm)
const DEFAULT_LAYERS: [(PavementMaterial, f64); 3] = [
    (PavementMaterial::AsphaltConcrete, 10.0),
    (PavementMaterial::CementTreatedBase, 20.0),
    (PavementMaterial::GranularSubbase, 15.0),
];

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.replace(',', "").parse().ok())
        .unwrap_or(default)
}

fn prompt_reliability() -> Reliability {
    loop {
        let Some(answer) = read_line("Reliability R (%) [90]: ") else {
            return Reliability::default();
        };
        match answer.trim_end_matches('%').parse::<f64>().map(Reliability::from_percent) {
            Ok(Ok(reliability)) => return reliability,
            _ => {
                let levels: Vec<String> = Reliability::ALL.iter().map(|r| r.percent().to_string()).collect();
                println!("  Choose one of: {}", levels.join(", "));
            }
        }
    }
}

fn prompt_material(index: usize, default: PavementMaterial) -> PavementMaterial {
    loop {
        let prompt = format!("  Layer {} material [{}]: ", index + 1, default.code());
        let Some(answer) = read_line(&prompt) else {
            return default;
        };
        match PavementMaterial::from_str_flexible(&answer) {
            Ok(material) => return material,
            Err(e) => {
                println!("  {}", e);
                let codes: Vec<&str> = PavementMaterial::ALL.iter().map(|m| m.code()).collect();
                println!("  Known materials: {}", codes.join(", "));
            }
        }
    }
}

fn collect_input() -> PaveResult<FlexibleDesignInput> {
    println!("1) Traffic & Reliability");
    let design_esals = prompt_f64("Design ESALs W18 [5,000,000]: ", 5_000_000.0);
    let reliability = prompt_reliability();
    println!("  Zr = {:.3}", reliability.zr());
    let overall_std_dev = prompt_f64("Overall standard deviation So [0.45]: ", 0.45);
    println!();

    println!("2) Serviceability");
    let p0 = prompt_f64("Initial serviceability P0 [4.2]: ", 4.2);
    let pt = prompt_f64("Terminal serviceability Pt [2.5]: ", 2.5);
    println!("  ΔPSI = {:.1} - {:.1} = {:.1}", p0, pt, p0 - pt);
    println!();

    println!("3) Subgrade");
    let subgrade = match read_line("Enter Mr directly or from CBR? (mr/cbr) [mr]: ").as_deref() {
        Some(s) if s.eq_ignore_ascii_case("cbr") => SubgradeSupport::Cbr {
            cbr_percent: prompt_f64("CBR (%) [5.0]: ", 5.0),
        },
        _ => SubgradeSupport::ResilientModulus {
            mr_psi: prompt_f64("Subgrade resilient modulus Mr (psi) [5000]: ", 5000.0),
        },
    };
    let mr_psi = subgrade.resilient_modulus_psi()?;
    let mr_mpa: Mpa = Psi(mr_psi).into();
    println!("  Mr = {:.0} psi ({:.1} MPa)", mr_psi, mr_mpa.0);
    println!();

    let inputs = DesignInputs::from_reliability(design_esals, reliability, overall_std_dev, p0, pt, subgrade)?;

    println!("4) Pavement Layers (top to bottom)");
    let layer_count = prompt_f64("Number of layers (2-5) [3]: ", 3.0).round().clamp(2.0, 5.0) as usize;

    let mut layers = Vec::with_capacity(layer_count);
    for index in 0..layer_count {
        let (default_material, default_cm) = DEFAULT_LAYERS
            .get(index)
            .copied()
            .unwrap_or((PavementMaterial::ImprovedSubgrade, 15.0));
        let material = prompt_material(index, default_material);
        let thickness_cm = prompt_f64(&format!("  Layer {} thickness (cm) [{:.1}]: ", index + 1, default_cm), default_cm);

        let range = material.properties().drainage_range;
        let drainage = if index == 0 {
            // Surface layer always uses m = 1.0
            1.0
        } else {
            let default_m = range.midpoint();
            prompt_f64(
                &format!(
                    "  Layer {} drainage m ({:.2}-{:.2}) [{:.2}]: ",
                    index + 1,
                    range.min,
                    range.max,
                    default_m
                ),
                default_m,
            )
        };
        layers.push(PavementLayer::from_material(material, thickness_cm, drainage)?);
    }
    println!();

    Ok(FlexibleDesignInput {
        label: "CLI Design".to_string(),
        inputs,
        layers,
    })
}

fn print_result(input: &FlexibleDesignInput, result: &DesignResult) {
    println!("═══════════════════════════════════════");
    println!("  FLEXIBLE PAVEMENT DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Design Inputs:");
    println!("  W18  = {:.0}", input.inputs.design_esals);
    println!("  Zr   = {:.3}", input.inputs.reliability_zr);
    println!("  So   = {:.2}", input.inputs.overall_std_dev);
    println!("  ΔPSI = {:.2}", input.inputs.delta_psi());
    println!("  Mr   = {:.0} psi", input.inputs.subgrade_modulus_psi);
    println!();
    println!("Layer Contributions:");
    for c in &result.layer_contributions {
        println!(
            "  {}. {:<4} a={:.2}  D={:.1} cm ({:.3}\")  m={:.2}  → {:.4}",
            c.layer_index,
            c.label.as_deref().unwrap_or("-"),
            c.layer_coefficient,
            c.thickness_cm,
            c.thickness_in,
            c.drainage_coefficient,
            c.contribution
        );
    }
    println!();
    println!("Structural Number:");
    println!("  SN required = {:.3} ({} iterations)", result.sn_required, result.solve.iterations);
    println!("  SN provided = {:.3}", result.sn_provided);
    println!("  Allowable W18 for provided SN = {:.0}", result.allowable_esals);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (margin {:+.3})",
        result.check().status(),
        result.margin
    );
    println!("  {}", result.check().summary());
    println!("═══════════════════════════════════════");
}

fn main() {
    logging::init();

    println!("Pavestack CLI - AASHTO 1993 Flexible Pavement Design");
    println!("====================================================");
    println!();

    let input = match collect_input() {
        Ok(input) => input,
        Err(e) => {
            tracing::error!(code = e.error_code(), "invalid input");
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    match calculate(&input) {
        Ok(result) => {
            print_result(&input, &result);

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "design calculation failed");
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
