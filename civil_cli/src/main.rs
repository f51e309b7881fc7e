//! # Sitecalc CLI Application
//!
//! Terminal front-end for the civil_core calculation engine. Prompts for a
//! beam design problem, sizes the member, and proportions the concrete mix
//! for its volume.

use std::io::{self, BufRead, Write};

use civil_core::calculations::beam::{design_beam, BeamDesignInput};
use civil_core::calculations::concrete_mix::{compute_mix, MixInput};
use civil_core::materials::{ConcreteGrade, SteelGrade};
use civil_core::units::InputUnit;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    env_logger::init();

    println!("Sitecalc CLI - Civil Engineering Calculator");
    println!("===========================================");
    println!();

    let span_m = prompt_f64("Enter beam span (m) [5.0]: ", 5.0);
    let load_kn_per_m = prompt_f64("Enter uniform load (kN/m) [20.0]: ", 20.0);
    let concrete_code = prompt_str("Enter concrete grade [M25]: ", "M25");
    let steel_code = prompt_str("Enter steel grade [Fe415]: ", "Fe415");

    let concrete_grade = match ConcreteGrade::parse(&concrete_code) {
        Ok(grade) => grade,
        Err(e) => return report_error(&e),
    };
    let steel_grade = match SteelGrade::parse(&steel_code) {
        Ok(grade) => grade,
        Err(e) => return report_error(&e),
    };

    let input = BeamDesignInput {
        span_m,
        load_kn_per_m,
        concrete_grade,
        steel_grade,
    };

    let result = match design_beam(&input) {
        Ok(result) => result,
        Err(e) => return report_error(&e),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:     {:.1} m", input.span_m);
    println!("  Load:     {:.1} kN/m", input.load_kn_per_m);
    println!("  Concrete: {} (fck = {:.0} N/mm²)", concrete_grade, result.fck_nmm2);
    println!("  Steel:    {} (fy = {:.0} N/mm²)", steel_grade, result.fy_nmm2);
    println!();
    println!("Section:");
    println!("  b x D = {:.0} x {:.0} mm (d = {:.0} mm)",
        result.beam_width_mm,
        result.beam_depth_mm,
        result.effective_depth_mm
    );
    println!("  M_max = {:.2} kN·m", result.moment_knm);
    println!();
    println!("Reinforcement:");
    println!("  Ast required = {:.0} mm²", result.steel_area_required_mm2);
    println!("  Ast provided = {:.0} mm² ({} x 16 mm bars)",
        result.steel_area_provided_mm2,
        result.num_bars
    );
    println!();
    println!("Quantities:");
    println!("  Concrete: {:.3} m³", result.concrete_volume_m3);
    println!("  Steel:    {:.2} kg", result.steel_weight_kg);

    // Proportion the mix for the member's concrete volume
    let mix = match compute_mix(&MixInput {
        grade: concrete_grade,
        volume: result.concrete_volume_m3,
        water_cement_ratio: 0.5,
        unit: InputUnit::Meters,
    }) {
        Ok(mix) => mix,
        Err(e) => return report_error(&e),
    };

    println!();
    println!("Mix ({} at {}, w/c = 0.5):", concrete_grade, mix.mix_ratio);
    println!("  Cement:    {:.2} kg ({:.2} bags)", mix.cement.weight_kg, mix.cement_bags);
    println!("  Sand:      {:.2} kg", mix.sand.weight_kg);
    println!("  Aggregate: {:.2} kg", mix.aggregate.weight_kg);
    println!("  Water:     {:.2} liters", mix.water_liters);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}

fn report_error(e: &civil_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
