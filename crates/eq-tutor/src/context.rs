//! Textual context handed to the tutor with every question.

use eq_core::units::{as_liters, as_mg};
use eq_solver::{EquilibriumResult, SimulationInput};

/// Summarize the current lab state in one paragraph.
///
/// Concentrations are written in scientific notation with two decimals.
pub fn format_context(input: &SimulationInput, result: &EquilibriumResult) -> String {
    let salt = input.salt();
    format!(
        "The student is looking at {} ({}). Current Volume: {}L. Added Mass: {}mg. Ksp: {}. \
         Result: {}. Cation Conc: {:.2e}M. Anion Conc: {:.2e}M.",
        salt.name,
        salt.formula,
        js_number(as_liters(input.volume())),
        js_number(as_mg(input.added_mass())),
        js_number(salt.ksp),
        if result.is_saturated {
            "Saturated"
        } else {
            "Unsaturated"
        },
        result.cation_molarity(),
        result.anion_molarity(),
    )
}

/// Shortest plain rendering of a number: `1`, `0.5`, `1.77e-10`.
///
/// Very small or very large magnitudes switch to exponent form so Ksp values
/// stay readable. Rounded to 12 significant digits first, which hides unit
/// conversion noise such as `2.4999999999999996`.
pub fn js_number(v: f64) -> String {
    let v = format!("{v:.11e}").parse::<f64>().unwrap_or(v);
    let a = v.abs();
    if a != 0.0 && a.is_finite() && !(1e-6..1e21).contains(&a) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_salts::find_salt;
    use eq_solver::evaluate;

    #[test]
    fn number_rendering() {
        assert_eq!(js_number(1.0), "1");
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(10.0), "10");
        assert_eq!(js_number(1.77e-10), "1.77e-10");
        assert_eq!(js_number(7.1e-9), "7.1e-9");
        assert_eq!(js_number(0.0), "0");
        assert_eq!(js_number(2.4999999999999996), "2.5");
    }

    #[test]
    fn context_for_saturated_agcl() {
        let input =
            SimulationInput::from_lab_units(find_salt("AgCl").unwrap(), 1.0, 10.0, 0.0, 0.0)
                .unwrap();
        let result = evaluate(&input).unwrap();

        assert_eq!(
            format_context(&input, &result),
            "The student is looking at Silver Chloride (AgCl). Current Volume: 1L. \
             Added Mass: 10mg. Ksp: 1.77e-10. Result: Saturated. \
             Cation Conc: 1.33e-5M. Anion Conc: 1.33e-5M."
        );
    }

    #[test]
    fn context_for_unsaturated_pbi2() {
        let input =
            SimulationInput::from_lab_units(find_salt("PbI2").unwrap(), 2.5, 5.0, 0.0, 0.0)
                .unwrap();
        let result = evaluate(&input).unwrap();
        let ctx = format_context(&input, &result);

        assert!(ctx.contains("Lead(II) Iodide (PbI2)"));
        assert!(ctx.contains("Current Volume: 2.5L"));
        assert!(ctx.contains("Result: Unsaturated"));
        // 5 mg / 461.01 g/mol / 2.5 L = 4.34e-6 M Pb2+, twice that I-
        assert!(ctx.contains("Cation Conc: 4.34e-6M"));
        assert!(ctx.contains("Anion Conc: 8.68e-6M"));
    }
}
