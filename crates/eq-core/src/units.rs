// eq-core/src/units.rs

use uom::si::f64::{
    AmountOfSubstance as UomAmountOfSubstance, Mass as UomMass,
    MolarConcentration as UomMolarConcentration, MolarMass as UomMolarMass,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Amount = UomAmountOfSubstance;
pub type Mass = UomMass;
pub type Molarity = UomMolarConcentration;
pub type MolarMass = UomMolarMass;
pub type Volume = UomVolume;

// Constructors take the laboratory units the simulator is driven in.

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn mg(v: f64) -> Mass {
    use uom::si::mass::milligram;
    Mass::new::<milligram>(v)
}

#[inline]
pub fn mol(v: f64) -> Amount {
    use uom::si::amount_of_substance::mole;
    Amount::new::<mole>(v)
}

#[inline]
pub fn molar(v: f64) -> Molarity {
    use uom::si::molar_concentration::mole_per_liter;
    Molarity::new::<mole_per_liter>(v)
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

// Readouts in the same laboratory units.

#[inline]
pub fn as_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

#[inline]
pub fn as_mg(m: Mass) -> f64 {
    use uom::si::mass::milligram;
    m.get::<milligram>()
}

#[inline]
pub fn as_mol(n: Amount) -> f64 {
    use uom::si::amount_of_substance::mole;
    n.get::<mole>()
}

#[inline]
pub fn as_molar(c: Molarity) -> f64 {
    use uom::si::molar_concentration::mole_per_liter;
    c.get::<mole_per_liter>()
}

#[inline]
pub fn as_g_per_mol(mm: MolarMass) -> f64 {
    use uom::si::molar_mass::gram_per_mole;
    mm.get::<gram_per_mole>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _v = liters(1.0);
        let _m = mg(10.0);
        let _n = mol(1e-5);
        let _c = molar(0.1);
        let _mm = g_per_mol(143.32);
    }

    #[test]
    fn laboratory_units_roundtrip() {
        assert!((as_liters(liters(2.5)) - 2.5).abs() < 1e-12);
        assert!((as_mg(mg(10.0)) - 10.0).abs() < 1e-12);
        assert!((as_molar(molar(0.1)) - 0.1).abs() < 1e-15);
        assert!((as_g_per_mol(g_per_mol(143.32)) - 143.32).abs() < 1e-9);
    }

    #[test]
    fn liter_is_a_thousandth_of_cubic_meter() {
        // uom stores SI base values
        assert!((liters(1.0).value - 1e-3).abs() < 1e-15);
        assert!((molar(1.0).value - 1e3).abs() < 1e-9);
    }
}
