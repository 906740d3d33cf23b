//! Ion species of a binary salt.

use std::fmt;

/// Which side of the dissolution equation an ion sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IonRole {
    Cation,
    Anion,
}

impl IonRole {
    pub fn key(&self) -> &'static str {
        match self {
            IonRole::Cation => "cation",
            IonRole::Anion => "anion",
        }
    }
}

impl fmt::Display for IonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A dissolved ion: display label (e.g. `Pb2+`) and signed charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ion {
    pub label: String,
    pub charge: i32,
}

impl Ion {
    pub fn new(label: impl Into<String>, charge: i32) -> Self {
        Self {
            label: label.into(),
            charge,
        }
    }

    pub fn role(&self) -> Option<IonRole> {
        match self.charge {
            c if c > 0 => Some(IonRole::Cation),
            c if c < 0 => Some(IonRole::Anion),
            _ => None,
        }
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_follows_charge_sign() {
        assert_eq!(Ion::new("Ag+", 1).role(), Some(IonRole::Cation));
        assert_eq!(Ion::new("SO4 2-", -2).role(), Some(IonRole::Anion));
        assert_eq!(Ion::new("H2O", 0).role(), None);
    }
}
