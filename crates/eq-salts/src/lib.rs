//! eq-salts: sparingly soluble salts known to equilisolve.
//!
//! Provides:
//! - Ion and stoichiometry definitions for binary salts
//! - `SaltDescriptor`, the immutable chemical description the solver consumes
//! - The static salt catalog and formula → molar mass table
//!
//! # Example
//!
//! ```
//! use eq_salts::find_salt;
//!
//! let agcl = find_salt("AgCl").unwrap();
//! assert_eq!(agcl.ksp, 1.77e-10);
//! assert!(agcl.stoichiometry.is_one_to_one());
//! ```

pub mod catalog;
pub mod error;
pub mod ion;
pub mod salt;

pub use catalog::{
    SaltCatalogEntry, filter_salt_catalog, find_salt, find_salt_entry, molar_mass_for_formula,
    salt_catalog,
};
pub use error::{SaltError, SaltResult};
pub use ion::{Ion, IonRole};
pub use salt::{SaltDescriptor, Stoichiometry};
