//! # wsection - W-Section Steel Shape Database
//!
//! `wsection` looks up geometric properties of wide-flange ("W-section")
//! steel beams from a reference table and derives the secondary mechanical
//! properties that structural calculation code needs: clear web height,
//! radii of gyration, elastic section moduli, and (once a yield strength is
//! supplied) the yield moment.
//!
//! All lengths are in millimeters and forces in Newtons.
//!
//! ## Design Philosophy
//!
//! - **Static data**: the reference table ships with the crate and is parsed
//!   once into a shared read-only catalog
//! - **All-or-nothing lookups**: a lookup either returns a fully populated
//!   section or fails; there are no partial results
//! - **No silent defaults**: yield-dependent properties error until a yield
//!   strength is set, instead of returning zero
//! - **JSON-First**: section and error types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! // Look up a section and supply the yield strength up front
//! let beam = wsection::lookup_with_yield("W14x90", 345.0)?;
//!
//! println!("rx = {:.1} mm", beam.rx_mm);
//! println!("My = {:.3e} N·mm", beam.my_nmm()?);
//!
//! // Or set it later
//! let mut column = wsection::lookup("W12x26")?;
//! assert!(column.my_nmm().is_err());
//! column.set_yield_strength(250.0);
//! # Ok::<(), wsection::errors::SectionError>(())
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Reference table parsing and keyed lookup
//! - [`section`] - Per-section properties, raw and derived
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use catalog::{SectionCatalog, SectionRow};
pub use errors::{SectionError, SectionResult};
pub use section::WSection;

/// Look up a section in the builtin catalog by name.
///
/// See [`SectionCatalog::lookup`].
pub fn lookup(section: &str) -> SectionResult<WSection> {
    SectionCatalog::builtin()?.lookup(section)
}

/// Look up a section in the builtin catalog and set its yield strength (MPa).
///
/// See [`SectionCatalog::lookup_with_yield`].
pub fn lookup_with_yield(section: &str, fy_mpa: f64) -> SectionResult<WSection> {
    SectionCatalog::builtin()?.lookup_with_yield(section, fy_mpa)
}

/// List all section names in the builtin catalog, in table order.
pub fn list_sections() -> SectionResult<&'static [String]> {
    Ok(SectionCatalog::builtin()?.list_sections())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_lookup() {
        let ws = lookup("W14x90").unwrap();
        assert_eq!(ws.section, "W14x90");
        assert!(ws.my_nmm().is_err());
    }

    #[test]
    fn test_crate_level_lookup_with_yield() {
        let ws = lookup_with_yield("W14x90", 345.0).unwrap();
        assert_eq!(ws.my_nmm().unwrap(), 345.0 * ws.zx_mm3);
    }

    #[test]
    fn test_crate_level_list_sections() {
        let names = list_sections().unwrap();
        assert!(names.contains(&"W14x90".to_string()));
        assert!(names.contains(&"W24x76".to_string()));
    }

    #[test]
    fn test_lookup_miss() {
        assert_eq!(
            lookup("does-not-exist").unwrap_err(),
            SectionError::section_not_found("does-not-exist")
        );
    }
}
