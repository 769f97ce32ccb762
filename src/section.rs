//! # W-Section Properties
//!
//! Section properties for one wide-flange steel beam, as looked up from the
//! reference table plus the derived quantities computed from the raw row.
//!
//! ## Axis Definition
//!
//! ```text
//!              ↑y
//!              |
//!        ============
//!              ‖
//!              ‖        x
//!      --------‖--------→
//!              ‖
//!              ‖
//!        ============
//!              |
//! ```
//!
//! All lengths are in millimeters, forces in Newtons (stresses in MPa).

use serde::{Deserialize, Serialize};

use crate::catalog::SectionRow;
use crate::errors::{SectionError, SectionResult};

/// Properties of a single wide-flange section.
///
/// Raw fields mirror the reference table row; `h_mm`, `ry_mm`, `rx_mm`,
/// `wy_mm3` and `wx_mm3` are derived at construction. The yield strength and
/// yield moment are undefined until [`set_yield_strength`] is called (or a
/// yield strength was supplied at lookup time); reading them earlier is an
/// [`SectionError::UndefinedValue`] error rather than a silent default.
///
/// [`set_yield_strength`]: WSection::set_yield_strength
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WSection {
    /// Section name (e.g., "W14x90")
    pub section: String,

    // === Dimensions ===
    /// Overall depth (mm)
    pub d_mm: f64,
    /// Top flange width (mm)
    pub bf_mm: f64,
    /// Top flange thickness (mm)
    pub tf_mm: f64,
    /// Bottom flange width (mm) - equals `bf_mm` for symmetric sections
    pub bf_bottom_mm: f64,
    /// Bottom flange thickness (mm)
    pub tf_bottom_mm: f64,
    /// Web thickness (mm)
    pub tw_mm: f64,
    /// Fillet radius (mm)
    pub r_mm: f64,

    // === Section Properties ===
    /// Cross-sectional area (mm²)
    pub a_mm2: f64,
    /// Torsion constant (mm⁴)
    pub j_mm4: f64,
    /// Moment of inertia about the y-axis (mm⁴)
    pub iy_mm4: f64,
    /// Moment of inertia about the x-axis (mm⁴)
    pub ix_mm4: f64,
    /// Principal axis angle
    pub alpha: f64,
    /// Centroid/shear-center constant, y (pass-through from the table)
    pub cy_mm: f64,
    /// Centroid/shear-center constant, x (pass-through from the table)
    pub cx_mm: f64,
    /// Warping constant (mm⁶)
    pub iw_mm6: f64,
    /// Plastic section modulus about the y-axis (mm³)
    pub zy_mm3: f64,
    /// Plastic section modulus about the x-axis (mm³)
    pub zx_mm3: f64,

    // === Derived Properties ===
    /// Clear web height: d - 2*tf - 2*r (mm)
    pub h_mm: f64,
    /// Radius of gyration about the y-axis: sqrt(Iy/A) (mm)
    pub ry_mm: f64,
    /// Radius of gyration about the x-axis: sqrt(Ix/A) (mm)
    pub rx_mm: f64,
    /// Elastic section modulus about the y-axis: Iy/(d/2) (mm³)
    pub wy_mm3: f64,
    /// Elastic section modulus about the x-axis: Ix/(d/2) (mm³)
    pub wx_mm3: f64,

    // Yield data, undefined until explicitly supplied
    fy_mpa: Option<f64>,
    my_nmm: Option<f64>,
}

impl WSection {
    /// Elastic modulus of structural steel (MPa)
    pub const E_MPA: f64 = 206_000.0;

    /// Build section properties from one table row, computing derived fields
    pub(crate) fn from_row(row: &SectionRow) -> Self {
        WSection {
            section: row.section.clone(),
            d_mm: row.d_mm,
            bf_mm: row.bf_mm,
            tf_mm: row.tf_mm,
            bf_bottom_mm: row.bf_bottom_mm,
            tf_bottom_mm: row.tf_bottom_mm,
            tw_mm: row.tw_mm,
            r_mm: row.r_mm,
            a_mm2: row.a_mm2,
            j_mm4: row.j_mm4,
            iy_mm4: row.iy_mm4,
            ix_mm4: row.ix_mm4,
            alpha: row.alpha,
            cy_mm: row.cy_mm,
            cx_mm: row.cx_mm,
            iw_mm6: row.iw_mm6,
            zy_mm3: row.zy_mm3,
            zx_mm3: row.zx_mm3,
            h_mm: row.d_mm - 2.0 * row.tf_mm - 2.0 * row.r_mm,
            ry_mm: (row.iy_mm4 / row.a_mm2).sqrt(),
            rx_mm: (row.ix_mm4 / row.a_mm2).sqrt(),
            wy_mm3: row.iy_mm4 / (row.d_mm / 2.0),
            wx_mm3: row.ix_mm4 / (row.d_mm / 2.0),
            fy_mpa: None,
            my_nmm: None,
        }
    }

    /// Set the steel yield strength (MPa) and recompute the yield moment.
    ///
    /// Callable more than once; the last value wins. No other field is
    /// affected.
    pub fn set_yield_strength(&mut self, fy_mpa: f64) {
        self.fy_mpa = Some(fy_mpa);
        self.my_nmm = Some(fy_mpa * self.zx_mm3);
    }

    /// Yield strength (MPa), if one has been set
    pub fn fy_mpa(&self) -> SectionResult<f64> {
        self.fy_mpa
            .ok_or_else(|| SectionError::undefined_value("fy"))
    }

    /// Yield moment My = fy * Zx (N·mm), if a yield strength has been set
    pub fn my_nmm(&self) -> SectionResult<f64> {
        self.my_nmm
            .ok_or_else(|| SectionError::undefined_value("My"))
    }

    /// Get the governing radius of gyration (minimum of rx, ry)
    pub fn r_min_mm(&self) -> f64 {
        self.rx_mm.min(self.ry_mm)
    }

    /// Get the governing slenderness ratio for a given unbraced length
    pub fn slenderness(&self, unbraced_length_mm: f64) -> f64 {
        unbraced_length_mm / self.r_min_mm()
    }
}

impl std::fmt::Display for WSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.0} mm², Ix={:.3e} mm⁴, Zx={:.3e} mm³)",
            self.section, self.a_mm2, self.ix_mm4, self.zx_mm3
        )
    }
}
