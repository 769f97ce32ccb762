//! # Section Catalog
//!
//! Reference table of wide-flange section properties and keyed row lookup.
//!
//! The canonical table ships with the crate (`assets/w-section.csv`, metric
//! units) and is parsed lazily into a process-lifetime catalog on first use.
//! An external copy of the table in the same format can be loaded with
//! [`SectionCatalog::load_from_csv`].
//!
//! ## Example
//!
//! ```rust
//! use wsection::catalog::SectionCatalog;
//!
//! let catalog = SectionCatalog::builtin()?;
//! let w14x90 = catalog.lookup("W14x90")?;
//!
//! println!("A = {} mm²", w14x90.a_mm2);
//! println!("Ix = {} mm⁴", w14x90.ix_mm4);
//! # Ok::<(), wsection::errors::SectionError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};
use crate::section::WSection;

/// Path of the embedded reference table, relative to the crate root
pub const TABLE_PATH: &str = "assets/w-section.csv";

const TABLE_CSV: &str = include_str!("../assets/w-section.csv");

/// Expected table columns, in header order
const COLUMNS: [&str; 18] = [
    "section", "d", "bf", "tf", "bf_bottom", "tf_bottom", "tw", "r", "A", "J", "Iy", "Ix",
    "Alpha", "Cy", "Cx", "Iw", "Zy", "Zx",
];

// Parsed at most once, then shared read-only for the life of the process.
static BUILTIN: Lazy<SectionResult<SectionCatalog>> =
    Lazy::new(|| SectionCatalog::from_csv_str(TABLE_CSV, TABLE_PATH));

/// One raw row of the reference table (all lengths mm, forces N)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRow {
    /// Section name, the unique lookup key
    pub section: String,
    /// Depth (mm)
    pub d_mm: f64,
    /// Top flange width (mm)
    pub bf_mm: f64,
    /// Top flange thickness (mm)
    pub tf_mm: f64,
    /// Bottom flange width (mm)
    pub bf_bottom_mm: f64,
    /// Bottom flange thickness (mm)
    pub tf_bottom_mm: f64,
    /// Web thickness (mm)
    pub tw_mm: f64,
    /// Fillet radius (mm)
    pub r_mm: f64,
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
    /// Centroid/shear-center constant, y
    pub cy_mm: f64,
    /// Centroid/shear-center constant, x
    pub cx_mm: f64,
    /// Warping constant (mm⁶)
    pub iw_mm6: f64,
    /// Plastic section modulus about the y-axis (mm³)
    pub zy_mm3: f64,
    /// Plastic section modulus about the x-axis (mm³)
    pub zx_mm3: f64,
}

/// Wide-flange section catalog
///
/// Holds all table rows in memory for O(1) lookup by section name.
/// Immutable once parsed; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    /// Rows indexed by section name (exact, case-sensitive)
    rows: HashMap<String, SectionRow>,

    /// Section names in table order, for deterministic listing
    order: Vec<String>,
}

impl SectionCatalog {
    /// Get the builtin catalog, parsing the embedded table on first call.
    ///
    /// Subsequent calls return the same cached catalog.
    pub fn builtin() -> SectionResult<&'static SectionCatalog> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Load a catalog from an external copy of the reference table.
    ///
    /// The file must carry the same header and columns as the builtin table.
    pub fn load_from_csv(path: impl AsRef<Path>) -> SectionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SectionError::resource_not_found(
                path.display().to_string(),
                format!("failed to read table: {}", e),
            )
        })?;
        Self::from_csv_str(&text, &path.display().to_string())
    }

    /// Parse a catalog from CSV text.
    ///
    /// `origin` names the table source in error messages. A malformed table
    /// (missing column, bad number, duplicate or empty key) is reported as
    /// [`SectionError::ResourceNotFound`]: the resource exists but is not a
    /// readable section table.
    pub fn from_csv_str(text: &str, origin: &str) -> SectionResult<Self> {
        let mut lines = text.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| SectionError::resource_not_found(origin, "table is empty"))?;
        let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

        let mut cols = [0usize; COLUMNS.len()];
        for (slot, name) in cols.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    SectionError::resource_not_found(origin, format!("missing '{}' column", name))
                })?;
        }
        let [section_c, d_c, bf_c, tf_c, bfb_c, tfb_c, tw_c, r_c, a_c, j_c, iy_c, ix_c, alpha_c, cy_c, cx_c, iw_c, zy_c, zx_c] =
            cols;

        let mut catalog = SectionCatalog::default();

        for (idx, line) in lines.enumerate() {
            let line_num = idx + 2;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();

            let num = |col: usize| -> SectionResult<f64> {
                let raw = fields.get(col).copied().unwrap_or("");
                raw.parse::<f64>().map_err(|_| {
                    SectionError::resource_not_found(
                        origin,
                        format!("line {}: invalid number '{}'", line_num, raw),
                    )
                })
            };

            let section = fields.get(section_c).copied().unwrap_or("").to_string();
            if section.is_empty() {
                return Err(SectionError::resource_not_found(
                    origin,
                    format!("line {}: empty section name", line_num),
                ));
            }

            let row = SectionRow {
                section: section.clone(),
                d_mm: num(d_c)?,
                bf_mm: num(bf_c)?,
                tf_mm: num(tf_c)?,
                bf_bottom_mm: num(bfb_c)?,
                tf_bottom_mm: num(tfb_c)?,
                tw_mm: num(tw_c)?,
                r_mm: num(r_c)?,
                a_mm2: num(a_c)?,
                j_mm4: num(j_c)?,
                iy_mm4: num(iy_c)?,
                ix_mm4: num(ix_c)?,
                alpha: num(alpha_c)?,
                cy_mm: num(cy_c)?,
                cx_mm: num(cx_c)?,
                iw_mm6: num(iw_c)?,
                zy_mm3: num(zy_c)?,
                zx_mm3: num(zx_c)?,
            };

            // Section names are the table's primary key
            if catalog.rows.insert(section.clone(), row).is_some() {
                return Err(SectionError::resource_not_found(
                    origin,
                    format!("line {}: duplicate section '{}'", line_num, section),
                ));
            }
            catalog.order.push(section);
        }

        Ok(catalog)
    }

    /// Look up a section by name.
    ///
    /// Matching is exact and case-sensitive; there is no fuzzy matching.
    /// Returns a fully populated [`WSection`] with all derived properties
    /// computed, or [`SectionError::SectionNotFound`] naming the key.
    pub fn lookup(&self, section: &str) -> SectionResult<WSection> {
        self.rows
            .get(section)
            .map(WSection::from_row)
            .ok_or_else(|| SectionError::section_not_found(section))
    }

    /// Look up a section and set its yield strength (MPa) in one step.
    ///
    /// Equivalent to [`lookup`](Self::lookup) followed by
    /// [`WSection::set_yield_strength`].
    pub fn lookup_with_yield(&self, section: &str, fy_mpa: f64) -> SectionResult<WSection> {
        let mut ws = self.lookup(section)?;
        ws.set_yield_strength(fy_mpa);
        Ok(ws)
    }

    /// Get all section names, in table order
    pub fn list_sections(&self) -> &[String] {
        &self.order
    }

    /// Get the number of sections in the catalog
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find section names starting with a prefix (e.g., "W14"), in table order
    pub fn search(&self, prefix: &str) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = "\
section,d,bf,tf,bf_bottom,tf_bottom,tw,r,A,J,Iy,Ix,Alpha,Cy,Cx,Iw,Zy,Zx
W14x90,356,369,18,369,18,11,16,17000,1.6e6,4.5e7,3.7e8,0,0,0,4.3e12,1.2e6,2.8e6
W12x26,311,165,9.7,165,9.7,5.8,8,4950,1.4e5,8.5e6,8.5e7,0,0,0,1.9e11,2.8e5,6.1e5
";

    fn test_catalog() -> SectionCatalog {
        SectionCatalog::from_csv_str(TEST_CSV, "test.csv").unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = test_catalog();
        let ws = catalog.lookup("W14x90").unwrap();

        assert_eq!(ws.section, "W14x90");
        assert_eq!(ws.d_mm, 356.0);
        assert_eq!(ws.a_mm2, 17000.0);
        assert_eq!(ws.zx_mm3, 2.8e6);
        assert_eq!(ws.h_mm, 288.0);
        assert!((ws.rx_mm - 147.4).abs() < 0.1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = test_catalog();
        assert!(catalog.lookup("W14x90").is_ok());
        assert_eq!(
            catalog.lookup("w14X90").unwrap_err(),
            SectionError::section_not_found("w14X90")
        );
    }

    #[test]
    fn test_lookup_not_found_names_key() {
        let catalog = test_catalog();
        let err = catalog.lookup("does-not-exist").unwrap_err();
        assert_eq!(err, SectionError::section_not_found("does-not-exist"));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_lookup_with_yield() {
        let catalog = test_catalog();
        let ws = catalog.lookup_with_yield("W14x90", 345.0).unwrap();

        assert_eq!(ws.fy_mpa().unwrap(), 345.0);
        assert_eq!(ws.my_nmm().unwrap(), 345.0 * 2.8e6); // 9.66e8
    }

    #[test]
    fn test_list_sections_table_order() {
        let catalog = test_catalog();
        assert_eq!(catalog.list_sections(), ["W14x90", "W12x26"]);
        // Deterministic across repeated calls
        assert_eq!(catalog.list_sections(), catalog.list_sections());
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_search_prefix() {
        let catalog = test_catalog();
        assert_eq!(catalog.search("W14"), ["W14x90"]);
        assert_eq!(catalog.search("W"), ["W14x90", "W12x26"]);
        assert!(catalog.search("HSS").is_empty());
    }

    #[test]
    fn test_missing_column_is_resource_error() {
        let csv = "section,d,bf\nW14x90,356,369\n";
        let err = SectionCatalog::from_csv_str(csv, "test.csv").unwrap_err();
        assert_eq!(err.error_code(), "RESOURCE_NOT_FOUND");
        assert!(err.to_string().contains("'tf'"));
    }

    #[test]
    fn test_bad_number_is_resource_error() {
        let csv = TEST_CSV.replace("17000", "not-a-number");
        let err = SectionCatalog::from_csv_str(&csv, "test.csv").unwrap_err();
        assert_eq!(err.error_code(), "RESOURCE_NOT_FOUND");
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn test_duplicate_section_is_resource_error() {
        let dup = TEST_CSV.replace("W12x26", "W14x90");
        let err = SectionCatalog::from_csv_str(&dup, "test.csv").unwrap_err();
        assert_eq!(err.error_code(), "RESOURCE_NOT_FOUND");
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_load_from_csv_missing_file() {
        let err = SectionCatalog::load_from_csv("no/such/w-section.csv").unwrap_err();
        assert_eq!(err.error_code(), "RESOURCE_NOT_FOUND");
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = SectionCatalog::builtin().unwrap();
        assert!(catalog.len() > 20);
        assert_eq!(
            catalog.list_sections().len(),
            catalog.len(),
            "every key listed exactly once"
        );

        let w14x90 = catalog.lookup("W14x90").unwrap();
        assert_eq!(w14x90.d_mm, 355.6);
        assert_eq!(w14x90.a_mm2, 17100.0);
    }

    #[test]
    fn test_builtin_derived_identities() {
        let catalog = SectionCatalog::builtin().unwrap();
        for name in catalog.list_sections() {
            let ws = catalog.lookup(name).unwrap();
            let tol = 1e-9;
            assert!((ws.h_mm - (ws.d_mm - 2.0 * ws.tf_mm - 2.0 * ws.r_mm)).abs() < tol);
            assert!((ws.ry_mm - (ws.iy_mm4 / ws.a_mm2).sqrt()).abs() < tol * ws.ry_mm);
            assert!((ws.rx_mm - (ws.ix_mm4 / ws.a_mm2).sqrt()).abs() < tol * ws.rx_mm);
            assert!((ws.wy_mm3 - ws.iy_mm4 / (ws.d_mm / 2.0)).abs() < tol * ws.wy_mm3);
            assert!((ws.wx_mm3 - ws.ix_mm4 / (ws.d_mm / 2.0)).abs() < tol * ws.wx_mm3);
        }
    }
}
