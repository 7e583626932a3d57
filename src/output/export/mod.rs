//! Export of analysis results
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module and owns its
//! error type.
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use molarity::analysis::SaturationCurve;
//! use molarity::chemistry::SoluteCatalog;
//! use molarity::config::SimulationConfig;
//! use molarity::output::export::{CsvExporter, Exporter};
//! use std::path::Path;
//!
//! let catalog = SoluteCatalog::standard().unwrap();
//! let solute = catalog.find("Copper sulfate").unwrap();
//! let curve = SaturationCurve::sample(solute, 0.5, &SimulationConfig::default(), 801).unwrap();
//!
//! let exporter = CsvExporter::default();
//!
//! // Every sampled volume
//! exporter.export_curve(&curve, None, Path::new("copper_sulfate.csv")).unwrap();
//!
//! // Downsampled to 100 rows
//! exporter.export_curve(&curve, Some(100), Path::new("copper_sulfate_light.csv")).unwrap();
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvExporter, CsvMetadata, ExportError};

use std::path::Path;

use crate::analysis::{ConcentrationMap, SaturationCurve};

/// Abstraction over export formats
///
/// # Parameter `n_points`
///
/// - `None`: exports every sample
/// - `Some(n)`: uniformly downsamples to `n` rows, always keeping the first and last
///   samples so both ends of the volume range are present
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a saturation curve, one row per sampled volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty or the file cannot be written.
    fn export_curve(
        &self,
        curve: &SaturationCurve,
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), Self::Error>;

    /// Exports a concentration map in long format, one row per grid point.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn export_map(&self, map: &ConcentrationMap, path: &Path) -> Result<(), Self::Error>;
}

/// Indices of `n_points` evenly spread samples out of `len`, first and last included
pub(crate) fn downsample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n >= 2 && n < len => {
            let step = (len - 1) as f64 / (n - 1) as f64;
            (0..n).map(|k| (k as f64 * step).round() as usize).collect()
        }
        Some(1) if len > 0 => vec![0],
        _ => (0..len).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_indices() {
        assert_eq!(downsample_indices(5, None), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(5, Some(10)), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(11, Some(3)), vec![0, 5, 10]);
        assert_eq!(downsample_indices(2001, Some(100)).last(), Some(&2000));
        assert_eq!(downsample_indices(0, Some(3)), Vec::<usize>::new());
    }
}
