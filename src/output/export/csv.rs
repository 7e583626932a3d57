//! CSV export of saturation curves and concentration maps
//!
//! Compatible with spreadsheets, pandas and most data analysis tools.
//!
//! # Features
//!
//! - **Metadata header**: optional `#` comment lines describing the solute
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Downsampling**: export a long curve with fewer rows
//! - **Validation**: empty curves and non-finite values are rejected
//!
//! # Example output
//!
//! ```csv
//! # Molarity Simulation Data
//! # Generated: 2026-10-16T09:12:44.120671+00:00
//! # Solute: Copper sulfate
//! # Formula: CuSO4
//! # Saturated Concentration: 1.38 mol/L
//! # Solute Amount: 0.5 mol
//! #
//! Volume (L),Concentration (mol/L),Precipitate (mol),Saturated
//! 0.200000,1.380000,0.224000,1
//! 0.201000,1.380000,0.222620,1
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::analysis::{ConcentrationMap, SaturationCurve};
use crate::output::export::{Exporter, downsample_indices};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty data: {0}")]
    EmptyData(&'static str),

    #[error("Invalid data: non-finite value in column '{column}' at row {row}")]
    NonFinite { column: &'static str, row: usize },

    #[error("Invalid CSV configuration: {0}")]
    InvalidConfiguration(String),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use molarity::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     include_metadata: true,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header; built from the exported data when `None`
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable the metadata header
    pub fn with_metadata(mut self, metadata: Option<CsvMetadata>) -> Self {
        self.include_metadata = true;
        self.metadata = metadata;
        self
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if self.delimiter == self.decimal_separator {
            return Err(ExportError::InvalidConfiguration(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        if self.delimiter == '\n' || self.delimiter == '#' {
            return Err(ExportError::InvalidConfiguration(format!(
                "'{}' cannot be used as a delimiter",
                self.delimiter.escape_default()
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are `Some` are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    pub solute: Option<String>,
    pub formula: Option<String>,
    /// \[mol/L\]
    pub saturated_concentration: Option<f64>,
    /// \[mol\]
    pub solute_amount: Option<f64>,
    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    pub fn from_curve(curve: &SaturationCurve) -> Self {
        let solute = curve.solute();
        Self {
            solute: Some(solute.name().to_string()),
            formula: solute.formula().map(str::to_string),
            saturated_concentration: Some(solute.saturated_concentration()),
            solute_amount: Some(curve.solute_amount()),
            custom: Vec::new(),
        }
    }

    pub fn from_map(map: &ConcentrationMap) -> Self {
        Self {
            saturated_concentration: Some(map.saturated_concentration()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Write a curve to any writer
    pub fn write_curve<W: Write>(
        &self,
        curve: &SaturationCurve,
        n_points: Option<usize>,
        mut writer: W,
    ) -> Result<(), ExportError> {
        self.config.validate()?;
        if curve.is_empty() {
            return Err(ExportError::EmptyData("saturation curve has no points"));
        }

        if self.config.include_metadata {
            let metadata = self
                .config
                .metadata
                .clone()
                .unwrap_or_else(|| CsvMetadata::from_curve(curve));
            write_metadata_header(&mut writer, &metadata)?;
        }

        self.write_header(
            &mut writer,
            &["Volume (L)", "Concentration (mol/L)", "Precipitate (mol)", "Saturated"],
        )?;

        for row in downsample_indices(curve.len(), n_points) {
            let point = &curve.points()[row];
            self.write_numbers(
                &mut writer,
                row,
                &[
                    ("volume", point.volume),
                    ("concentration", point.concentration),
                    ("precipitate", point.precipitate_amount),
                ],
            )?;
            writeln!(writer, "{}{}", self.config.delimiter, u8::from(point.saturated))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write a map to any writer, one row per grid point
    pub fn write_map<W: Write>(
        &self,
        map: &ConcentrationMap,
        mut writer: W,
    ) -> Result<(), ExportError> {
        self.config.validate()?;
        if map.concentration().is_empty() {
            return Err(ExportError::EmptyData("concentration map has no points"));
        }

        if self.config.include_metadata {
            let metadata = self
                .config
                .metadata
                .clone()
                .unwrap_or_else(|| CsvMetadata::from_map(map));
            write_metadata_header(&mut writer, &metadata)?;
        }

        self.write_header(
            &mut writer,
            &["Solute Amount (mol)", "Volume (L)", "Concentration (mol/L)", "Precipitate (mol)"],
        )?;

        for (row, ((i, j), concentration)) in map.concentration().indexed_iter().enumerate() {
            self.write_numbers(
                &mut writer,
                row,
                &[
                    ("solute amount", map.amounts()[i]),
                    ("volume", map.volumes()[j]),
                    ("concentration", *concentration),
                    ("precipitate", map.precipitate()[[i, j]]),
                ],
            )?;
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_header<W: Write>(&self, writer: &mut W, columns: &[&str]) -> Result<(), ExportError> {
        writeln!(writer, "{}", columns.join(&self.config.delimiter.to_string()))?;
        Ok(())
    }

    /// Write one delimited row of numbers, without the line end
    fn write_numbers<W: Write>(
        &self,
        writer: &mut W,
        row: usize,
        values: &[(&'static str, f64)],
    ) -> Result<(), ExportError> {
        for (k, &(column, value)) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ExportError::NonFinite { column, row });
            }
            if k > 0 {
                write!(writer, "{}", self.config.delimiter)?;
            }
            write!(writer, "{}", format_number(value, &self.config))?;
        }
        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = ExportError;

    fn export_curve(
        &self,
        curve: &SaturationCurve,
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), ExportError> {
        let file = File::create(path)?;
        self.write_curve(curve, n_points, BufWriter::new(file))?;
        log::info!("Exported saturation curve to {}", path.display());
        Ok(())
    }

    fn export_map(&self, map: &ConcentrationMap, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path)?;
        self.write_map(map, BufWriter::new(file))?;
        log::info!("Exported concentration map to {}", path.display());
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    writer: &mut W,
    metadata: &CsvMetadata,
) -> Result<(), ExportError> {
    writeln!(writer, "# Molarity Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(solute) = &metadata.solute {
        writeln!(writer, "# Solute: {}", solute)?;
    }
    if let Some(formula) = &metadata.formula {
        writeln!(writer, "# Formula: {}", formula)?;
    }
    if let Some(saturated) = metadata.saturated_concentration {
        writeln!(writer, "# Saturated Concentration: {} mol/L", saturated)?;
    }
    if let Some(amount) = metadata.solute_amount {
        writeln!(writer, "# Solute Amount: {} mol", amount)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =================================================================================================
// Tests
// =================================================================================================
