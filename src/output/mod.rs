//! Output module for analysis results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use molarity::analysis::SaturationCurve;
//! use molarity::chemistry::SoluteCatalog;
//! use molarity::config::SimulationConfig;
//! use molarity::output::{CsvConfig, CsvExporter, Exporter};
//! use std::path::Path;
//!
//! let catalog = SoluteCatalog::standard().unwrap();
//! let curve = SaturationCurve::sample(catalog.first(), 2.0, &SimulationConfig::default(), 81).unwrap();
//!
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata(None));
//! exporter.export_curve(&curve, None, Path::new("drink_mix.csv")).unwrap();
//! ```

pub mod export;

pub use export::{CsvConfig, CsvExporter, CsvMetadata, ExportError, Exporter};
