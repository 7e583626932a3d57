//! Example: saturation curves of the standard catalog
//!
//! For a fixed solute amount, sweeps the volume range for every catalog solute,
//! reports the volume below which solids appear and exports the curves and one
//! concentration map to CSV in the temporary directory.

use molarity::analysis::{ConcentrationMap, SaturationCurve};
use molarity::chemistry::SoluteCatalog;
use molarity::config::SimulationConfig;
use molarity::output::{CsvConfig, CsvExporter, Exporter};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Molarity - Saturation Curves");
    println!("═══════════════════════════════════════════════════════\n");

    let catalog = SoluteCatalog::standard()?;
    let config = SimulationConfig::default();
    let solute_amount = 1.0;
    let points = 801;

    println!("Sweep:");
    println!("  Solute amount : {} mol", solute_amount);
    println!(
        "  Volume range  : [{}, {}] L",
        config.volume_range.min, config.volume_range.max
    );
    println!("  Points        : {}\n", points);

    let tmp_dir = std::env::temp_dir();
    let exporter = CsvExporter::new(CsvConfig::default().with_metadata(None));

    println!("{:<24} {:>12} {:>16}", "Solute", "C_sat", "Solids below");
    for (i, solute) in catalog.list_solutes().iter().enumerate() {
        let start = Instant::now();
        let curve = SaturationCurve::sample(solute, solute_amount, &config, points)?;
        let elapsed = start.elapsed();

        let threshold = match curve.saturation_volume() {
            Some(volume) => format!("{:.3} L", volume),
            None => "never".to_string(),
        };
        println!(
            "{:<24} {:>8.2} M {:>16}   ({:?})",
            solute.name(),
            solute.saturated_concentration(),
            threshold,
            elapsed
        );

        let path = tmp_dir.join(format!("molarity_curve_{}.csv", i));
        exporter.export_curve(&curve, Some(101), &path)?;
    }

    let map = ConcentrationMap::compute(catalog.first(), &config, 74, 81)?;
    println!(
        "\n{}: solids present on {:.1} % of the amount × volume plane",
        catalog.first().name(),
        100.0 * map.saturated_fraction()
    );

    let path = tmp_dir.join("molarity_map.csv");
    exporter.export_map(&map, &path)?;
    println!("CSV files written to {}", tmp_dir.display());

    Ok(())
}
