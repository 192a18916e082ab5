use swang::ising::analysis;
use swang::SweepResults;
use tracing::info;

pub fn report_summary(results: &SweepResults) {
    info!("\nSwendsen-Wang sweep finished (base seed {}).", results.seed);

    let critical = analysis::closest_to_critical(&results.temperatures());
    info!(
        "\n{:>9} {:>11} {:>9} {:>11} {:>11} {:>10} {:>7}",
        "T", "E/N", "|M|", "chi", "C_V", "clusters", "flips"
    );
    for (k, point) in results.points.iter().enumerate() {
        let marker = if Some(k) == critical { " <- T_c" } else { "" };
        info!(
            "{:>9.4} {:>+11.5} {:>9.5} {:>11.5} {:>11.5} {:>10.2} {:>7.3}{}",
            point.temperature,
            point.energy,
            point.magnetization,
            point.susceptibility,
            point.specific_heat,
            point.diagnostics.mean_clusters,
            point.diagnostics.mean_flip_fraction,
            marker
        );
    }

    info!(
        "\nExact T_c = {:.5} J/k_B, ground state E/N = {}, |M| = {}",
        analysis::critical_temperature_2d(),
        analysis::energy_per_site_at_zero_temp(),
        analysis::magnetization_at_zero_temp()
    );
}

pub fn report_final_configurations(results: &SweepResults) {
    for point in &results.points {
        info!(
            "\nFinal configuration at T = {:.4}:\n{}",
            point.temperature, point.final_grid
        );
    }
}
