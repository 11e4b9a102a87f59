use std::error::Error;

use log::LevelFilter;

use pareto_kink::metrics::KinkPoints;
use pareto_kink::utils::non_dominated_points;

/// Build a front with 4 objectives to maximise from a set of candidate solutions, then calculate
/// how far a few points are from it. The kink points are calculated once and the distances of all
/// the points are calculated in parallel.
///
/// `cargo run --example distance_to_front --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // some of these are dominated and are discarded
    let solutions = vec![
        vec![0.9, 0.1, 0.4, 0.5],
        vec![0.2, 0.8, 0.6, 0.3],
        vec![0.5, 0.5, 0.5, 0.5],
        vec![0.4, 0.4, 0.4, 0.4],
        vec![0.1, 0.3, 0.9, 0.7],
        vec![0.7, 0.6, 0.1, 0.2],
        vec![0.6, 0.6, 0.1, 0.2],
    ];
    let front = non_dominated_points(&solutions)?;
    let kink_points = KinkPoints::new(&front, 4)?;
    println!(
        "The front has {} points and {} kink points",
        kink_points.front().len(),
        kink_points.len()
    );

    let queries = vec![
        vec![0.3, 0.3, 0.3, 0.3],
        vec![0.6, 0.6, 0.6, 0.6],
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
    ];
    let distances = kink_points.distances(&queries)?;
    for (query, distance) in queries.iter().zip(&distances) {
        println!(
            "{:?}: distance from front = {:.4}, distance from the kink points = {:.4}",
            query,
            distance,
            kink_points.distance(query)?
        );
    }

    Ok(())
}
