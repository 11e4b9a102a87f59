use std::error::Error;

use log::LevelFilter;

use pareto_kink::kink_points::get_kink_points;

/// Calculate the kink points of a front with 3 objectives to maximise and print them together
/// with the front. Each kink point is printed with its coordinates separated by a comma so that
/// the output can be pasted into a plotting tool.
///
/// `cargo run --example kink_points_3d`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Debug).init();

    let front = vec![
        vec![1.0, 0.9, 0.7],
        vec![0.4, 1.0, 0.5],
        vec![0.8, 1.0, 0.2],
        vec![0.6, 1.0, 0.4],
        vec![0.5, 0.9, 1.0],
        vec![1.0, 0.7, 1.0],
    ];
    let kink_points = get_kink_points(&front, 3)?;

    println!("Front ({} points)", front.len());
    for point in &front {
        println!("{:.2}, {:.2}, {:.2}", point[0], point[1], point[2]);
    }
    println!("Kink points ({} points)", kink_points.len());
    for point in &kink_points {
        println!("{:.2}, {:.2}, {:.2}", point[0], point[1], point[2]);
    }

    Ok(())
}
