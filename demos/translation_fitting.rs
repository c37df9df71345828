//! Example: robust 2D translation fitting
//!
//! Aligns two point sets related by a shift while a third of the
//! correspondences are wrong.

use consensus::{Function, Ransac, RansacSettings, TranslationFitter, TranslationModel2D};
use consensus::models::PointMatch;
use nalgebra::Point2;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Robust Translation Fitting Example ===\n");

    let n_inliers = 40;
    let n_outliers = 20;
    let (tx, ty) = (12.5, -4.0);
    let mut rng = rand::thread_rng();

    let mut matches = Vec::with_capacity(n_inliers + n_outliers);
    for _ in 0..n_inliers {
        let p = Point2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let q = Point2::new(
            p.x + tx + rng.gen_range(-0.05..0.05),
            p.y + ty + rng.gen_range(-0.05..0.05),
        );
        matches.push(PointMatch::new(p, q));
    }
    for _ in 0..n_outliers {
        let p = Point2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let q = Point2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        matches.push(PointMatch::new(p, q));
    }

    println!("True translation: ({tx:.2}, {ty:.2})");
    println!("Generated {n_inliers} inliers and {n_outliers} outliers\n");

    let mut ransac = Ransac::new(RansacSettings::new(200, 0.2, 0.3));
    let mut model = TranslationModel2D::default();
    let mut inliers = Vec::new();
    let report = ransac.run(&mut model, &TranslationFitter, &matches, &mut inliers)?;

    if !report.found {
        println!("No translation found in {} trials", report.trials);
        return Ok(());
    }

    println!("Estimated translation: ({:.3}, {:.3})", model.translation.x, model.translation.y);
    println!(
        "Inliers: {} / {} (cost {:.3})",
        inliers.len(),
        matches.len(),
        model.cost()
    );
    println!(
        "Trials: {}, accepted: {}, refinements: {}",
        report.trials, report.accepted, report.refinements
    );

    Ok(())
}
