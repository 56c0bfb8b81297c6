use super::*;
use crate::record::Archive;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const CANVAS: (u32, u32) = (1000, 800);

/// PNG counterpart of [`write_convergence`]: both best-response curves in
/// blue and red, every trajectory in faint green ending in a green dot,
/// and the Nash point in black, over the joint action square.
///
/// Charts carry no text, so no font backend is needed.
pub fn plot_convergence(
    path: &Path,
    reaction: &Reaction,
    dataset: &Dataset,
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-1f64..1f64, -1f64..1f64)
        .map_err(drawing)?;
    chart
        .draw_series([
            PathElement::new(vec![(-1.0, 0.0), (1.0, 0.0)], BLACK.mix(0.2)),
            PathElement::new(vec![(0.0, -1.0), (0.0, 1.0)], BLACK.mix(0.2)),
        ])
        .map_err(drawing)?;
    chart
        .draw_series(LineSeries::new(reaction.human().iter().copied(), BLUE.stroke_width(2)))
        .map_err(drawing)?;
    chart
        .draw_series(LineSeries::new(reaction.machine().iter().copied(), RED.stroke_width(2)))
        .map_err(drawing)?;
    for run in dataset.runs() {
        let points = run
            .human_inputs()
            .iter()
            .copied()
            .zip(run.machine_inputs().iter().copied());
        chart
            .draw_series(LineSeries::new(points, GREEN.mix(0.3)))
            .map_err(drawing)?;
    }
    let endpoints = dataset
        .runs()
        .iter()
        .filter_map(|run| Some((*run.human_inputs().last()?, *run.machine_inputs().last()?)));
    chart
        .draw_series(endpoints.map(|point| Circle::new(point, 4, GREEN.filled())))
        .map_err(drawing)?;
    chart
        .draw_series(std::iter::once(Circle::new(reaction.nash(), 6, BLACK.filled())))
        .map_err(drawing)?;
    root.present().map_err(drawing)?;
    Ok(())
}

/// PNG counterpart of [`write_learning`]: smoothed median machine cost in
/// red on the left axis, human cost in blue on its own right axis.
pub fn plot_learning(path: &Path, dataset: &Dataset) -> anyhow::Result<()> {
    let machine = dataset.smooth(Archive::machine_scores);
    let human = dataset.smooth(Archive::human_scores);
    let frames = (machine.len().max(2) - 1) as f64;
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0f64..frames, span(&machine))
        .map_err(drawing)?
        .set_secondary_coord(0f64..frames, span(&human));
    chart
        .draw_series(LineSeries::new(indexed(&machine), RED.stroke_width(2)))
        .map_err(drawing)?;
    chart
        .draw_secondary_series(LineSeries::new(indexed(&human), BLUE.stroke_width(2)))
        .map_err(drawing)?;
    root.present().map_err(drawing)?;
    Ok(())
}

fn indexed(values: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    values.iter().enumerate().map(|(i, &y)| (i as f64, y))
}

/// Value range padded by 5%, never degenerate.
fn span(values: &[f64]) -> Range<f64> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((hi - lo) * 0.05).max(1e-3);
    lo - pad..hi + pad
}

fn drawing<E>(error: DrawingAreaErrorKind<E>) -> anyhow::Error
where
    E: std::error::Error + Send + Sync,
{
    anyhow::anyhow!("drawing failed: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RoundLabel;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G'];

    fn dataset(len: usize) -> Dataset {
        let runs = (0..3)
            .map(|r| {
                let h = (0..len)
                    .map(|i| (i + r) as f64 / len as f64 - 0.5)
                    .collect::<Vec<f64>>();
                let m = h.iter().map(|x| -x / 2.0).collect::<Vec<f64>>();
                let cost = h.iter().map(|x| x * x).collect::<Vec<f64>>();
                Archive::new(h, m, cost.clone(), cost)
            })
            .collect();
        Dataset::from_runs(RoundLabel::experiment(1), runs).unwrap()
    }

    #[test]
    fn convergence_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.png");
        plot_convergence(&path, &Reaction::default(), &dataset(50)).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(PNG));
    }

    #[test]
    fn learning_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("l.png");
        plot_learning(&path, &dataset(250)).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(PNG));
    }

    #[test]
    fn flat_series_still_has_a_range() {
        let range = span(&[2.0; 10]);
        assert!(range.start < 2.0 && range.end > 2.0);
        assert_eq!(span(&[]), 0.0..1.0);
    }
}
