use ndarray::Array2;

/// Meshgrid construction for spatial sampling grids
///
/// Rows are indexed by y and columns by x, so both outputs have shape
/// `(y.len(), x.len())`.
pub fn meshgrid(x: &[f64], y: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());

    let xx = Array2::from_shape_fn(shape, |(_, col)| x[col]);
    let yy = Array2::from_shape_fn(shape, |(row, _)| y[row]);

    (xx, yy)
}

/// Create an evenly spaced meshgrid over a rectangular window.
///
/// `nx` and `ny` are the number of samples along each axis; endpoints are
/// included. A single sample along an axis sits at that axis's minimum.
pub fn linspace_grid(
    x_min: f64,
    x_max: f64,
    nx: usize,
    y_min: f64,
    y_max: f64,
    ny: usize,
) -> (Array2<f64>, Array2<f64>) {
    let x = linspace(x_min, x_max, nx);
    let y = linspace(y_min, y_max, ny);
    meshgrid(&x, &y)
}

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|k| start + step * k as f64).collect()
        }
    }
}
