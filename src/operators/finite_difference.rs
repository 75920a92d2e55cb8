//! Central finite differences on a uniform grid.
//!
//! Interior nodes use the standard three-point stencils. The two boundary
//! values are copied from their nearest interior neighbour:
//! `d[0] = d[1]` and `d[n-1] = d[n-2]`.
//!
//! With fewer than three samples there is no interior node and the result
//! is all zeros.

/// First derivative: `(f[i+1] - f[i-1]) / (2h)`.
pub fn central_difference(field: &[f64], spacing: f64) -> Vec<f64> {
    let n = field.len();
    let mut df = vec![0.0; n];
    if n < 3 {
        return df;
    }

    for i in 1..n - 1 {
        df[i] = (field[i + 1] - field[i - 1]) / spacing / 2.0;
    }
    replicate_boundaries(&mut df);
    df
}

/// Second derivative: `(f[i+1] - 2 f[i] + f[i-1]) / h^2`.
pub fn second_central_difference(field: &[f64], spacing: f64) -> Vec<f64> {
    let n = field.len();
    let mut d2f = vec![0.0; n];
    if n < 3 {
        return d2f;
    }

    let h2 = spacing * spacing;
    for i in 1..n - 1 {
        d2f[i] = (field[i + 1] - 2.0 * field[i] + field[i - 1]) / h2;
    }
    replicate_boundaries(&mut d2f);
    d2f
}

#[inline]
fn replicate_boundaries(d: &mut [f64]) {
    let n = d.len();
    d[0] = d[1];
    d[n - 1] = d[n - 2];
}
