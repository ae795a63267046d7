//! sRGB, CIE XYZ and L* helpers.
//!
//! XYZ and linear RGB values are on a 0–100 scale, L* on 0–100.

use crate::Argb;

/// D65 white point in XYZ (Y = 100).
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

pub(crate) const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

pub(crate) const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.86206786, -1.01125463, 0.14918677],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.04996444],
];

const EPSILON: f64 = 216. / 24389.;
const KAPPA: f64 = 24389. / 27.;

#[inline]
pub(crate) fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
    [row(&m[0]), row(&m[1]), row(&m[2])]
}

/// Linear value (0–100) of an 8-bit sRGB component.
pub fn linearized(component: u8) -> f64 {
    let n = component as f64 / 255.;
    if n <= 0.040449936 { n / 12.92 * 100. }
    else { ((n + 0.055) / 1.055).powf(2.4) * 100. }
}

/// 8-bit sRGB component of a linear value (0–100), clamped to the
/// gamut.
pub fn delinearized(linear: f64) -> u8 {
    let n = linear / 100.;
    let d = if n <= 0.0031308 { n * 12.92 }
            else { 1.055 * n.powf(1. / 2.4) - 0.055 };
    (d * 255.).round().clamp(0., 255.) as u8
}

pub fn xyz_from_argb(c: Argb) -> [f64; 3] {
    let rgb = [linearized(c.red()), linearized(c.green()),
               linearized(c.blue())];
    mat_mul(&SRGB_TO_XYZ, rgb)
}

/// Opaque color for `xyz`; out of gamut components are clipped.
pub fn argb_from_xyz(xyz: [f64; 3]) -> Argb {
    let [r, g, b] = mat_mul(&XYZ_TO_SRGB, xyz);
    Argb::from_rgb(delinearized(r), delinearized(g), delinearized(b))
}

/// Relative luminance Y (0–100) of the lightness `lstar`.
pub fn y_from_lstar(lstar: f64) -> f64 {
    if lstar > 8. { ((lstar + 16.) / 116.).powi(3) * 100. }
    else { lstar / KAPPA * 100. }
}

/// Lightness L* of the relative luminance `y` (0–100).
pub fn lstar_from_y(y: f64) -> f64 {
    let y = y / 100.;
    if y <= EPSILON { KAPPA * y }
    else { 116. * y.cbrt() - 16. }
}

pub fn lstar_from_argb(c: Argb) -> f64 {
    lstar_from_y(xyz_from_argb(c)[1])
}

/// The gray with lightness `lstar`.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    if lstar < 1. { return Argb::BLACK }
    if lstar > 99. { return Argb::WHITE }
    let v = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(v, v, v)
}

/// `degrees` brought into \[0, 360).
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.);
    if d >= 360. { 0. } else { d }
}

/// Shortest angular distance between two hues, in \[0, 180\].
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180. - ((a - b).abs() - 180.).abs()
}

#[inline]
pub(crate) fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    start + (stop - start) * amount
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lstar_of_extremes() {
        assert!(lstar_from_argb(Argb::BLACK).abs() < 1e-9);
        assert!((lstar_from_argb(Argb::WHITE) - 100.).abs() < 1e-3);
    }

    #[test]
    fn lstar_y_inverse() {
        for l in [0., 5., 8., 20., 49.6, 50., 75., 100.] {
            let back = lstar_from_y(y_from_lstar(l));
            assert!((back - l).abs() < 1e-9, "{l} ≉ {back}");
        }
    }

    #[test]
    fn gray_from_lstar() {
        assert_eq!(argb_from_lstar(0.5), Argb::BLACK);
        assert_eq!(argb_from_lstar(99.5), Argb::WHITE);
        let g = argb_from_lstar(50.);
        assert_eq!((g.red(), g.red()), (g.green(), g.blue()));
        assert!((lstar_from_argb(g) - 50.).abs() < 0.5);
    }

    #[test]
    fn srgb_round_trip() {
        for v in [0u8, 1, 10, 127, 128, 200, 255] {
            assert_eq!(delinearized(linearized(v)), v);
        }
    }

    #[test]
    fn degrees() {
        assert_eq!(sanitize_degrees(-30.), 330.);
        assert_eq!(sanitize_degrees(420.), 60.);
        assert_eq!(sanitize_degrees(360.), 0.);
        assert_eq!(difference_degrees(350., 10.), 20.);
        assert_eq!(difference_degrees(10., 350.), 20.);
        assert_eq!(difference_degrees(0., 180.), 180.);
    }
}
