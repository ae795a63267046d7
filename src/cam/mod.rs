//! The CAM16 color appearance model.
//!
//! [`AppearanceModel`] is the seam used by the rest of the crate: it
//! maps a color to its (hue, chroma, tone) [`Appearance`] and back.
//! [`Cam16`] implements it with CAM16 hue and chroma and CIE L* as
//! tone.

use std::f64::consts::PI;
use lazy_static::lazy_static;
use crate::Argb;

pub mod utils;
use utils::*;

/// Perceptual coordinates of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    /// Hue in degrees, in \[0, 360).
    pub hue: f64,
    /// Colorfulness, ≥ 0.
    pub chroma: f64,
    /// Perceptual lightness in \[0, 100\].
    pub tone: f64,
}

/// A color appearance model: conversion between ARGB colors and
/// (hue, chroma, tone) coordinates.
///
/// Implementations must be deterministic.  `from_appearance` must be
/// total: coordinates that have no exact sRGB counterpart are mapped
/// to the closest displayable color.
pub trait AppearanceModel {
    fn to_appearance(&self, argb: Argb) -> Appearance;

    fn from_appearance(&self, hue: f64, chroma: f64, tone: f64) -> Argb;
}

/// Parameters of the environment in which colors are viewed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewingConditions {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: [f64; 3],
    fl: f64,
    fl_root: f64,
    z: f64,
}

impl ViewingConditions {
    /// Build viewing conditions.
    ///
    /// - `white_point`: XYZ of the adopted white (Y = 100).
    /// - `adapting_luminance`: in cd/m².
    /// - `background_lstar`: L* of the background.
    /// - `surround`: 0 (dark) to 2 (average).
    /// - `discounting_illuminant`: whether the eye fully adapted to
    ///   the illuminant.
    pub fn new(white_point: [f64; 3], adapting_luminance: f64,
               background_lstar: f64, surround: f64,
               discounting_illuminant: bool) -> Self {
        let la = adapting_luminance;
        let [rw, gw, bw] = mat_mul(&XYZ_TO_CAM16RGB, white_point);
        let f = 0.8 + surround / 10.;
        let c = if f >= 0.9 { lerp(0.59, 0.69, (f - 0.9) * 10.) }
                else { lerp(0.525, 0.59, (f - 0.8) * 10.) };
        let d = if discounting_illuminant { 1. }
                else { f * (1. - (1. / 3.6) * ((-la - 42.) / 92.).exp()) };
        let d = d.clamp(0., 1.);
        let rgb_d = [d * (100. / rw) + 1. - d,
                     d * (100. / gw) + 1. - d,
                     d * (100. / bw) + 1. - d];
        let k = 1. / (5. * la + 1.);
        let k4 = k.powi(4);
        let k4f = 1. - k4;
        let fl = k4 * la + 0.1 * k4f * k4f * (5. * la).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let rgb_a = [rw, gw, bw].iter().zip(rgb_d)
            .map(|(w, d)| { let f = (fl * d * w / 100.).powf(0.42);
                            400. * f / (f + 27.13) })
            .collect::<Vec<_>>();
        let aw = (2. * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;
        ViewingConditions { n, aw, nbb, ncb: nbb, c, nc: f, rgb_d, fl,
                            fl_root: fl.powf(0.25), z }
    }
}

lazy_static! {
    /// sRGB viewing conditions: D65 white, background at L* 50,
    /// average surround.
    pub static ref DEFAULT_VIEWING_CONDITIONS: ViewingConditions =
        ViewingConditions::new(WHITE_POINT_D65,
                               200. / PI * y_from_lstar(50.) / 100.,
                               50., 2., false);
}

impl Default for ViewingConditions {
    fn default() -> Self { *DEFAULT_VIEWING_CONDITIONS }
}

/// A color in CAM16 coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam {
    /// Hue angle in degrees.
    pub hue: f64,
    pub chroma: f64,
    /// Lightness.
    pub j: f64,
    /// Brightness.
    pub q: f64,
    /// Colorfulness.
    pub m: f64,
    /// Saturation.
    pub s: f64,
    // CAM16-UCS coordinates, used for distances.
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam {
    fn from_ucs(hue: f64, chroma: f64, j: f64, q: f64, m: f64, s: f64)
                -> Self {
        let jstar = (1. + 100. * 0.007) * j / (1. + 0.007 * j);
        let mstar = 1. / 0.0228 * (1. + 0.0228 * m).ln();
        let h = hue.to_radians();
        Cam { hue, chroma, j, q, m, s, jstar,
              astar: mstar * h.cos(), bstar: mstar * h.sin() }
    }

    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, &DEFAULT_VIEWING_CONDITIONS)
    }

    pub fn from_argb_in(argb: Argb, vc: &ViewingConditions) -> Self {
        let xyz = xyz_from_argb(argb);
        let rgb_t = mat_mul(&XYZ_TO_CAM16RGB, xyz);
        let mut rgb_a = [0.; 3];
        for i in 0 .. 3 {
            let d = vc.rgb_d[i] * rgb_t[i];
            let af = (vc.fl * d.abs() / 100.).powf(0.42);
            rgb_a[i] = d.signum() * 400. * af / (af + 27.13);
        }
        let [ra, ga, ba] = rgb_a;
        let a = (11. * ra - 12. * ga + ba) / 11.;
        let b = (ra + ga - 2. * ba) / 9.;
        let u = (20. * ra + 20. * ga + 21. * ba) / 20.;
        let p2 = (40. * ra + 20. * ga + ba) / 20.;
        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let ac = p2 * vc.nbb;
        let j = 100. * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4. / vc.c * (j / 100.).sqrt() * (vc.aw + 4.) * vc.fl_root;
        let hue_prime = if hue < 20.14 { hue + 360. } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.).cos() + 3.8);
        let p1 = 50000. / 13. * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
        let chroma = alpha * (j / 100.).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50. * (alpha * vc.c / (vc.aw + 4.)).sqrt();
        Self::from_ucs(hue, chroma, j, q, m, s)
    }

    /// CAM16 color from lightness `j`, chroma `c` and hue `h`.
    pub fn from_jch_in(j: f64, c: f64, h: f64, vc: &ViewingConditions)
                       -> Self {
        let q = 4. / vc.c * (j / 100.).sqrt() * (vc.aw + 4.) * vc.fl_root;
        let m = c * vc.fl_root;
        let alpha = c / (j / 100.).sqrt();
        let s = 50. * (alpha * vc.c / (vc.aw + 4.)).sqrt();
        Self::from_ucs(h, c, j, q, m, s)
    }

    /// The sRGB color of `self` under `vc`, clipped to the gamut.
    pub fn viewed(&self, vc: &ViewingConditions) -> Argb {
        let alpha = if self.chroma == 0. || self.j == 0. { 0. }
                    else { self.chroma / (self.j / 100.).sqrt() };
        let t = (alpha / (1.64 - 0.29f64.powf(vc.n)).powf(0.73))
            .powf(1. / 0.9);
        let h = self.hue.to_radians();
        let e_hue = 0.25 * ((h + 2.).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.).powf(1. / vc.c / vc.z);
        let p1 = e_hue * (50000. / 13.) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;
        let (h_sin, h_cos) = h.sin_cos();
        let gamma = 23. * (p2 + 0.305) * t
            / (23. * p1 + 11. * t * h_cos + 108. * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let rgb_a = [(460. * p2 + 451. * a + 288. * b) / 1403.,
                     (460. * p2 - 891. * a - 261. * b) / 1403.,
                     (460. * p2 - 220. * a - 6300. * b) / 1403.];
        let mut rgb_f = [0.; 3];
        for i in 0 .. 3 {
            let x = rgb_a[i];
            let base = (27.13 * x.abs() / (400. - x.abs())).max(0.);
            let c = x.signum() * (100. / vc.fl) * base.powf(1. / 0.42);
            rgb_f[i] = c / vc.rgb_d[i];
        }
        argb_from_xyz(mat_mul(&CAM16RGB_TO_XYZ, rgb_f))
    }

    /// Perceptual distance in CAM16-UCS.
    pub fn distance(&self, other: &Cam) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        1.41 * (dj * dj + da * da + db * db).sqrt().powf(0.63)
    }
}

// Search tolerances of the inverse transform.
const CHROMA_SEARCH_ENDPOINT: f64 = 0.4;
const LIGHTNESS_SEARCH_ENDPOINT: f64 = 0.01;
const DL_MAX: f64 = 0.2;
const DE_MAX: f64 = 1.0;

/// [`AppearanceModel`] using CAM16 hue and chroma with L* as tone.
///
/// ```
/// use monet_shades::{AppearanceModel, Argb, Cam16};
/// let cam = Cam16::default();
/// let a = cam.to_appearance(Argb(0xFF_42_85_F4));
/// let back = cam.from_appearance(a.hue, a.chroma, a.tone);
/// assert!((cam.to_appearance(back).tone - a.tone).abs() < 1.);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cam16 {
    conditions: ViewingConditions,
}

impl Cam16 {
    pub fn new(conditions: ViewingConditions) -> Self { Cam16 { conditions } }

    pub fn viewing_conditions(&self) -> &ViewingConditions {
        &self.conditions
    }

    /// Among the colors whose L* is within `DL_MAX` of `lstar`, the one
    /// closest to the hue `hue`, if any is within `DE_MAX`.  Binary
    /// search on J.
    fn find_cam_by_j(&self, hue: f64, chroma: f64, lstar: f64) -> Option<Cam> {
        let vc = &self.conditions;
        let (mut low, mut high) = (0f64, 100f64);
        let (mut best_dl, mut best_de) = (1000f64, 1000f64);
        let mut best = None;
        while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
            let mid = low + (high - low) / 2.;
            let clipped = Cam::from_jch_in(mid, chroma, hue, vc).viewed(vc);
            let clipped_lstar = lstar_from_argb(clipped);
            let dl = (lstar - clipped_lstar).abs();
            if dl < DL_MAX {
                let cam = Cam::from_argb_in(clipped, vc);
                let de = cam.distance(
                    &Cam::from_jch_in(cam.j, cam.chroma, hue, vc));
                if de <= DE_MAX && de <= best_de {
                    best_dl = dl;
                    best_de = de;
                    best = Some(cam);
                }
            }
            if best_dl == 0. && best_de == 0. { break }
            if clipped_lstar < lstar { low = mid } else { high = mid }
        }
        best
    }
}

impl AppearanceModel for Cam16 {
    fn to_appearance(&self, argb: Argb) -> Appearance {
        let cam = Cam::from_argb_in(argb, &self.conditions);
        Appearance { hue: cam.hue, chroma: cam.chroma,
                     tone: lstar_from_argb(argb) }
    }

    /// The displayable color closest to (`hue`, `chroma`, `tone`).  The
    /// tone is honored first; when the chroma cannot be reached at that
    /// tone, the largest reachable chroma is used.
    fn from_appearance(&self, hue: f64, chroma: f64, tone: f64) -> Argb {
        if chroma < 1. || tone.round() <= 0. || tone.round() >= 100. {
            return argb_from_lstar(tone)
        }
        let hue = sanitize_degrees(hue);
        let (mut low, mut high, mut mid) = (0., chroma, chroma);
        let mut first_loop = true;
        let mut answer = None;
        while (low - high).abs() >= CHROMA_SEARCH_ENDPOINT {
            let possible = self.find_cam_by_j(hue, mid, tone);
            if first_loop {
                if let Some(cam) = possible {
                    return cam.viewed(&self.conditions)
                }
                first_loop = false;
            } else if let Some(cam) = possible {
                answer = Some(cam);
                low = mid;
            } else {
                high = mid;
            }
            mid = low + (high - low) / 2.;
        }
        match answer {
            Some(cam) => cam.viewed(&self.conditions),
            None => argb_from_lstar(tone),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

    #[test]
    fn achromatic_colors() {
        let cam = Cam16::default();
        let white = cam.to_appearance(Argb::WHITE);
        assert!(white.chroma < 5., "white chroma {}", white.chroma);
        assert!(close(white.tone, 100., 1e-3));
        let black = cam.to_appearance(Argb::BLACK);
        assert!(close(black.chroma, 0., 1e-9));
        assert!(close(black.tone, 0., 1e-9));
    }

    #[test]
    fn hue_ordering_of_primaries() {
        let cam = Cam16::default();
        let red = cam.to_appearance(Argb(0xFF_FF_00_00));
        let green = cam.to_appearance(Argb(0xFF_00_FF_00));
        let blue = cam.to_appearance(Argb(0xFF_00_00_FF));
        assert!(red.hue < 45., "red hue {}", red.hue);
        assert!((120. .. 160.).contains(&green.hue), "green hue {}", green.hue);
        assert!((260. .. 300.).contains(&blue.hue), "blue hue {}", blue.hue);
        assert!(red.chroma > 40. && green.chroma > 40. && blue.chroma > 40.);
    }

    #[test]
    fn jch_round_trip() {
        let vc = ViewingConditions::default();
        for c in [Argb(0xFF_42_85_F4), Argb(0xFF_12_80_40),
                  Argb(0xFF_C0_30_30)] {
            let cam = Cam::from_argb_in(c, &vc);
            let cam2 = Cam::from_jch_in(cam.j, cam.chroma, cam.hue, &vc);
            assert_eq!(cam2.viewed(&vc), c);
            assert!(cam.distance(&cam2) < 1e-3);
        }
    }

    #[test]
    fn from_appearance_keeps_tone_and_hue() {
        let cam = Cam16::default();
        for hue in [0., 45., 120., 200., 282., 330.] {
            for tone in [30., 49.6, 70.] {
                let c = cam.from_appearance(hue, 16., tone);
                let a = cam.to_appearance(c);
                assert!(close(a.tone, tone, 0.5),
                        "h={hue} t={tone}: tone {}", a.tone);
                if a.chroma < 8. { continue }
                assert!(close(a.hue, hue, 15.) || close(a.hue, hue + 360., 15.)
                        || close(a.hue + 360., hue, 15.),
                        "h={hue} t={tone}: hue {}", a.hue);
            }
        }
    }

    #[test]
    fn from_appearance_out_of_range_tone() {
        let cam = Cam16::default();
        assert_eq!(cam.from_appearance(100., 40., 0.), Argb::BLACK);
        assert_eq!(cam.from_appearance(100., 40., -10.), Argb::BLACK);
        assert_eq!(cam.from_appearance(100., 40., 100.), Argb::WHITE);
        let gray = cam.from_appearance(100., 0.5, 50.);
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
    }

    #[test]
    fn chroma_reduced_when_out_of_gamut() {
        let cam = Cam16::default();
        let c = cam.from_appearance(282., 200., 50.);
        let a = cam.to_appearance(c);
        assert!(a.chroma < 200.);
        assert!(close(a.tone, 50., 1.), "tone {}", a.tone);
    }
}
