//! Ranking of a wallpaper's colors as theme seeds.
//!
//! A color scores well when the wallpaper has a lot of colors of about
//! the same hue, and when it is colorful.  Colors too dark, too gray or
//! too rare to work as an accent are discarded, and so are colors whose
//! hue is close to a better ranked one.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;
use crate::{Argb, GOOGLE_BLUE};
use crate::cam::{Appearance, AppearanceModel,
                 utils::{difference_degrees, sanitize_degrees}};

/// Minimum chroma of a usable seed.
pub const CUTOFF_CHROMA: f64 = 15.;

/// Minimum tone of a usable seed.
pub const CUTOFF_TONE: f64 = 10.;

/// Turns a weighted color population into seed candidates, best first.
///
/// Implementations must be deterministic and must not return an empty
/// list.
pub trait ScoringPolicy {
    fn rank(&self, model: &dyn AppearanceModel,
            population: &BTreeMap<Argb, u32>) -> Vec<Argb>;
}

/// The default [`ScoringPolicy`].
///
/// All fields are tunable; [`Score::default`] gives the stock values.
/// The cutoffs only apply to a weighted population: the main colors of a
/// live wallpaper are always filtered with [`CUTOFF_CHROMA`] and
/// [`CUTOFF_TONE`] (see [`select_seed_candidates`]).
///
/// [`select_seed_candidates`]: crate::selector::select_seed_candidates
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Score {
    pub cutoff_chroma: f64,
    pub cutoff_tone: f64,
    /// Minimum share of the population (0 to 1) in the hue window of a
    /// color for it to be kept.
    pub cutoff_excited_proportion: f64,
    /// Chroma at which colors start to be favored.
    pub target_chroma: f64,
    pub weight_proportion: f64,
    pub weight_chroma_above: f64,
    pub weight_chroma_below: f64,
    /// Half width, in degrees, of the hue window; also the minimum hue
    /// difference between two returned colors.  Windows wider than 180
    /// cover the whole hue circle.
    pub hue_window: f64,
    /// Returned alone when no color survives.
    pub fallback: Argb,
}

impl Default for Score {
    fn default() -> Self {
        Score {
            cutoff_chroma: CUTOFF_CHROMA,
            cutoff_tone: CUTOFF_TONE,
            cutoff_excited_proportion: 0.01,
            target_chroma: 48.,
            weight_proportion: 0.7,
            weight_chroma_above: 0.3,
            weight_chroma_below: 0.1,
            hue_window: 15.,
            fallback: GOOGLE_BLUE,
        }
    }
}

struct Scored {
    argb: Argb,
    cam: Appearance,
    excited_proportion: f64,
    score: f64,
}

#[inline]
fn hue_bucket(hue: f64) -> usize {
    sanitize_degrees(hue.round()) as usize
}

impl Score {
    /// Whether the color is usable at all, whatever its population.
    pub fn is_usable(&self, cam: &Appearance) -> bool {
        cam.chroma >= self.cutoff_chroma && cam.tone >= self.cutoff_tone
    }

    fn score(&self, cam: &Appearance, excited_proportion: f64) -> f64 {
        let proportion_score = excited_proportion * 100. * self.weight_proportion;
        let chroma_weight = if cam.chroma < self.target_chroma {
            self.weight_chroma_below
        } else {
            self.weight_chroma_above
        };
        proportion_score + (cam.chroma - self.target_chroma) * chroma_weight
    }

    fn scored(&self, model: &dyn AppearanceModel,
              population: &BTreeMap<Argb, u32>) -> Vec<Scored> {
        let total: f64 = population.values().map(|&w| w as f64).sum();
        if total <= 0. { return vec![] }
        let cams: Vec<(Argb, Appearance, f64)> = population.iter()
            .map(|(&argb, &w)| (argb, model.to_appearance(argb),
                                w as f64 / total))
            .collect();
        let mut hue_proportions = [0.; 360];
        for (_, cam, proportion) in &cams {
            hue_proportions[hue_bucket(cam.hue)] += proportion;
        }
        let window = self.hue_window.clamp(0., 180.).round() as i64;
        cams.into_iter().map(|(argb, cam, _)| {
            let hue = hue_bucket(cam.hue) as i64;
            let excited_proportion: f64 = (hue - window .. hue + window)
                .map(|h| hue_proportions[h.rem_euclid(360) as usize])
                .sum();
            let score = self.score(&cam, excited_proportion);
            Scored { argb, cam, excited_proportion, score }
        }).collect()
    }
}

impl ScoringPolicy for Score {
    fn rank(&self, model: &dyn AppearanceModel,
            population: &BTreeMap<Argb, u32>) -> Vec<Argb> {
        let mut candidates: Vec<Scored> = self.scored(model, population)
            .into_iter()
            .filter(|s| self.is_usable(&s.cam)
                    && s.excited_proportion >= self.cutoff_excited_proportion)
            .collect();
        candidates.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
                .then(a.argb.cmp(&b.argb))
        });
        let mut chosen: Vec<&Scored> = Vec::new();
        for c in &candidates {
            let duplicate_hue = chosen.iter().any(|k| {
                difference_degrees(c.cam.hue, k.cam.hue) < self.hue_window
            });
            if !duplicate_hue { chosen.push(c) }
        }
        if chosen.is_empty() {
            debug!(colors = population.len(), fallback = %self.fallback,
                   "no wallpaper color is usable as a seed");
            return vec![self.fallback]
        }
        chosen.into_iter().map(|s| s.argb).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cam::Cam16;

    /// Appearance read from a table; unknown colors are black.
    struct Table(Vec<(Argb, Appearance)>);

    impl AppearanceModel for Table {
        fn to_appearance(&self, argb: Argb) -> Appearance {
            self.0.iter().find(|(c, _)| *c == argb).map(|(_, a)| *a)
                .unwrap_or(Appearance { hue: 0., chroma: 0., tone: 0. })
        }

        fn from_appearance(&self, _: f64, _: f64, _: f64) -> Argb {
            Argb::BLACK
        }
    }

    fn app(hue: f64, chroma: f64, tone: f64) -> Appearance {
        Appearance { hue, chroma, tone }
    }

    fn population(colors: &[(u32, u32)]) -> BTreeMap<Argb, u32> {
        colors.iter().map(|&(c, w)| (Argb(c), w)).collect()
    }

    #[test]
    fn most_represented_hue_first() {
        let model = Table(vec![(Argb(1), app(30., 40., 50.)),
                               (Argb(2), app(200., 40., 50.))]);
        let ranked = Score::default()
            .rank(&model, &population(&[(1, 10), (2, 90)]));
        assert_eq!(ranked, vec![Argb(2), Argb(1)]);
    }

    #[test]
    fn chroma_breaks_even_populations() {
        let model = Table(vec![(Argb(1), app(30., 30., 50.)),
                               (Argb(2), app(200., 60., 50.))]);
        let ranked = Score::default()
            .rank(&model, &population(&[(1, 50), (2, 50)]));
        assert_eq!(ranked, vec![Argb(2), Argb(1)]);
    }

    #[test]
    fn close_hues_collapse() {
        let model = Table(vec![(Argb(1), app(100., 50., 50.)),
                               (Argb(2), app(108., 40., 50.)),
                               (Argb(3), app(250., 40., 50.))]);
        let ranked = Score::default()
            .rank(&model, &population(&[(1, 50), (2, 30), (3, 20)]));
        assert_eq!(ranked, vec![Argb(1), Argb(3)]);
    }

    #[test]
    fn hue_window_wraps_around_zero() {
        let model = Table(vec![(Argb(1), app(355., 50., 50.)),
                               (Argb(2), app(5., 40., 50.))]);
        let ranked = Score::default()
            .rank(&model, &population(&[(1, 50), (2, 50)]));
        assert_eq!(ranked, vec![Argb(1)]);
    }

    #[test]
    fn unusable_colors_are_dropped() {
        let model = Table(vec![(Argb(1), app(30., 10., 50.)),   // gray
                               (Argb(2), app(90., 50., 5.)),    // dark
                               (Argb(3), app(200., 50., 50.)),  // rare
                               (Argb(4), app(300., 50., 50.))]);
        let ranked = Score::default().rank(
            &model, &population(&[(1, 500), (2, 500), (3, 1), (4, 200)]));
        assert_eq!(ranked, vec![Argb(4)]);
    }

    #[test]
    fn fallback_when_nothing_survives() {
        let model = Table(vec![(Argb(1), app(30., 2., 50.))]);
        let score = Score::default();
        assert_eq!(score.rank(&model, &population(&[(1, 10)])),
                   vec![GOOGLE_BLUE]);
        let score = Score { fallback: Argb(0xFF_1B_6E_F3), ..score };
        assert_eq!(score.rank(&model, &population(&[(1, 10)])),
                   vec![Argb(0xFF_1B_6E_F3)]);
        assert_eq!(score.rank(&model, &population(&[])),
                   vec![Argb(0xFF_1B_6E_F3)]);
    }

    #[test]
    fn ties_are_broken_by_color() {
        let model = Table(vec![(Argb(7), app(40., 40., 50.)),
                               (Argb(3), app(220., 40., 50.))]);
        let pop = population(&[(7, 10), (3, 10)]);
        let ranked = Score::default().rank(&model, &pop);
        assert_eq!(ranked, vec![Argb(3), Argb(7)]);
        assert_eq!(Score::default().rank(&model, &pop), ranked);
    }

    #[test]
    fn huge_hue_window_covers_the_circle() {
        let model = Table(vec![(Argb(1), app(30., 50., 50.)),
                               (Argb(2), app(200., 60., 50.))]);
        let pop = population(&[(1, 90), (2, 10)]);
        for hue_window in [1e30, f64::INFINITY, 180.] {
            let score = Score { hue_window, ..Score::default() };
            assert_eq!(score.rank(&model, &pop), vec![Argb(2)]);
        }
        // An empty window leaves every color without excited proportion.
        let score = Score { hue_window: -1e30, ..Score::default() };
        assert_eq!(score.rank(&model, &pop), vec![GOOGLE_BLUE]);
    }

    #[test]
    fn real_colors() {
        let pop = population(&[(0xFF_E0_40_30, 300), (0xFF_30_60_D0, 100),
                               (0xFF_80_80_80, 1000)]);
        let ranked = Score::default().rank(&Cam16::default(), &pop);
        assert_eq!(ranked, vec![Argb(0xFF_E0_40_30), Argb(0xFF_30_60_D0)]);
    }
}
