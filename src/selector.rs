//! Choice of the seed color of a wallpaper.

use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use crate::{Argb, GOOGLE_BLUE};
use crate::cam::{AppearanceModel, Cam16};
use crate::score::{Score, ScoringPolicy, CUTOFF_CHROMA, CUTOFF_TONE};

/// Colors sampled from a wallpaper, with their pixel counts.
pub type ColorPopulation = BTreeMap<Argb, u32>;

/// What the platform reports about the colors of a wallpaper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallpaperColors {
    /// Every sampled color with its weight.  Live wallpapers report no
    /// histogram: the map is then empty or all its weights are zero.
    pub all_colors: ColorPopulation,
    /// A few representative colors, most important first.
    pub main_colors: Vec<Argb>,
}

impl WallpaperColors {
    pub fn new(all_colors: ColorPopulation, main_colors: Vec<Argb>) -> Self {
        WallpaperColors { all_colors, main_colors }
    }

    /// Only `main_colors`, as reported for live wallpapers.
    pub fn from_main_colors(main_colors: Vec<Argb>) -> Self {
        WallpaperColors { all_colors: BTreeMap::new(), main_colors }
    }

    /// Sum of the weights of `all_colors`.
    pub fn population(&self) -> u64 {
        self.all_colors.values().map(|&w| w as u64).sum()
    }

    /// [`select_seed_candidates`] with the CAM16 model and the default
    /// [`Score`].
    pub fn seed_candidates(&self) -> Vec<Argb> {
        select_seed_candidates(&Cam16::default(), &Score::default(), self)
    }

    /// [`select_main_color`] with the CAM16 model and the default
    /// [`Score`].
    pub fn main_color(&self) -> Argb {
        select_main_color(&Cam16::default(), &Score::default(), self)
    }
}

impl FromIterator<(Argb, u32)> for WallpaperColors {
    fn from_iter<I: IntoIterator<Item = (Argb, u32)>>(iter: I) -> Self {
        WallpaperColors::new(iter.into_iter().collect(), vec![])
    }
}

/// The colors of `colors` usable as a theme seed, most representative
/// first.  The list is never empty.
///
/// When the wallpaper has a population, it is ranked by `scoring`.
/// Otherwise the main colors are used, without duplicates, keeping only
/// those colorful and light enough; [`GOOGLE_BLUE`] when there are
/// none.
///
/// ```
/// use monet_shades::{Argb, WallpaperColors, GOOGLE_BLUE};
/// let live = WallpaperColors::from_main_colors(vec![Argb(0xFF_20_20_20)]);
/// assert_eq!(live.seed_candidates(), vec![GOOGLE_BLUE]);
/// ```
pub fn select_seed_candidates(model: &dyn AppearanceModel,
                              scoring: &dyn ScoringPolicy,
                              colors: &WallpaperColors) -> Vec<Argb> {
    if colors.population() > 0 {
        let ranked = scoring.rank(model, &colors.all_colors);
        if ranked.is_empty() {
            debug!("scoring returned no color, using the fallback seed");
            return vec![GOOGLE_BLUE]
        }
        return ranked
    }
    debug!(main_colors = colors.main_colors.len(),
           "empty population, selecting among the main colors");
    let mut seen = HashSet::new();
    let usable: Vec<Argb> = colors.main_colors.iter().copied()
        .filter(|&c| seen.insert(c))
        .filter(|&c| {
            let a = model.to_appearance(c);
            a.chroma >= CUTOFF_CHROMA && a.tone >= CUTOFF_TONE
        })
        .collect();
    if usable.is_empty() {
        debug!(fallback = %GOOGLE_BLUE, "no usable main color");
        return vec![GOOGLE_BLUE]
    }
    usable
}

/// The best seed of `colors`: the first of [`select_seed_candidates`].
pub fn select_main_color(model: &dyn AppearanceModel,
                         scoring: &dyn ScoringPolicy,
                         colors: &WallpaperColors) -> Argb {
    // `select_seed_candidates` never returns an empty list.
    select_seed_candidates(model, scoring, colors)[0]
}
