//! Full set of theme shades for one seed color.

use tracing::debug;
use crate::{Argb, GOOGLE_BLUE};
use crate::cam::{AppearanceModel, Cam16};
use crate::palettes::{CorePalettePolicy, Family, PalettePolicy};
use crate::selector::WallpaperColors;
use crate::shades::ShadeLadder;

/// The five shade ladders of a theme.
///
/// ```
/// use monet_shades::{Argb, Monet, GOOGLE_BLUE};
/// let a = Monet::new(Argb::TRANSPARENT);
/// assert_eq!(a.seed(), GOOGLE_BLUE);
/// assert_eq!(a, Monet::new(GOOGLE_BLUE));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Monet {
    seed: Argb,
    accent1: ShadeLadder,
    accent2: ShadeLadder,
    accent3: ShadeLadder,
    neutral1: ShadeLadder,
    neutral2: ShadeLadder,
}

impl Monet {
    /// Shades of `seed` with the CAM16 model and [`CorePalettePolicy`].
    /// A transparent seed is replaced by [`GOOGLE_BLUE`].
    pub fn new(seed: Argb) -> Self {
        Self::with(&Cam16::default(), &CorePalettePolicy, seed)
    }

    /// Shades of the main color of a wallpaper.
    pub fn from_wallpaper(colors: &WallpaperColors) -> Self {
        Self::new(colors.main_color())
    }

    /// Shades of `seed` with the given model and palette policy.
    pub fn with(model: &dyn AppearanceModel, policy: &dyn PalettePolicy,
                seed: Argb) -> Self {
        let seed = if seed.is_transparent() {
            debug!(%seed, fallback = %GOOGLE_BLUE, "transparent seed color");
            GOOGLE_BLUE
        } else {
            seed
        };
        let palette = policy.expand(model, seed);
        let ladder = |f| ShadeLadder::from_palette(model, palette.get(f));
        Monet {
            seed,
            accent1: ladder(Family::Accent1),
            accent2: ladder(Family::Accent2),
            accent3: ladder(Family::Accent3),
            neutral1: ladder(Family::Neutral1),
            neutral2: ladder(Family::Neutral2),
        }
    }

    /// The seed actually used.
    pub fn seed(&self) -> Argb { self.seed }

    pub fn shades(&self, family: Family) -> &ShadeLadder {
        match family {
            Family::Accent1 => &self.accent1,
            Family::Accent2 => &self.accent2,
            Family::Accent3 => &self.accent3,
            Family::Neutral1 => &self.neutral1,
            Family::Neutral2 => &self.neutral2,
        }
    }

    pub fn accent1_shades(&self) -> &ShadeLadder { &self.accent1 }
    pub fn accent2_shades(&self) -> &ShadeLadder { &self.accent2 }
    pub fn accent3_shades(&self) -> &ShadeLadder { &self.accent3 }
    pub fn neutral1_shades(&self) -> &ShadeLadder { &self.neutral1 }
    pub fn neutral2_shades(&self) -> &ShadeLadder { &self.neutral2 }

    /// The accent ladders one after the other (39 colors).
    pub fn all_accent_shades(&self) -> Vec<Argb> {
        self.concat(&Family::ACCENTS)
    }

    /// The neutral ladders one after the other (26 colors).
    pub fn all_neutral_shades(&self) -> Vec<Argb> {
        self.concat(&Family::NEUTRALS)
    }

    fn concat(&self, families: &[Family]) -> Vec<Argb> {
        families.iter()
            .flat_map(|&f| self.shades(f).iter().copied())
            .collect()
    }
}
