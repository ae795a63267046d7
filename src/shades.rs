//! The 13 step lightness ladder of a color family.

use std::ops::Index;
use tracing::trace;
use crate::Argb;
use crate::cam::AppearanceModel;
use crate::palettes::{HueChroma, TonalPalette};

/// Number of colors in a [`ShadeLadder`].
pub const LADDER_LEN: usize = 13;

/// Maximum chroma of a ladder.  Higher chromas are brought down to it,
/// which mutes wallpaper accents to a level closer to the stock system
/// palette.
pub const CHROMA_CAP: f64 = 40.;

/// Position of the midtone (the `_400` shade) in a ladder.
pub const MIDTONE_INDEX: usize = 6;

/// Tone of the midtone.  At L* = 50 the midtone does not reach the WCAG
/// 2.0 AA contrast ratio of 4.5:1 for normal text
/// (<https://www.w3.org/TR/WCAG20-TECHS/G18.html>); 49.6 is the closest
/// tone that does.
pub const MIDTONE_TONE: f64 = 49.6;

/// Tones of the ladder entries, lightest first: 99, 95, then
/// `100 - 10 * (i - 1)` for the index `i` in 2..=12, with the midtone
/// lowered to [`MIDTONE_TONE`].  The last two entries (0 and -10) both
/// render black.
pub const TONES: [f64; LADDER_LEN] =
    [99., 95., 90., 80., 70., 60., MIDTONE_TONE, 40., 30., 20., 10., 0., -10.];

/// Colors of one hue and chroma at the tones [`TONES`], lightest first.
///
/// ```
/// use monet_shades::{Cam16, ShadeLadder, TONES};
/// let ladder = ShadeLadder::synthesize(&Cam16::default(), 282., 60.);
/// assert_eq!(ladder.len(), 13);
/// assert_eq!(ladder.chroma(), 40.);
/// assert_eq!(TONES[6], 49.6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeLadder {
    key: HueChroma,
    colors: [Argb; LADDER_LEN],
}

impl ShadeLadder {
    /// Ladder of `hue` with chroma `chroma` capped at [`CHROMA_CAP`].
    pub fn synthesize(model: &dyn AppearanceModel, hue: f64, chroma: f64)
                      -> Self {
        let chroma = chroma.min(CHROMA_CAP);
        trace!(hue, chroma, "synthesizing shade ladder");
        let colors = TONES.map(|tone| model.from_appearance(hue, chroma, tone));
        ShadeLadder { key: HueChroma::new(hue, chroma), colors }
    }

    /// Ladder of the hue and chroma of `palette`.
    pub fn from_palette(model: &dyn AppearanceModel, palette: &TonalPalette)
                        -> Self {
        Self::synthesize(model, palette.hue(), palette.chroma())
    }

    #[inline]
    pub fn hue(&self) -> f64 { self.key.hue }

    /// The chroma used for every entry, after capping.
    #[inline]
    pub fn chroma(&self) -> f64 { self.key.chroma }

    /// Always [`LADDER_LEN`].
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.colors.len() }

    #[inline]
    pub fn as_slice(&self) -> &[Argb] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, Argb> { self.colors.iter() }

    /// The midtone, at [`MIDTONE_TONE`].
    pub fn midtone(&self) -> Argb { self.colors[MIDTONE_INDEX] }

    /// Pairs of (tone, color), lightest first.
    pub fn tones(&self) -> impl Iterator<Item = (f64, Argb)> + '_ {
        TONES.iter().copied().zip(self.colors.iter().copied())
    }
}

impl Index<usize> for ShadeLadder {
    type Output = Argb;

    fn index(&self, i: usize) -> &Argb { &self.colors[i] }
}

impl<'a> IntoIterator for &'a ShadeLadder {
    type Item = &'a Argb;
    type IntoIter = std::slice::Iter<'a, Argb>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

impl From<ShadeLadder> for Vec<Argb> {
    fn from(l: ShadeLadder) -> Self { l.colors.to_vec() }
}
