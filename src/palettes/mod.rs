//! From a seed color to five hue/chroma families.

use crate::Argb;
use crate::cam::{AppearanceModel, utils::sanitize_degrees};

pub(crate) mod ty;
pub use ty::{Family, HueChroma};

/// Colors constant in hue and chroma, varying in tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonalPalette {
    key: HueChroma,
}

impl TonalPalette {
    /// Tones with the hue and chroma of `argb`.
    pub fn from_argb(model: &dyn AppearanceModel, argb: Argb) -> Self {
        let a = model.to_appearance(argb);
        Self::from_hue_and_chroma(a.hue, a.chroma)
    }

    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        TonalPalette { key: HueChroma::new(hue, chroma) }
    }

    #[inline]
    pub fn hue(&self) -> f64 { self.key.hue }

    #[inline]
    pub fn chroma(&self) -> f64 { self.key.chroma }

    #[inline]
    pub fn key(&self) -> HueChroma { self.key }

    /// The color with the hue and chroma of this palette and the given
    /// tone (0 to 100).
    pub fn tone(&self, model: &dyn AppearanceModel, tone: f64) -> Argb {
        model.from_appearance(self.key.hue, self.key.chroma, tone)
    }
}

/// The five families derived from a seed color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorePalette {
    pub a1: TonalPalette,
    pub a2: TonalPalette,
    pub a3: TonalPalette,
    pub n1: TonalPalette,
    pub n2: TonalPalette,
}

impl CorePalette {
    /// Expand `seed` with [`CorePalettePolicy`].
    pub fn of(model: &dyn AppearanceModel, seed: Argb) -> Self {
        CorePalettePolicy.expand(model, seed)
    }

    pub fn get(&self, family: Family) -> &TonalPalette {
        match family {
            Family::Accent1 => &self.a1,
            Family::Accent2 => &self.a2,
            Family::Accent3 => &self.a3,
            Family::Neutral1 => &self.n1,
            Family::Neutral2 => &self.n2,
        }
    }
}

/// Rule deriving the five families of a theme from its seed.
///
/// Implementations must be deterministic.
pub trait PalettePolicy {
    fn expand(&self, model: &dyn AppearanceModel, seed: Argb) -> CorePalette;
}

/// Material You key tones: the seed hue for every family but the third
/// accent, which is rotated by 60°.  The main accent keeps the seed
/// chroma, raised to at least 48.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorePalettePolicy;

impl PalettePolicy for CorePalettePolicy {
    fn expand(&self, model: &dyn AppearanceModel, seed: Argb) -> CorePalette {
        let a = model.to_appearance(seed);
        let hue = a.hue;
        let tones = TonalPalette::from_hue_and_chroma;
        CorePalette {
            a1: tones(hue, a.chroma.max(48.)),
            a2: tones(hue, 16.),
            a3: tones(sanitize_degrees(hue + 60.), 32.),
            n1: tones(hue, 4.),
            n2: tones(hue, 8.),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cam::{Appearance, Cam16};

    /// Reports a fixed appearance for every color.
    struct Fixed(Appearance);

    impl AppearanceModel for Fixed {
        fn to_appearance(&self, _: Argb) -> Appearance { self.0 }
        fn from_appearance(&self, _: f64, _: f64, _: f64) -> Argb {
            Argb::BLACK
        }
    }

    fn fixed(hue: f64, chroma: f64) -> Fixed {
        Fixed(Appearance { hue, chroma, tone: 50. })
    }

    #[test]
    fn core_palette_keys() {
        let p = CorePalette::of(&fixed(100., 20.), Argb::BLACK);
        assert_eq!(p.a1.key(), HueChroma::new(100., 48.));
        assert_eq!(p.a2.key(), HueChroma::new(100., 16.));
        assert_eq!(p.a3.key(), HueChroma::new(160., 32.));
        assert_eq!(p.n1.key(), HueChroma::new(100., 4.));
        assert_eq!(p.n2.key(), HueChroma::new(100., 8.));
    }

    #[test]
    fn vivid_seed_keeps_its_chroma() {
        let p = CorePalette::of(&fixed(10., 90.), Argb::BLACK);
        assert_eq!(p.a1.chroma(), 90.);
    }

    #[test]
    fn third_accent_hue_wraps() {
        let p = CorePalette::of(&fixed(330., 50.), Argb::BLACK);
        assert_eq!(p.a3.hue(), 30.);
    }

    #[test]
    fn families() {
        let p = CorePalette::of(&fixed(200., 60.), Argb::BLACK);
        for f in Family::ALL {
            assert_eq!(f.is_accent(), Family::ACCENTS.contains(&f));
        }
        assert_eq!(p.get(Family::Accent3), &p.a3);
        assert_eq!(p.get(Family::Neutral2), &p.n2);
    }

    #[test]
    fn tonal_palette_from_real_color() {
        let cam = Cam16::default();
        let seed = Argb(0xFF_42_85_F4);
        let p = TonalPalette::from_argb(&cam, seed);
        let a = cam.to_appearance(seed);
        assert_eq!((p.hue(), p.chroma()), (a.hue, a.chroma));
        let c = p.tone(&cam, a.tone);
        let back = cam.to_appearance(c);
        assert!((back.tone - a.tone).abs() < 0.5);
        assert!((back.hue - a.hue).abs() < 5.);
    }
}
