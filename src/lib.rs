//! Seed color selection and tonal shade ladders for wallpaper-driven
//! ("Monet") theming.
//!
//! - [`selector`] picks the seed color out of a wallpaper's
//!   [`WallpaperColors`].
//! - [`palettes`] expands a seed into five hue/chroma families.
//! - [`ShadeLadder`] turns one family into 13 colors, lightest first.
//! - [`Monet`] ties the three together.
//!
//! Colors are compared and generated in the CAM16 appearance model
//! ([`Cam16`]), but every component takes its [`AppearanceModel`] as a
//! parameter so that another model can be substituted.
//!
//! ```
//! use monet_shades::{Argb, Monet};
//! let monet = Monet::new(Argb(0xFF_1B_6E_F3));
//! assert_eq!(monet.all_accent_shades().len(), 39);
//! assert_eq!(monet.all_neutral_shades().len(), 26);
//! ```

use std::fmt;
use std::str::FromStr;
use rgb::{RGB8, RGBA8};

pub mod cam;
mod error;
pub mod monet;
pub mod palettes;
pub mod score;
pub mod selector;
pub mod shades;

pub use cam::{Appearance, AppearanceModel, Cam16};
pub use error::ParseArgbError;
pub use monet::Monet;
pub use palettes::{CorePalette, CorePalettePolicy, Family, HueChroma,
                   PalettePolicy, TonalPalette};
pub use score::{Score, ScoringPolicy, CUTOFF_CHROMA, CUTOFF_TONE};
pub use selector::{ColorPopulation, WallpaperColors,
                   select_main_color, select_seed_candidates};
pub use shades::{ShadeLadder, CHROMA_CAP, LADDER_LEN, MIDTONE_INDEX,
                 MIDTONE_TONE, TONES};

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(pub u32);

/// Known good accent color, used whenever no usable wallpaper color
/// is available.
pub const GOOGLE_BLUE: Argb = Argb(0xFF_42_85_F4);

impl Argb {
    /// Fully transparent black, the "no color" sentinel.
    pub const TRANSPARENT: Argb = Argb(0);
    pub const BLACK: Argb = Argb(0xFF_00_00_00);
    pub const WHITE: Argb = Argb(0xFF_FF_FF_FF);

    /// Opaque color from its red, green and blue components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    #[inline]
    pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline]
    pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline]
    pub const fn blue(self) -> u8 { self.0 as u8 }

    /// Whether the alpha channel is zero.  Such a color carries no
    /// usable hue and is replaced by [`GOOGLE_BLUE`] as a seed.
    #[inline]
    pub const fn is_transparent(self) -> bool { self.alpha() == 0 }

    #[inline]
    pub const fn is_opaque(self) -> bool { self.alpha() == 0xFF }
}

impl From<u32> for Argb {
    #[inline]
    fn from(c: u32) -> Self { Argb(c) }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(c: Argb) -> Self { c.0 }
}

impl From<RGBA8> for Argb {
    #[inline]
    fn from(c: RGBA8) -> Self { Argb::from_argb(c.a, c.r, c.g, c.b) }
}

impl From<Argb> for RGBA8 {
    #[inline]
    fn from(c: Argb) -> Self {
        RGBA8 { r: c.red(), g: c.green(), b: c.blue(), a: c.alpha() }
    }
}

impl From<RGB8> for Argb {
    #[inline]
    fn from(c: RGB8) -> Self { Argb::from_rgb(c.r, c.g, c.b) }
}

/// Drops the alpha channel.
impl From<Argb> for RGB8 {
    #[inline]
    fn from(c: Argb) -> Self {
        RGB8 { r: c.red(), g: c.green(), b: c.blue() }
    }
}

impl fmt::Display for Argb {
    /// `#rrggbb` for opaque colors, `#aarrggbb` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

impl FromStr for Argb {
    type Err = ParseArgbError;

    /// Parse `#rgb`, `#rrggbb` or `#aarrggbb` (the `#` is optional).
    /// Colors given without alpha are opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.is_empty() { return Err(ParseArgbError::Empty) }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseArgbError::Digit { text: s.to_string() })
        }
        if !matches!(hex.len(), 3 | 6 | 8) {
            return Err(ParseArgbError::Length { len: hex.len() })
        }
        // At most 8 hex digits without sign, so this cannot fail.
        let digits = u32::from_str_radix(hex, 16)
            .map_err(|_| ParseArgbError::Digit { text: s.to_string() })?;
        match hex.len() {
            3 => {
                let expand = |d: u32| ((d & 0xF) * 0x11) as u8;
                Ok(Argb::from_rgb(expand(digits >> 8), expand(digits >> 4),
                                  expand(digits)))
            }
            6 => Ok(Argb(0xFF00_0000 | digits)),
            8 => Ok(Argb(digits)),
            len => Err(ParseArgbError::Length { len }),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let c = Argb(0x80_12_34_56);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()),
                   (0x80, 0x12, 0x34, 0x56));
        assert_eq!(Argb::from_argb(0x80, 0x12, 0x34, 0x56), c);
        assert!(!c.is_opaque());
        assert!(!c.is_transparent());
        assert!(Argb(0x00_42_85_F4).is_transparent());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("#4285f4".parse::<Argb>(), Ok(GOOGLE_BLUE));
        assert_eq!("FF4285F4".parse::<Argb>(), Ok(GOOGLE_BLUE));
        assert_eq!("#fff".parse::<Argb>(), Ok(Argb::WHITE));
        assert_eq!(GOOGLE_BLUE.to_string(), "#4285f4");
        assert_eq!(Argb(0x80_00_00_00).to_string(), "#80000000");
        assert_eq!("".parse::<Argb>(), Err(ParseArgbError::Empty));
        assert_eq!("#12345".parse::<Argb>(),
                   Err(ParseArgbError::Length { len: 5 }));
        assert!(matches!("#12g456".parse::<Argb>(),
                         Err(ParseArgbError::Digit { .. })));
        assert!(matches!("#+12345".parse::<Argb>(),
                         Err(ParseArgbError::Digit { .. })));
        assert_eq!("#123456789".parse::<Argb>(),
                   Err(ParseArgbError::Length { len: 9 }));
        assert_eq!("#ffffffff".parse::<Argb>(), Ok(Argb(u32::MAX)));
    }

    #[test]
    fn rgb_interop() {
        let c: RGBA8 = GOOGLE_BLUE.into();
        assert_eq!(c, RGBA8 { r: 0x42, g: 0x85, b: 0xF4, a: 0xFF });
        assert_eq!(Argb::from(c), GOOGLE_BLUE);
        assert_eq!(Argb::from(RGB8::new(0x42, 0x85, 0xF4)), GOOGLE_BLUE);
    }
}
