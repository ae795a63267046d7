/// Hue and chroma shared by all the tones of a family.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HueChroma {
    /// Hue in degrees.
    pub hue: f64,
    pub chroma: f64,
}

impl HueChroma {
    #[inline]
    pub const fn new(hue: f64, chroma: f64) -> Self { HueChroma { hue, chroma } }
}

/// The five color families of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Main accent, colorful.
    Accent1,
    /// Muted version of the main accent.
    Accent2,
    /// Accent with a hue rotated from the seed.
    Accent3,
    /// Near gray, for backgrounds and surfaces.
    Neutral1,
    /// Near gray, slightly more tinted than [`Family::Neutral1`].
    Neutral2,
}

impl Family {
    /// The accent families, in theme order.
    pub const ACCENTS: [Family; 3] =
        [Family::Accent1, Family::Accent2, Family::Accent3];
    /// The neutral families, in theme order.
    pub const NEUTRALS: [Family; 2] = [Family::Neutral1, Family::Neutral2];
    pub const ALL: [Family; 5] =
        [Family::Accent1, Family::Accent2, Family::Accent3,
         Family::Neutral1, Family::Neutral2];

    pub fn is_accent(self) -> bool { Self::ACCENTS.contains(&self) }
}
