//! Structured roman-numeral labels
//!
//! Labels are modeled as structured values and rendered to display text only
//! at the boundary. Downstream passes (cadence classification, progression
//! relabeling) inspect the structured fields instead of scanning label text,
//! so prefix collisions like "bVI" vs "bVII" cannot arise.

use serde::{Deserialize, Serialize};

use super::chord::ChordQuality;

/// Roman-numeral scale-degree symbols.
///
/// Uppercase variants are the major-case symbols, lowercase the minor-case
/// ones. The symbol carries no chord quality by itself; quality is carried
/// separately on [`RomanLabel`].
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RomanNumeral {
    /// Major-case tonic
    I,
    /// Major-case supertonic
    II,
    /// Major-case mediant
    III,
    /// Major-case subdominant
    IV,
    /// Major-case dominant
    V,
    /// Major-case submediant
    VI,
    /// Major-case leading tone / subtonic
    VII,
    /// Minor-case tonic
    i,
    /// Minor-case supertonic
    ii,
    /// Minor-case mediant
    iii,
    /// Minor-case subdominant
    iv,
    /// Minor-case dominant
    v,
    /// Minor-case submediant
    vi,
    /// Minor-case leading tone / subtonic
    vii,
}

impl RomanNumeral {
    /// 1-based scale degree of the symbol.
    pub fn degree(&self) -> u8 {
        match self {
            RomanNumeral::I | RomanNumeral::i => 1,
            RomanNumeral::II | RomanNumeral::ii => 2,
            RomanNumeral::III | RomanNumeral::iii => 3,
            RomanNumeral::IV | RomanNumeral::iv => 4,
            RomanNumeral::V | RomanNumeral::v => 5,
            RomanNumeral::VI | RomanNumeral::vi => 6,
            RomanNumeral::VII | RomanNumeral::vii => 7,
        }
    }

    /// True for the major-case (uppercase) symbols.
    pub fn is_major_case(&self) -> bool {
        matches!(
            self,
            RomanNumeral::I
                | RomanNumeral::II
                | RomanNumeral::III
                | RomanNumeral::IV
                | RomanNumeral::V
                | RomanNumeral::VI
                | RomanNumeral::VII
        )
    }

    /// Display text of the symbol.
    pub fn text(&self) -> &'static str {
        match self {
            RomanNumeral::I => "I",
            RomanNumeral::II => "II",
            RomanNumeral::III => "III",
            RomanNumeral::IV => "IV",
            RomanNumeral::V => "V",
            RomanNumeral::VI => "VI",
            RomanNumeral::VII => "VII",
            RomanNumeral::i => "i",
            RomanNumeral::ii => "ii",
            RomanNumeral::iii => "iii",
            RomanNumeral::iv => "iv",
            RomanNumeral::v => "v",
            RomanNumeral::vi => "vi",
            RomanNumeral::vii => "vii",
        }
    }

    /// Symbol for a 1-based degree in the requested case.
    pub fn from_degree(degree: u8, major_case: bool) -> Self {
        const MAJOR: [RomanNumeral; 7] = [
            RomanNumeral::I,
            RomanNumeral::II,
            RomanNumeral::III,
            RomanNumeral::IV,
            RomanNumeral::V,
            RomanNumeral::VI,
            RomanNumeral::VII,
        ];
        const MINOR: [RomanNumeral; 7] = [
            RomanNumeral::i,
            RomanNumeral::ii,
            RomanNumeral::iii,
            RomanNumeral::iv,
            RomanNumeral::v,
            RomanNumeral::vi,
            RomanNumeral::vii,
        ];
        let idx = ((degree.clamp(1, 7)) - 1) as usize;
        if major_case {
            MAJOR[idx]
        } else {
            MINOR[idx]
        }
    }
}

/// Figured-bass suffix for a label.
///
/// `None` is root position; the seventh-chord "7"/"maj7" suffix in root
/// position is rendered from the chord quality, not from the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    /// Root position, no figure
    None,
    /// First-inversion triad
    Six,
    /// Second-inversion triad
    SixFour,
    /// First-inversion seventh chord
    SixFive,
    /// Second-inversion seventh chord
    FourThree,
    /// Third-inversion seventh chord
    FourTwo,
    /// Dominant ninth
    Nine,
}

impl Figure {
    /// Display text of the figure.
    pub fn text(&self) -> &'static str {
        match self {
            Figure::None => "",
            Figure::Six => "6",
            Figure::SixFour => "64",
            Figure::SixFive => "65",
            Figure::FourThree => "43",
            Figure::FourTwo => "42",
            Figure::Nine => "9",
        }
    }
}

/// The three augmented-sixth chord species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aug6Kind {
    /// Italian sixth: {♭6, 1, ♯4}
    Italian,
    /// French sixth: {♭6, 1, 2, ♯4}
    French,
    /// German sixth: {♭6, 1, ♭3, ♯4}
    German,
}

impl Aug6Kind {
    /// Conventional display text (figure included).
    pub fn text(&self) -> &'static str {
        match self {
            Aug6Kind::Italian => "It6",
            Aug6Kind::French => "Fr43",
            Aug6Kind::German => "Ger65",
        }
    }
}

/// A scale-degree-relative label with its qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanLabel {
    /// Scale-degree symbol (case reflects triad quality)
    pub numeral: RomanNumeral,
    /// Leading flat (borrowed roots: bII, bIII, bVI, bVII)
    pub flat: bool,
    /// Full chord quality of the matched chord
    pub quality: ChordQuality,
    /// Inversion figure (or Nine for the dominant ninth)
    pub figure: Figure,
    /// Tonicized target for secondary chords (V/x, vii°/x)
    pub secondary: Option<RomanNumeral>,
}

impl RomanLabel {
    /// A root-position diatonic label with no qualifiers.
    pub fn new(numeral: RomanNumeral, quality: ChordQuality) -> Self {
        Self {
            numeral,
            flat: false,
            quality,
            figure: Figure::None,
            secondary: None,
        }
    }
}

/// A complete harmonic label for one chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordLabel {
    /// Scale-degree-relative label (diatonic, mixture, or secondary)
    Roman(RomanLabel),
    /// Augmented-sixth chord (It6 / Fr43 / Ger65)
    AugmentedSixth(Aug6Kind),
}

impl ChordLabel {
    /// The scale-degree symbol, if the label has one.
    pub fn base_numeral(&self) -> Option<RomanNumeral> {
        match self {
            ChordLabel::Roman(r) => Some(r.numeral),
            ChordLabel::AugmentedSixth(_) => None,
        }
    }

    /// The inner roman label, if any.
    pub fn as_roman(&self) -> Option<&RomanLabel> {
        match self {
            ChordLabel::Roman(r) => Some(r),
            ChordLabel::AugmentedSixth(_) => None,
        }
    }

    /// Render to display text.
    ///
    /// Quality marks: "°" for diminished, "ø" for half-diminished, "+" for
    /// augmented, "maj7" for the major seventh. Inverted seventh chords
    /// render the figure in place of the "7" suffix (V65, ii43).
    pub fn render(&self) -> String {
        match self {
            ChordLabel::AugmentedSixth(kind) => kind.text().to_string(),
            ChordLabel::Roman(r) => {
                let mut out = String::new();
                if r.flat {
                    out.push('b');
                }
                out.push_str(r.numeral.text());
                match r.quality {
                    ChordQuality::Diminished | ChordQuality::DiminishedSeventh => out.push('°'),
                    ChordQuality::HalfDiminishedSeventh => out.push('ø'),
                    ChordQuality::Augmented => out.push('+'),
                    _ => {}
                }
                match r.figure {
                    Figure::None => {
                        if r.quality == ChordQuality::MajorSeventh {
                            out.push_str("maj7");
                        } else if r.quality.is_seventh() {
                            out.push('7');
                        }
                    }
                    figure => out.push_str(figure.text()),
                }
                if let Some(target) = r.secondary {
                    out.push('/');
                    out.push_str(target.text());
                }
                out
            }
        }
    }
}
