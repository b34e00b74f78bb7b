//! Configuration parameters for harmonic analysis
//!
//! Both configuration bags are plain immutable values threaded explicitly
//! through every call; the `Default` impls are the validated baseline. There
//! is no process-wide default instance.

/// Toggles controlling disambiguation and cadence strictness
///
/// Every field is independent; no combination is invalid.
#[derive(Debug, Clone)]
pub struct HarmonyOptions {
    /// Prefer the mixture-seventh reading (bVI7) over the enharmonically
    /// identical German sixth when a voicing makes both plausible
    /// (default: false)
    pub prefer_mixture_seventh_over_augmented_sixth: bool,

    /// Reject an augmented-sixth reading when the soprano doubles ♭6,
    /// the empirically common bVI7 voicing (default: true)
    pub disallow_augmented_sixth_when_soprano_flat6: bool,

    /// In minor keys, a diatonic iiø7 match always wins over any secondary
    /// interpretation of the same pitch-class set (default: true)
    pub prefer_diatonic_ii_half_dim_in_minor: bool,

    /// For fully-diminished-seventh sets, which are enharmonically identical
    /// across four targets a minor third apart, probe target V first
    /// (default: true)
    pub prefer_secondary_leading_tone_target_v: bool,

    /// Only accept a Neapolitan (bII) match when the voicing places its
    /// third in the bass, i.e. bII6 (default: false)
    pub neapolitan_requires_first_inversion: bool,

    /// Perfect authentic cadence requires the dominant in root position
    /// (default: true)
    pub pac_require_root_position_dominant: bool,

    /// Perfect authentic cadence rejects dominants with a ninth
    /// (default: true)
    pub pac_disallow_dominant_extensions: bool,

    /// Allow a tonic major-seventh chord as the goal of a perfect authentic
    /// cadence (default: false)
    pub pac_allow_tonic_major_seventh: bool,

    /// Perfect authentic cadence requires the soprano on the tonic pitch
    /// class; needs a voicing on the goal chord (default: false)
    pub pac_require_soprano_tonic: bool,

    /// When the dominant's soprano is the leading tone, require it to
    /// resolve to the tonic in the soprano; needs voicings on both chords
    /// (default: false)
    pub pac_require_soprano_leading_tone_resolution: bool,

    /// Demote a vii°/V → I succession that would otherwise read as an
    /// authentic cadence (default: true)
    pub demote_secondary_leading_tone_cadence: bool,

    /// Classify non-cadential 6-4 chords as passing or pedal on transitions
    /// where no cadence was detected (default: true)
    pub classify_non_cadential_six_four: bool,

    /// Report parallel perfect fifths/octaves and voice overlap against the
    /// previous voicing (default: true)
    pub detect_parallel_motion: bool,

    /// Tolerance in semitones added to each voice's nominal range before a
    /// range warning is reported (default: 2)
    pub voice_range_tolerance: u8,

    /// Maximum spacing in semitones between soprano/alto and alto/tenor
    /// before a spacing warning is reported (default: 12)
    pub max_voice_spacing: u8,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            prefer_mixture_seventh_over_augmented_sixth: false,
            disallow_augmented_sixth_when_soprano_flat6: true,
            prefer_diatonic_ii_half_dim_in_minor: true,
            prefer_secondary_leading_tone_target_v: true,
            neapolitan_requires_first_inversion: false,
            pac_require_root_position_dominant: true,
            pac_disallow_dominant_extensions: true,
            pac_allow_tonic_major_seventh: false,
            pac_require_soprano_tonic: false,
            pac_require_soprano_leading_tone_resolution: false,
            demote_secondary_leading_tone_cadence: true,
            classify_non_cadential_six_four: true,
            detect_parallel_motion: true,
            voice_range_tolerance: 2,
            max_voice_spacing: 12,
        }
    }
}

/// Score weights and hysteresis parameters for the key estimator
///
/// Scores are sums of a windowed diatonic-fit count plus the bonuses below;
/// the units are "diatonic pitch classes", so a bonus of 1.0 outweighs one
/// chord tone of diatonic evidence.
#[derive(Debug, Clone)]
pub struct KeyEstimatorConfig {
    /// Radius of the diatonic-fit window: chord i is scored over
    /// [i - radius, i + radius] (default: 1)
    pub window_radius: usize,

    /// Bonus for the previously chosen key, inertia against single-chord
    /// flicker (default: 1.0)
    pub prev_key_bias: f32,

    /// Bonus for the caller-supplied initial key (default: 0.5)
    pub initial_key_bias: f32,

    /// Bonus when the current chord is exactly the candidate's V7
    /// (default: 4.0)
    pub dominant_seventh_bonus: f32,

    /// Bonus when the current chord is exactly the candidate's V triad
    /// (default: 1.5)
    pub dominant_triad_bonus: f32,

    /// Bonus when the previous chord was the candidate's V(7) and the
    /// current chord is its tonic (triad or seventh) (default: 2.0)
    pub cadence_bonus: f32,

    /// Bonus when the current chord is diatonic to both the previously
    /// chosen key and the candidate (default: 1.0)
    pub pivot_chord_bonus: f32,

    /// Bonus when the current chord is some secondary-dominant triad V/x of
    /// the candidate (default: 0.5)
    pub secondary_dominant_triad_bonus: f32,

    /// Bonus when the current chord is some secondary-dominant seventh V7/x
    /// of the candidate (default: 1.0)
    pub secondary_dominant_seventh_bonus: f32,

    /// Penalty per non-diatonic pitch class in the current chord; 0.0
    /// disables the penalty (default: 0.0)
    pub out_of_key_penalty_per_pc: f32,

    /// The raw winner must beat the previously chosen key's score by more
    /// than this margin to cause a switch (default: 1.0)
    pub switch_margin: f32,

    /// Hard-lock the first N chords to the initial key regardless of score
    /// (default: 0)
    pub min_switch_index: usize,

    /// Record a per-chord diagnostic trace (default: false)
    pub keep_trace: bool,
}

impl Default for KeyEstimatorConfig {
    fn default() -> Self {
        Self {
            window_radius: 1,
            prev_key_bias: 1.0,
            initial_key_bias: 0.5,
            dominant_seventh_bonus: 4.0,
            dominant_triad_bonus: 1.5,
            cadence_bonus: 2.0,
            pivot_chord_bonus: 1.0,
            secondary_dominant_triad_bonus: 0.5,
            secondary_dominant_seventh_bonus: 1.0,
            out_of_key_penalty_per_pc: 0.0,
            switch_margin: 1.0,
            min_switch_index: 0,
            keep_trace: false,
        }
    }
}
