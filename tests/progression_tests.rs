//! Integration tests for the harmony analysis engine

use cadenza_harmony::{
    analyze, analyze_progression, analyze_progression_with_modulation, CadenceType, ChordInput,
    FourPartVoicing, HarmonyOptions, Key, KeyEstimatorConfig,
};

fn c_major() -> Key {
    Key::Major(0)
}

fn options() -> HarmonyOptions {
    HarmonyOptions::default()
}

#[test]
fn test_analyze_is_a_pure_function() {
    let voicing = FourPartVoicing::new(72, 66, 63, 56);
    let first = analyze(&[8, 0, 3, 6], c_major(), &options(), Some(&voicing), None);
    let second = analyze(&[8, 0, 3, 6], c_major(), &options(), Some(&voicing), None);
    assert_eq!(first, second);
}

#[test]
fn test_exact_match_invariant() {
    // {0,4,7,11} is Imaj7 in C major; {0,4,7} must not be.
    let result = analyze(&[0, 4, 7, 11], c_major(), &options(), None, None);
    assert_eq!(result.roman_text.as_deref(), Some("Imaj7"));
    let result = analyze(&[0, 4, 7], c_major(), &options(), None, None);
    assert_eq!(result.roman_text.as_deref(), Some("I"));
}

#[test]
fn test_german_sixth_vs_mixture_seventh_disambiguation() {
    // Bass Ab, soprano away from Ab, default options: Ger65.
    let bass_flat6 = FourPartVoicing::new(72, 66, 63, 56);
    let result = analyze(&[8, 0, 3, 6], c_major(), &options(), Some(&bass_flat6), None);
    assert_eq!(result.roman_text.as_deref(), Some("Ger65"));

    // Soprano also Ab with the suppression option: must be bVI, not Ger.
    let soprano_flat6 = FourPartVoicing::new(80, 72, 66, 56);
    let mut opts = options();
    opts.disallow_augmented_sixth_when_soprano_flat6 = true;
    let result = analyze(&[8, 0, 3, 6], c_major(), &opts, Some(&soprano_flat6), None);
    let text = result.roman_text.expect("label expected");
    assert!(text.contains("bVI"), "got {}", text);
    assert!(!text.contains("Ger"), "got {}", text);
}

#[test]
fn test_cadence_classification_end_to_end() {
    // [V, I] => Authentic at index 0.
    let analysis = analyze_progression(
        &[
            ChordInput::new(vec![7, 11, 2]),
            ChordInput::new(vec![0, 4, 7]),
        ],
        c_major(),
        &options(),
    )
    .unwrap();
    assert_eq!(analysis.cadences.len(), 1);
    assert_eq!(analysis.cadences[0].index_from, 0);
    assert_eq!(analysis.cadences[0].cadence, CadenceType::Authentic);

    // [V, vi] => Deceptive at index 0.
    let analysis = analyze_progression(
        &[
            ChordInput::new(vec![7, 11, 2]),
            ChordInput::new(vec![9, 0, 4]),
        ],
        c_major(),
        &options(),
    )
    .unwrap();
    assert_eq!(analysis.cadences.len(), 1);
    assert_eq!(analysis.cadences[0].cadence, CadenceType::Deceptive);

    // [IV, I] => Plagal at index 0.
    let analysis = analyze_progression(
        &[
            ChordInput::new(vec![5, 9, 0]),
            ChordInput::new(vec![0, 4, 7]),
        ],
        c_major(),
        &options(),
    )
    .unwrap();
    assert_eq!(analysis.cadences.len(), 1);
    assert_eq!(analysis.cadences[0].cadence, CadenceType::Plagal);
}

#[test]
fn test_key_estimation_stability() {
    // Entirely diatonic progression: the initial key holds everywhere.
    let chords = vec![
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![9, 0, 4]),
        ChordInput::new(vec![2, 5, 9]),
        ChordInput::new(vec![7, 11, 2]),
        ChordInput::new(vec![0, 4, 7]),
    ];
    let analysis = analyze_progression_with_modulation(
        &chords,
        c_major(),
        &options(),
        &KeyEstimatorConfig::default(),
    )
    .unwrap();
    let keys = analysis.keys.expect("keys expected");
    assert!(keys.iter().all(|&k| k == c_major()), "{:?}", keys);
    assert_eq!(analysis.segments.expect("segments").len(), 1);
}

#[test]
fn test_pivot_chord_modulation_c_to_g() {
    // C major {I, V, I} then G major {IV (= C in G), V7, I}: at least two
    // segments, C first, G last.
    let chords = vec![
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![7, 11, 2]),
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![2, 6, 9, 0]),
        ChordInput::new(vec![7, 11, 2]),
        ChordInput::new(vec![7, 11, 2]),
    ];
    let analysis = analyze_progression_with_modulation(
        &chords,
        c_major(),
        &options(),
        &KeyEstimatorConfig::default(),
    )
    .unwrap();
    let segments = analysis.segments.expect("segments expected");
    assert!(segments.len() >= 2, "{:?}", segments);
    assert_eq!(segments.first().unwrap().key.tonic(), 0);
    assert_eq!(segments.last().unwrap().key.tonic(), 7);
    for segment in &segments {
        assert!((0.0..=1.0).contains(&segment.confidence));
    }
}

#[test]
fn test_reanalysis_idempotence() {
    let chords = vec![
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![2, 6, 9, 0]),
        ChordInput::new(vec![7, 11, 2]),
    ];
    let first = analyze_progression_with_modulation(
        &chords,
        c_major(),
        &options(),
        &KeyEstimatorConfig::default(),
    )
    .unwrap();
    let second = analyze_progression_with_modulation(
        &chords,
        c_major(),
        &options(),
        &KeyEstimatorConfig::default(),
    )
    .unwrap();
    assert_eq!(first.per_chord, second.per_chord);
    assert_eq!(first.keys, second.keys);
}

#[test]
fn test_mixture_seventh_round_trip_warning() {
    // Ab-C-Eb-Gb with no voicing: bVI7 with a resolution warning.
    let result = analyze(&[8, 0, 3, 6], c_major(), &options(), None, None);
    assert!(result.success);
    let text = result.roman_text.expect("label expected");
    assert!(text.contains("bVI7"), "got {}", text);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("bVI7") && w.contains("resolves")));
}

#[test]
fn test_perfect_authentic_cadence_with_voicings() {
    let mut opts = options();
    opts.pac_require_soprano_tonic = true;
    // V with soprano B resolving to I with soprano C.
    let chords = vec![
        ChordInput::voiced(vec![7, 11, 2], FourPartVoicing::new(71, 67, 62, 43)),
        ChordInput::voiced(vec![0, 4, 7], FourPartVoicing::new(72, 67, 64, 48)),
    ];
    let analysis = analyze_progression(&chords, c_major(), &opts).unwrap();
    assert_eq!(analysis.cadences[0].cadence, CadenceType::Authentic);
    assert!(analysis.cadences[0].is_perfect_authentic);

    // Soprano ending away from the tonic: authentic but not perfect.
    let chords = vec![
        ChordInput::voiced(vec![7, 11, 2], FourPartVoicing::new(74, 67, 59, 43)),
        ChordInput::voiced(vec![0, 4, 7], FourPartVoicing::new(76, 67, 60, 48)),
    ];
    let analysis = analyze_progression(&chords, c_major(), &opts).unwrap();
    assert_eq!(analysis.cadences[0].cadence, CadenceType::Authentic);
    assert!(!analysis.cadences[0].is_perfect_authentic);
}

#[test]
fn test_voice_leading_warnings_do_not_block_labels() {
    // Parallel octaves between tenor and bass across V -> I; both chords
    // still label normally.
    let chords = vec![
        ChordInput::voiced(vec![7, 11, 2], FourPartVoicing::new(79, 74, 71, 55)),
        ChordInput::voiced(vec![0, 4, 7], FourPartVoicing::new(72, 67, 64, 48)),
    ];
    let analysis = analyze_progression(&chords, c_major(), &options()).unwrap();
    assert_eq!(analysis.per_chord[0].roman_text.as_deref(), Some("V"));
    assert!(analysis.per_chord[1].success);
    assert!(analysis.per_chord[1]
        .warnings
        .iter()
        .any(|w| w.contains("parallel")));
}

#[test]
fn test_trace_serializes_for_export() {
    let chords = vec![
        ChordInput::new(vec![0, 4, 7]),
        ChordInput::new(vec![7, 11, 2]),
        ChordInput::new(vec![0, 4, 7]),
    ];
    let mut config = KeyEstimatorConfig::default();
    config.keep_trace = true;
    let analysis =
        analyze_progression_with_modulation(&chords, c_major(), &options(), &config).unwrap();
    let trace = analysis.trace.as_ref().expect("trace requested");
    assert_eq!(trace.len(), 3);
    let json = serde_json::to_string(&analysis).expect("serializable");
    assert!(json.contains("\"trace\""));
}

#[test]
fn test_unanalyzable_chord_mid_progression() {
    // A chromatic cluster in the middle: its result fails, neighbours are
    // unaffected, and no cadence is reported across the gap.
    let chords = vec![
        ChordInput::new(vec![7, 11, 2]),
        ChordInput::new(vec![0, 1, 2]),
        ChordInput::new(vec![0, 4, 7]),
    ];
    let analysis = analyze_progression(&chords, c_major(), &options()).unwrap();
    assert!(analysis.per_chord[0].success);
    assert!(!analysis.per_chord[1].success);
    assert!(analysis.per_chord[2].success);
    assert!(analysis.cadences.is_empty());
}
