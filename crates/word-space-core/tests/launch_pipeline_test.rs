//! End-to-end launch pipeline tests over synthetic vocabularies.
//!
//! These tests verify the whole select → normalize → beacon chain using toy
//! data with known expected outputs, plus a larger seeded-random vocabulary
//! for the structural invariants.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use word_space_core::axes::{AxisRole, AxisSet, AxisWords};
use word_space_core::config::EngineConfig;
use word_space_core::session::WordSpaceSession;
use word_space_core::store::VectorStore;
use word_space_core::vocab::Vocabulary;

/// The five-word toy scenario: big/small span x, y and z are neutral
/// (identical endpoint vectors, so their cosine differences cancel).
fn toy_session() -> (VectorStore, EngineConfig) {
    let vocab = Vocabulary::new(vec![
        "love".into(),
        "hate".into(),
        "big".into(),
        "small".into(),
        "cat".into(),
    ])
    .unwrap();
    let data = vec![
        0.2, 0.9, // love
        -0.2, 0.9, // hate
        1.0, 0.1, // big
        -1.0, 0.1, // small
        0.7, 0.3, // cat: much closer to big than to small
    ];
    let store = VectorStore::from_parts(vocab, data).unwrap();
    (store, EngineConfig::default())
}

fn toy_axes(store: &VectorStore) -> AxisSet {
    let big = store.vector(store.vocab().index_of("big").unwrap()).to_vec();
    let small = store
        .vector(store.vocab().index_of("small").unwrap())
        .to_vec();
    let neutral = vec![0.0, 1.0];
    let words = AxisWords::new(["big", "small", "void", "void", "void", "void"]).unwrap();
    AxisSet::new(
        words,
        [
            big,
            small,
            neutral.clone(),
            neutral.clone(),
            neutral.clone(),
            neutral,
        ],
        store,
    )
    .unwrap()
}

#[test]
fn toy_scenario_cat_leans_toward_big() {
    let (store, config) = toy_session();
    let session = WordSpaceSession::launch(&store, toy_axes(&store), &config).unwrap();

    let cat = session
        .words()
        .iter()
        .find(|w| w.word == "cat")
        .expect("cat must survive selection");

    // cat's embedding is more similar to big than to small, so its x is positive.
    assert!(cat.x > 0.0, "cat.x = {}", cat.x);
    // Neutral axes contribute nothing.
    assert!(cat.y.abs() < 1e-6);
    assert!(cat.z.abs() < 1e-6);

    println!(
        "[VERIFIED] cat projects to ({:.3}, {:.3}, {:.3}), magnitude {:.4}",
        cat.x, cat.y, cat.z, cat.magnitude
    );
}

#[test]
fn toy_scenario_reproducible_across_launches() {
    let (store, config) = toy_session();
    let a = WordSpaceSession::launch(&store, toy_axes(&store), &config).unwrap();
    let b = WordSpaceSession::launch(&store, toy_axes(&store), &config).unwrap();

    assert_eq!(a.words(), b.words());
    assert_eq!(a.bounds(), b.bounds());
    assert_eq!(a.beacons(), b.beacons());

    let cat_a = a.words().iter().find(|w| w.word == "cat").unwrap();
    let cat_b = b.words().iter().find(|w| w.word == "cat").unwrap();
    assert_eq!(cat_a.magnitude, cat_b.magnitude);
}

#[test]
fn toy_scenario_excludes_axis_words_and_bounds_cover_cloud() {
    let (store, config) = toy_session();
    let session = WordSpaceSession::launch(&store, toy_axes(&store), &config).unwrap();

    for w in session.words() {
        assert!(w.word != "big" && w.word != "small");
        assert!(w.x.is_finite() && w.y.is_finite() && w.z.is_finite());
        let b = session.bounds();
        assert!(w.x >= b.min_x && w.x <= b.max_x);
        assert!(w.y >= b.min_y && w.y <= b.max_y);
        assert!(w.z >= b.min_z && w.z <= b.max_z);
    }
}

#[test]
fn toy_scenario_beacons_sit_beyond_frontier() {
    let (store, config) = toy_session();
    let session = WordSpaceSession::launch(&store, toy_axes(&store), &config).unwrap();

    let max_x = session
        .words()
        .iter()
        .map(|w| w.x)
        .fold(0.0_f32, f32::max);
    let beacons = session.beacons();

    assert_eq!(beacons[0].role, AxisRole::XPos);
    assert!((beacons[0].x - max_x * 1.2).abs() < 1e-4);
    assert_eq!(beacons[0].word, "big");

    // Neutral axes leave their beacons at the origin.
    assert_eq!(beacons[2].y, 0.0);
    assert_eq!(beacons[4].z, 0.0);
    println!("[VERIFIED] x+ beacon at {:.3} = 1.2 x {:.3}", beacons[0].x, max_x);
}

// =============================================================================
// Seeded-random vocabulary: structural invariants at a realistic shape
// =============================================================================

fn random_store(words: usize, dim: usize, seed: u64) -> VectorStore {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let letters = b"abcdefghijklmnopqrstuvwxyz";

    let mut names = Vec::with_capacity(words);
    let mut used = std::collections::HashSet::new();
    while names.len() < words {
        let len = rng.gen_range(3..=9);
        let name: String = (0..len)
            .map(|_| letters[rng.gen_range(0..letters.len())] as char)
            .collect();
        if used.insert(name.clone()) {
            names.push(name);
        }
    }

    let data: Vec<f32> = (0..words * dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    VectorStore::from_parts(Vocabulary::new(names).unwrap(), data).unwrap()
}

fn random_axes(store: &VectorStore, seed: u64) -> AxisSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dim = store.dim();
    let mut vector =
        || -> Vec<f32> { (0..dim).map(|_| rng.gen_range(-1.0_f32..1.0)).collect() };
    let words = AxisWords::new(["alpha", "omega", "rise", "fall", "near", "afar"]).unwrap();
    AxisSet::new(
        words,
        [vector(), vector(), vector(), vector(), vector(), vector()],
        store,
    )
    .unwrap()
}

#[test]
fn random_vocabulary_selection_is_bounded_sorted_and_deduplicated() {
    let store = random_store(2000, 16, 42);
    let axes = random_axes(&store, 7);
    let mut config = EngineConfig::default();
    config.selection.top_k = 500;

    let session = WordSpaceSession::launch(&store, axes, &config).unwrap();
    assert!(session.words().len() <= 500);
    assert_eq!(session.stats().selected, session.words().len());
    assert!(session.stats().truncated);

    let mut seen = std::collections::HashSet::new();
    for w in session.words() {
        assert!(seen.insert(w.word.clone()), "duplicate word {}", w.word);
    }

    println!(
        "[VERIFIED] {} of {} eligible words selected",
        session.stats().selected,
        session.stats().eligible
    );
}

#[test]
fn random_vocabulary_normalized_spread_is_unit() {
    let store = random_store(2000, 16, 43);
    let axes = random_axes(&store, 8);
    let mut config = EngineConfig::default();
    config.normalization.scale_factor = 1.0;

    let session = WordSpaceSession::launch(&store, axes, &config).unwrap();
    let n = session.words().len() as f32;
    assert!(n > 100.0, "selection unexpectedly small: {}", n);

    for (axis, values) in [
        ("x", session.words().iter().map(|w| w.x).collect::<Vec<_>>()),
        ("y", session.words().iter().map(|w| w.y).collect::<Vec<_>>()),
        ("z", session.words().iter().map(|w| w.z).collect::<Vec<_>>()),
    ] {
        let mean = values.iter().sum::<f32>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        let std = var.sqrt();
        assert!(
            (std - 1.0).abs() < 1e-2,
            "{} axis spread {} not unit",
            axis,
            std
        );
    }
}
