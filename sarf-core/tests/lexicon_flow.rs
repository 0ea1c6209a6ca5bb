use sarf_core::Lexicon;
use sarf_text::Normalizer;

const CORPUS: &[(&str, &str)] = &[
    ("كتب", "كاتب"),
    ("كتب", "مكتوب"),
    ("كتب", "كاتب"),
    ("درس", "دارس"),
    ("خرج", "خروج"),
    ("علم", "عالم"),
    ("فهم", "فاهم"),
    ("قرأ", "قارئ"),
    ("سمع", "سامع"),
    ("نظر", "ناظر"),
    ("ذهب", "ذاهب"),
    ("جلس", "جالس"),
    ("قام", "قائم"),
    ("نام", "نائم"),
    ("أكل", "آكل"),
    ("شرب", "شارب"),
    ("لعب", "لاعب"),
    ("عمل", "عامل"),
];

fn loaded_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::with_builtin_schemes();
    for (root, word) in CORPUS {
        lexicon.record(root, word).unwrap();
    }
    lexicon
}

#[test]
fn corpus_lists_roots_in_ascending_order() {
    let lexicon = loaded_lexicon();
    assert_eq!(lexicon.root_count(), 16);

    let keys: Vec<String> = lexicon.roots().map(|n| n.key().to_string()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // Balanced tree: height stays logarithmic in the root count.
    let bound = 1.45 * ((lexicon.root_count() + 2) as f64).log2();
    assert!((lexicon.tree_height() as f64) <= bound);

    for node in lexicon.roots() {
        assert!(node.height() >= 1);
        assert!(!node.derived_words().is_empty());
    }
}

#[test]
fn repeated_observations_accumulate_frequency() {
    let lexicon = loaded_lexicon();

    let node = lexicon.lookup("كتب").unwrap();
    let words = node.derived_words();
    assert_eq!(words[0].word, "كاتب");
    assert_eq!(words[0].frequency, 2);
    assert_eq!(words[1].word, "مكتوب");
    assert_eq!(words[1].frequency, 1);

    assert!(lexicon.lookup("وزن").is_none());
}

#[test]
fn schemes_answer_alongside_the_index() {
    let lexicon = loaded_lexicon();

    assert_eq!(lexicon.scheme("فاعل").unwrap().pattern, "C1 ا C2 C3");
    assert_eq!(lexicon.scheme("استفعال").unwrap().pattern, "ا س ت C1 C2 C3");
    assert!(lexicon.scheme("وزن مجهول").is_none());

    let stats = lexicon.stats();
    assert_eq!(stats.root_count, 16);
    assert_eq!(stats.scheme_count, 15);
    assert_eq!(stats.scheme_load_factor, 15.0 / 101.0);
}

#[test]
fn normalized_lexicon_merges_spelling_variants() {
    let mut lexicon = Lexicon::new().with_normalizer(Normalizer::new());
    lexicon.record("أكل", "آكل").unwrap();
    lexicon.record("اكل", "أكلة").unwrap();

    assert_eq!(lexicon.root_count(), 1);
    let node = lexicon.lookup("أكل").unwrap();
    assert_eq!(node.key().as_str(), "اكل");
    assert_eq!(node.derived_words().len(), 2);
}
