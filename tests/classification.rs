//! End-to-end scenarios for the classification pipeline and session ledger

use std::{collections::HashMap, fs};

use pretty_assertions::assert_eq;

use integrinews::{
    artifacts,
    models::{PooledScorer, ScoreError, Scorer},
    pipelines::fake_news::{Bucket, Classifier, ClassifyError},
    session::Session,
    tokenizer::Vocabulary,
};

/// A scorer pinned to one probability
struct Returns(f32);

impl Scorer for Returns {
    fn score(&self, _sequence: &[u32]) -> Result<f32, ScoreError> {
        Ok(self.0)
    }
}

fn vocabulary() -> Vocabulary {
    let index: HashMap<String, u32> = [
        ("breaking", 1),
        ("scientists", 2),
        ("confirm", 3),
        ("moon", 4),
        ("is", 5),
        ("cheese", 6),
    ]
    .into_iter()
    .map(|(word, id)| (word.to_string(), id))
    .collect();

    Vocabulary::new(index, None)
}

#[test]
fn a_confident_fake_article_lands_in_the_highly_fake_bucket() {
    let classifier = Classifier::new(vocabulary(), Returns(0.95));
    let mut session = Session::new();

    let record = classifier
        .classify(
            &mut session,
            "Breaking",
            "Scientists confirm moon is cheese",
        )
        .unwrap();

    assert_eq!(record.bucket, Bucket::HighlyFake);
    assert_eq!(format!("{:.2}%", record.displayed_percentage()), "95.00%");
    assert_eq!(session.tally().fake, 1);
}

#[test]
fn a_confident_real_article_lands_in_the_highly_real_bucket() {
    let classifier = Classifier::new(vocabulary(), Returns(0.05));
    let mut session = Session::new();

    let record = classifier
        .classify(&mut session, "Breaking", "Scientists confirm")
        .unwrap();

    assert_eq!(record.bucket, Bucket::HighlyReal);
    assert_eq!(format!("{:.2}%", record.displayed_percentage()), "95.00%");
    assert_eq!(session.tally().real, 1);
}

#[test]
fn an_empty_title_blocks_classification_without_touching_the_ledger() {
    let classifier = Classifier::new(vocabulary(), Returns(0.95));
    let mut session = Session::new();

    let err = classifier.classify(&mut session, "", "Scientists confirm");

    assert!(matches!(err, Err(ClassifyError::EmptyInput)));
    assert_eq!(session.len(), 0);
}

#[test]
fn the_tally_matches_the_ledger_after_a_run_of_classifications() {
    let vocabulary = vocabulary();
    let mut session = Session::new();

    for (i, p) in [0.95, 0.05, 0.7, 0.3, 0.5].into_iter().enumerate() {
        let classifier = Classifier::new(vocabulary.clone(), Returns(p));
        classifier
            .classify(&mut session, &format!("Article {}", i), "moon cheese")
            .unwrap();
    }

    let tally = session.tally();
    assert_eq!(tally.fake, 3);
    assert_eq!(tally.real, 2);
    assert_eq!(tally.total() as usize, session.len());

    // Records keep insertion order
    let titles: Vec<_> = session
        .records()
        .iter()
        .map(|record| record.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Article 0", "Article 1", "Article 2", "Article 3", "Article 4"]
    );
}

#[test]
fn exporting_two_records_yields_a_header_and_two_rows_in_order() {
    let mut session = Session::new();

    let fake = Classifier::new(vocabulary(), Returns(0.95));
    fake.classify(&mut session, "First", "moon is cheese").unwrap();

    let real = Classifier::new(vocabulary(), Returns(0.05));
    real.classify(&mut session, "Second", "scientists confirm")
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    session.export_csv(&path).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    let rows: Vec<_> = csv.lines().collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "title,text,result,probability");
    assert!(rows[1].starts_with("First,"));
    assert!(rows[2].starts_with("Second,"));
}

#[test]
fn artifacts_loaded_from_disk_drive_the_whole_pipeline() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(
        dir.path().join(artifacts::VOCABULARY_FILE),
        r#"{"index": {"moon": 1, "cheese": 2, "weather": 3}, "oov_id": null}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(artifacts::MODEL_FILE),
        r#"{"weights": [0.0, 3.0, 3.0, -3.0], "bias": 0.0}"#,
    )
    .unwrap();

    let classifier = Classifier::new(
        artifacts::load_vocabulary(dir.path()).unwrap(),
        artifacts::load_scorer(dir.path()).unwrap(),
    );
    let mut session = Session::new();

    // Both words carry strong fake-side weight: sigmoid(3) ~ 0.95
    let fake = classifier
        .classify(&mut session, "Moon", "Moon cheese")
        .unwrap();
    assert_eq!(fake.bucket, Bucket::HighlyFake);

    // Strong real-side weight: sigmoid(-3) ~ 0.05
    let real = classifier
        .classify(&mut session, "Weather", "Weather weather")
        .unwrap();
    assert_eq!(real.bucket, Bucket::HighlyReal);

    assert_eq!(session.tally().fake, 1);
    assert_eq!(session.tally().real, 1);
}

#[test]
fn a_scorer_backed_by_the_exported_weight_table_skips_padding() {
    let scorer = PooledScorer::new(vec![0.0, 2.0], 0.0);

    let short = scorer.score(&[1]).unwrap();
    let padded = scorer.score(&integrinews::tokenizer::sequence::pad(vec![1])).unwrap();

    assert_eq!(short, padded);
}
