use podlens_logs::{LogCategory, LogClassifier, LogVerdict};

const SAMPLE: &str = "\
2025-07-27T14:27:59Z INFO server starting on :8080
2025-07-27T14:28:00Z listening for connections
2025-07-27T14:28:03Z WARN slow query on orders (812ms)
2025-07-27T14:28:04Z ERROR: retrying connection to postgres
2025-07-27T14:28:05Z connection refused (127.0.0.1:5432)
2025-07-27T14:28:06Z reconnecting in 5s

2025-07-27T14:28:11Z GET /healthz 200
2025-07-27T14:28:12Z java.lang.NullPointerException at Foo.bar
2025-07-27T14:28:13Z deprecated flag --legacy used
";

#[test]
fn every_line_counted_exactly_once() {
    let analysis = LogClassifier::classify(SAMPLE);

    assert_eq!(analysis.total_lines, SAMPLE.lines().count());
    let categorized = analysis.error_count() + analysis.warning_count() + analysis.info_count();
    assert!(categorized <= analysis.total_lines);
    assert_eq!(categorized + analysis.unmatched_count(), analysis.total_lines);

    for line in SAMPLE.lines() {
        let hits = [LogCategory::Error, LogCategory::Warning, LogCategory::Info]
            .iter()
            .filter(|category| analysis.lines(**category).iter().any(|l| l == line))
            .count();
        assert!(hits <= 1, "line classified more than once: {line}");
    }
}

#[test]
fn sample_counts() {
    let analysis = LogClassifier::classify(SAMPLE);

    // ERROR: retrying, connection refused, NullPointerException is not a whole word
    assert_eq!(analysis.error_count(), 2);
    // slow query, reconnecting, deprecated
    assert_eq!(analysis.warning_count(), 3);
    // starting, listening
    assert_eq!(analysis.info_count(), 2);
    assert_eq!(analysis.verdict(), LogVerdict::Errors);
}

#[test]
fn priority_law() {
    let analysis = LogClassifier::classify("ERROR: retrying connection");
    assert_eq!(analysis.error_count(), 1);
    assert_eq!(analysis.warning_count(), 0);
}

#[test]
fn classification_is_idempotent() {
    let first = LogClassifier::classify(SAMPLE);
    let second = LogClassifier::classify(SAMPLE);

    assert_eq!(first.total_lines, second.total_lines);
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.info, second.info);
    assert_eq!(first.raw, second.raw);
}
