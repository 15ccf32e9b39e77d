use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use tfidf_core::corpus::parse_inverted_index;
use tfidf_core::idf::calculate_idf;
use tfidf_core::tf::calculate_tf;
use tfidf_core::tfidf::calculate_tfidf;
use tfidf_core::Vocabulary;

fn synthetic_corpus(docs: usize, vocab: usize, len: usize) -> (String, Vec<String>, HashMap<String, Vec<String>>) {
    let names: Vec<String> = (0..docs).map(|d| format!("doc{d}")).collect();
    let mut postings: Vec<Vec<&str>> = vec![Vec::new(); vocab];
    let mut source = HashMap::new();
    for (d, name) in names.iter().enumerate() {
        let tokens: Vec<String> = (0..len).map(|i| format!("t{}", (d * 31 + i * 7) % vocab)).collect();
        let mut seen = vec![false; vocab];
        for i in 0..len {
            let t = (d * 31 + i * 7) % vocab;
            if !seen[t] {
                seen[t] = true;
                postings[t].push(name.as_str());
            }
        }
        source.insert(name.clone(), tokens);
    }
    let inverted = postings
        .iter()
        .enumerate()
        .filter(|(_, docs)| !docs.is_empty())
        .map(|(t, docs)| format!("t{t} - {}", docs.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    (inverted, names, source)
}

fn bench_pipeline(c: &mut Criterion) {
    let (inverted, names, source) = synthetic_corpus(200, 5_000, 400);
    let entries = parse_inverted_index(&inverted);
    let vocabulary = Vocabulary::from_entries(&entries).unwrap();

    c.bench_function("tf_sequential", |b| b.iter(|| calculate_tf(&vocabulary, &names, &source, false).unwrap()));
    c.bench_function("tf_parallel", |b| b.iter(|| calculate_tf(&vocabulary, &names, &source, true).unwrap()));

    let tf = calculate_tf(&vocabulary, &names, &source, false).unwrap();
    let idf = calculate_idf(&vocabulary, &entries, names.len()).unwrap();
    c.bench_function("tfidf_combine", |b| b.iter(|| calculate_tfidf(&tf, &idf).unwrap()));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
