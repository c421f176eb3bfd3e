use citegen_core::{SourceFields, SourceType, Style};
use citegen_processor::generate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_rendering(c: &mut Criterion) {
    let book = SourceFields {
        authors: vec!["Smith, John".to_string(), "Jane Doe".to_string()],
        title: "The Great Gatsby".to_string(),
        edition: "2nd ed.".to_string(),
        publisher: "Scribner".to_string(),
        year: "1995".to_string(),
        doi_or_url: "10.1234/abcd".to_string(),
        ..Default::default()
    };

    let journal = SourceFields {
        authors: vec!["Jane Doe".to_string()],
        article_title: "Quantum Basics".to_string(),
        journal_name: "Nature Physics".to_string(),
        volume: "12".to_string(),
        issue: "3".to_string(),
        year: "2021".to_string(),
        pages: "123-145".to_string(),
        doi_or_url: "10.5678/xyz".to_string(),
        ..Default::default()
    };

    let mut group = c.benchmark_group("generate");
    for style in Style::ALL {
        group.bench_function(format!("{} book", style), |b| {
            b.iter(|| generate(style, SourceType::Book, black_box(&book)).unwrap())
        });
    }
    group.bench_function("mla9 journal", |b| {
        b.iter(|| generate(Style::Mla9, SourceType::Journal, black_box(&journal)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
