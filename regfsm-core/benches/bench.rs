use criterion::{Criterion, black_box, criterion_group, criterion_main};
use regfsm_core::{Regex, tokenize};

fn bench_compile(c: &mut Criterion) {
    let pattern = "[a-zA-Z_][a-zA-Z0-9_]*[^ ]?.+[0-9]*e+E";

    c.bench_function("tokenize", |b| b.iter(|| black_box(tokenize(black_box(pattern)))));
    c.bench_function("compile", |b| b.iter(|| black_box(Regex::new(black_box(pattern)))));
}

fn bench_literal_match(c: &mut Criterion) {
    let regex = Regex::new("hello world").unwrap();

    c.bench_function("literal_match", |b| {
        b.iter(|| black_box(regex.is_match(black_box("hello world"))))
    });
}

fn bench_character_classes(c: &mut Criterion) {
    let regex = Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    let input = "function_name_with_a_rather_long_identifier_123";

    c.bench_function("char_class_match", |b| {
        b.iter(|| black_box(regex.is_match(black_box(input))))
    });
}

fn bench_wide_fringe(c: &mut Criterion) {
    // Many live states at once
    let regex = Regex::new(".*a.*b.*c.*d.*e").unwrap();
    let input = "abcd".repeat(250) + "e";

    c.bench_function("wide_fringe_match", |b| {
        b.iter(|| black_box(regex.is_match(black_box(&input))))
    });
}

fn bench_early_reject(c: &mut Criterion) {
    let regex = Regex::new("a[^bc]d*e").unwrap();
    let input = "b".repeat(1000);

    c.bench_function("early_reject", |b| {
        b.iter(|| black_box(regex.is_match(black_box(&input))))
    });
}

fn bench_to_dot(c: &mut Criterion) {
    let regex = Regex::new("ab*[0-9]?d*e+E").unwrap();

    c.bench_function("to_dot", |b| b.iter(|| black_box(regex.to_dot())));
}

criterion_group!(
    benches,
    bench_compile,
    bench_literal_match,
    bench_character_classes,
    bench_wide_fringe,
    bench_early_reject,
    bench_to_dot,
);

criterion_main!(benches);
