//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package wavec-lex`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wavec_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "fun main() { var y = x + 1; while (y < 10) { y = y * 2; } }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        // Iterative fibonacci
        fun fib(n) {
            var a = 0;
            var b = 1;
            var i = 0;
            while (i < n) {
                var t = a + b;
                a = b;
                b = t;
                i = i + 1;
            }
            return(a);
        }

        /* prints the first few values
           /* nested comments are fine */ */
        fun main() {
            var limit = 12.5;
            if (limit >= 10) {
                print("fib:\t", fib(limit % 20));
            } else {
                print("too small\n");
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_scaling");

    let unit = "var value_1 = 3.14 * (x != y); \"text \\\" here\" // trailing\n";
    for repeat in [10usize, 100, 1000] {
        let source = unit.repeat(repeat);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &source, |b, s| {
            b.iter(|| lexer_token_count(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_program,
    bench_lexer_scaling
);
criterion_main!(benches);
