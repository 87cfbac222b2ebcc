//! Tokenizer Benchmarks
//!
//! Measures single-line and whole-document tokenization.
//! Run with: `cargo bench --package fancy-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fancy_lex::{tokenize, tokenize_line, LineInfo};

const HANDLER_SOURCE: &str = r#"
/* appjet:version 0.1 */
import("storage");

function get_main() {
    var visits = storage.visits || 0;
    storage.visits = visits + 1;
    var greeting = """
        <h1>Hello!</h1>
    """;
    if (/bot|crawler/i.test(request.headers["User-Agent"])) {
        return;
    }
    print(raw(greeting), P("Visits: " + (visits / 2)));
}

dispatch();
"#;

fn bench_single_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_line");

    let statement = "var total = price * 0x10 + tax / 2; // cents";
    group.throughput(Throughput::Bytes(statement.len() as u64));

    group.bench_function("statement", |b| {
        b.iter(|| tokenize_line(black_box(statement), None))
    });

    group.bench_function("regexp", |b| {
        b.iter(|| tokenize_line(black_box("s = s.replace(/&/g, '&amp;').replace(/</g, '&lt;');"), None))
    });

    let inside = LineInfo {
        ends_inside_multiline_comment: true,
        ends_inside_multiline_string: false,
    };
    group.bench_function("carried_comment", |b| {
        b.iter(|| tokenize_line(black_box("   * still documenting the handler */ x();"), Some(&inside)))
    });

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_document");

    group.throughput(Throughput::Bytes(HANDLER_SOURCE.len() as u64));
    group.bench_function("handler", |b| b.iter(|| tokenize(black_box(HANDLER_SOURCE))));

    let large = HANDLER_SOURCE.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("handler_x100", |b| b.iter(|| tokenize(black_box(&large))));

    group.finish();
}

criterion_group!(benches, bench_single_lines, bench_document);
criterion_main!(benches);
