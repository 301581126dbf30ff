use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sqlsplitter::{StatementCursor, split_str};

fn build_script(statements: usize) -> String {
    let mut script = String::new();
    for i in 0..statements {
        match i % 4 {
            0 => script.push_str(&format!("insert into t values ({}, 'a;b\\'c');\n", i)),
            1 => script.push_str("-- comment ; here\nselect * from t where id = 1;\n"),
            2 => script.push_str("select /* multi\nline ; comment */ count(*)\nfrom t;\n"),
            _ => script.push_str("update t set `name` = \"x\" where id = 2;select 1;\n"),
        }
    }
    script
}

fn bench_split_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_str");
    for size in [100usize, 10_000] {
        let script = build_script(size);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &script, |b, script| {
            b.iter(|| split_str(black_box(script)).len());
        });
    }
    group.finish();
}

fn bench_cursor_streaming(c: &mut Criterion) {
    let script = build_script(10_000);
    let mut group = c.benchmark_group("cursor_streaming");
    group.throughput(Throughput::Bytes(script.len() as u64));
    group.bench_function("advance_take", |b| {
        b.iter(|| {
            let mut cursor = StatementCursor::from_sql(black_box(&script));
            let mut bytes = 0;
            while cursor.advance() {
                bytes += cursor.take_statement().len();
            }
            bytes
        });
    });
    group.finish();
}

criterion_group!(benches, bench_split_str, bench_cursor_streaming);
criterion_main!(benches);
