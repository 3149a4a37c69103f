use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};

fn benchmark_parser(c: &mut Criterion) {
    let inputs = [
        (
            "Simple",
            r#"
            fn foo() {
                42
            }
            "#,
        ),
        (
            "Medium",
            r#"
            fn foo() {
                if true {}
                if true {} else {}
                if true {} else if false {} else {}
            }

            fn bar() {
                'outer: loop {
                    while x < 10 {
                        break 'outer;
                    }
                }
            }

            struct Point { x: i32, y: i32 }

            impl Display for Point {
                fn fmt(self) -> i32 { self.x + self.y }
            }
            "#,
        ),
    ];

    let mut group = c.benchmark_group("Parser Benchmark");

    for (name, code) in inputs {
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_code", name), &code, |b, code| {
            b.iter(|| {
                let parse = ferrite_parse::source_file(code);
                black_box(parse);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
