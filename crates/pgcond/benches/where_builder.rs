use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgcond::prelude::*;

/// Chain `n` conditions, cycling through every condition kind.
fn build_chain(n: usize) -> WhereStatement {
    let mut stmt = WhereStatement::new();
    for i in 0..n {
        let column = format!("col{i}");
        stmt = match i % 5 {
            0 => stmt.where_(column).at_least(i as i64),
            1 => stmt.or_where(column).is(col("other.id")),
            2 => stmt.where_(column).not_between(0, i as i64),
            3 => stmt.where_(column).in_(vec![1, 2, 3]),
            _ => stmt.or_where(column).not_null(),
        };
    }
    stmt
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("where_builder/chain");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_chain(n)));
        });
    }

    group.finish();
}

fn bench_evaluate_column_refs(c: &mut Criterion) {
    let mut group = c.benchmark_group("where_builder/evaluate_column_refs");

    for n in [5, 20, 100] {
        let stmt = build_chain(n).into_statement();
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| {
                for condition in stmt.conditions() {
                    if let WhereCondition::Comparison { operand, .. } = condition {
                        black_box(operand.evaluate());
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_evaluate_column_refs);
criterion_main!(benches);
