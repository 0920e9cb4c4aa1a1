//! Benchmarks for the committed-value path of `LazyHolder::get`.

use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pk_singleton::LazyHolder;

fn ready_get(c: &mut Criterion) {
    let holder = LazyHolder::new(|| vec![0_u64; 1024]);
    holder.get().expect("factory is infallible");

    c.bench_function("get (ready, single thread)", |b| {
        b.iter(|| black_box(holder.get()))
    });
}

fn contended_get(c: &mut Criterion) {
    let holder = Arc::new(LazyHolder::new(|| String::from("shared")));
    holder.get().expect("factory is infallible");

    c.bench_function("get (ready, 4 threads x 1000)", |b| {
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| {
                        for _ in 0..1000 {
                            black_box(holder.get().ok());
                        }
                    });
                }
            })
        })
    });
}

fn first_get(c: &mut Criterion) {
    c.bench_function("get (fresh holder)", |b| {
        b.iter(|| {
            let holder = LazyHolder::new(|| 42_u32);
            black_box(holder.get())
        })
    });
}

criterion_group!(benches, ready_get, contended_get, first_get);
criterion_main!(benches);
