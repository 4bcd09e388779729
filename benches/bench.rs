use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stringpool::{Pool, StringBuilder};

/// Maximum scaling factor, in powers of two.
const MAX_SCALING_FACTOR: u32 = 6;

trait Pooler {
    fn get(&self) -> StringBuilder;
    fn release(&self, sb: StringBuilder);
}

struct DefaultPool;

impl Pooler for DefaultPool {
    fn get(&self) -> StringBuilder {
        stringpool::get()
    }

    fn release(&self, sb: StringBuilder) {
        stringpool::release(sb)
    }
}

impl Pooler for Pool {
    fn get(&self) -> StringBuilder {
        self.acquire()
    }

    fn release(&self, sb: StringBuilder) {
        Pool::release(self, sb)
    }
}

/// Allocates a new builder every time and drops it on release.
struct NoPool;

impl Pooler for NoPool {
    fn get(&self) -> StringBuilder {
        StringBuilder::new()
    }

    fn release(&self, sb: StringBuilder) {
        drop(sb)
    }
}

fn write_bytes(pooler: &dyn Pooler, scale: usize) -> usize {
    let mut sb = pooler.get();
    for byte in 0..255u8 {
        for _ in 0..scale {
            sb.push_byte(byte);
        }
    }
    let len = black_box(sb.to_string_lossy()).len();
    pooler.release(sb);
    len
}

fn bench_write_bytes(c: &mut Criterion) {
    let pools: [(&str, Box<dyn Pooler>); 3] = [
        ("global", Box::new(DefaultPool)),
        ("new_pool", Box::new(Pool::new())),
        ("non_pool", Box::new(NoPool)),
    ];

    let mut group = c.benchmark_group("write_bytes");
    for j in 0..MAX_SCALING_FACTOR {
        let scale = 1usize << j;
        group.throughput(Throughput::Bytes(255 * scale as u64));
        for (name, pooler) in &pools {
            group.bench_with_input(BenchmarkId::new(*name, scale), &scale, |b, &scale| {
                b.iter(|| write_bytes(pooler.as_ref(), black_box(scale)))
            });
        }
    }
    group.finish();
}

fn bench_acquire_release(c: &mut Criterion) {
    let pool = Pool::with_prealloc(1);
    let mut group = c.benchmark_group("acquire_release");
    group.bench_function("pool", |b| {
        b.iter(|| {
            let sb = pool.acquire();
            pool.release(black_box(sb));
        })
    });
    group.bench_function("entry", |b| b.iter(|| drop(black_box(pool.get()))));
    group.bench_function("non_pool", |b| {
        b.iter(|| drop(black_box(StringBuilder::with_capacity(64))))
    });
    group.finish();
}

criterion_group!(benches, bench_write_bytes, bench_acquire_release);
criterion_main!(benches);
