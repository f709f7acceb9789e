use ascon_hex::permutation::{permute_a, permute_b};
use ascon_hex::{encrypt, Key, Nonce};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_permute(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");
    let mut rng = SmallRng::seed_from_u64(1);
    let mut state: [u64; 5] = rng.random();
    group.bench_function("p^b", |b| b.iter(|| permute_b(black_box(&mut state))));
    group.bench_function("p^a", |b| b.iter(|| permute_a(black_box(&mut state))));
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let key = Key::from_bytes(&[0x0f; 16]);
    let nonce = Nonce::from_bytes(&[0xf0; 16]);

    let mut group = c.benchmark_group("encrypt");
    for digits in [16, 256, 4096] {
        let plaintext = "a".repeat(digits);
        group.throughput(Throughput::Bytes(digits as u64 / 2));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &plaintext, |b, pt| {
            b.iter(|| encrypt(&nonce, &key, black_box(pt), "00"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permute, bench_encrypt);
criterion_main!(benches);
