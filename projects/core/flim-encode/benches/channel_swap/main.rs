use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flim_encode::bench::{swap_channels, ChannelSwap};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Red/Blue Channel Swap");

    // 1024x1024 at 32 bits per pixel
    let size = 4 * 1024 * 1024;
    let mut data: Vec<u8> = (0..size).map(|x| (x % 251) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    for swap in [
        ChannelSwap::Rgb565,
        ChannelSwap::Rgb5a1,
        ChannelSwap::Argb4,
        ChannelSwap::Rgba8,
        ChannelSwap::Bgr10a2,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{swap:?}")),
            &swap,
            |b, &swap| b.iter(|| swap_channels(swap, black_box(&mut data))),
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
