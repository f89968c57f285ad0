//! Cleaning chain benchmarks
//!
//! Offline throughput for the band-pass filter, the FFT kernel, spectral
//! subtraction and the full chain at 44.1 kHz.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cleantrack::spectrum::fft::fft_in_place;
use cleantrack::{AudioProcessor, BandPassFilter, SpectralSubtraction};
use num_complex::Complex32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_RATE: u32 = 44100;
const SIGNAL_SECONDS: &[usize] = &[1, 5];

/// Speech-band tone plus a little seeded hiss
fn generate_test_audio(samples: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            0.5 * (2.0 * std::f32::consts::PI * 440.0 * t).sin() + rng.gen_range(-0.025..0.025)
        })
        .collect()
}

fn bench_bandpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("Band-pass FIR");
    let filter = BandPassFilter::new(SAMPLE_RATE, 100.0, 8000.0).unwrap();

    for &seconds in SIGNAL_SECONDS {
        let input = generate_test_audio(seconds * SAMPLE_RATE as usize);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("65 taps", seconds), &input, |b, input| {
            b.iter(|| black_box(filter.apply(black_box(input))));
        });
    }

    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radix-2 FFT");

    for &size in &[512usize, 2048, 8192] {
        let input: Vec<Complex32> = generate_test_audio(size)
            .into_iter()
            .map(|x| Complex32::new(x, 0.0))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut buffer = input.clone();
                fft_in_place(&mut buffer).unwrap();
                black_box(buffer)
            });
        });
    }

    group.finish();
}

fn bench_spectral_subtraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectral subtraction");
    group.sample_size(20);
    let denoiser = SpectralSubtraction::new(2048, 512, 0.5).unwrap();

    for &seconds in SIGNAL_SECONDS {
        let input = generate_test_audio(seconds * SAMPLE_RATE as usize);
        let profile = denoiser.estimate_noise_profile(&input).unwrap();
        group.throughput(Throughput::Elements(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("estimated profile", seconds), &input, |b, input| {
            b.iter(|| black_box(denoiser.process(black_box(input), None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("given profile", seconds), &input, |b, input| {
            b.iter(|| black_box(denoiser.process(black_box(input), Some(&profile)).unwrap()));
        });
    }

    group.finish();
}

fn bench_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full chain");
    group.sample_size(20);
    let processor = AudioProcessor::new(SAMPLE_RATE, 100.0, 8000.0, 0.5).unwrap();

    for &seconds in SIGNAL_SECONDS {
        let input = generate_test_audio(seconds * SAMPLE_RATE as usize);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &input, |b, input| {
            b.iter(|| black_box(processor.process(black_box(input)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bandpass,
    bench_fft,
    bench_spectral_subtraction,
    bench_full_chain
);
criterion_main!(benches);
