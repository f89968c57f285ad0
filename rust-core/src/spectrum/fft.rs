//! In-place iterative radix-2 FFT
//!
//! One kernel serves both directions: the inverse conjugates, runs the forward
//! transform, conjugates again and scales by 1/N.

use crate::error::FftError;
use num_complex::Complex32;
use std::f64::consts::PI;

/// Forward DFT of `buffer` in place, X[k] = Σ x[n]·exp(-2πi·kn/N)
///
/// # Errors
/// `FftError::NotPowerOfTwo` unless the length is a power of two (zero included).
pub fn fft_in_place(buffer: &mut [Complex32]) -> Result<(), FftError> {
    let n = buffer.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }

    let log2n = n.trailing_zeros();
    if log2n == 0 {
        return Ok(());
    }

    // Bit-reversal permutation
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - log2n);
        if j > i {
            buffer.swap(i, j);
        }
    }

    // Butterfly stages, m = 2, 4, ..., n
    for s in 1..=log2n {
        let m = 1usize << s;
        let half = m >> 1;
        let angle = -2.0 * PI / m as f64;

        for j in 0..half {
            // w = exp(-2πi·j/m)
            let theta = angle * j as f64;
            let w = Complex32::new(theta.cos() as f32, theta.sin() as f32);

            let mut k = j;
            while k < n {
                let t = w * buffer[k + half];
                let u = buffer[k];
                buffer[k] = u + t;
                buffer[k + half] = u - t;
                k += m;
            }
        }
    }

    Ok(())
}

/// Inverse DFT of `buffer` in place, x[n] = (1/N)·Σ X[k]·exp(2πi·kn/N)
pub fn ifft_in_place(buffer: &mut [Complex32]) -> Result<(), FftError> {
    for value in buffer.iter_mut() {
        *value = value.conj();
    }

    fft_in_place(buffer)?;

    let scale = 1.0 / buffer.len() as f32;
    for value in buffer.iter_mut() {
        *value = value.conj() * scale;
    }

    Ok(())
}
