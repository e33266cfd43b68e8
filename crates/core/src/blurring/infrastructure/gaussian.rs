/// Kernel size for a Gaussian of the given radius: `2r + 1`, always odd.
pub fn kernel_size_for_radius(radius: u32) -> usize {
    2 * radius as usize + 1
}

/// Sigma derived as `kernel_size / 6.0`, so three sigmas fit on each side
/// of the centre tap.
pub fn sigma_for_radius(radius: u32) -> f32 {
    kernel_size_for_radius(radius) as f32 / 6.0
}

/// Precompute a normalised 1D Gaussian kernel of the given size.
///
/// `kernel_size` must be odd and >= 1.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let mut weights: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights.iter().map(|&w| w as f32).collect()
}

/// Separable Gaussian blur over an interleaved buffer, in place.
///
/// Samples outside the buffer clamp to the nearest edge pixel, so the blur
/// never reads beyond the region it was handed.
pub fn separable_blur(data: &mut [u8], width: usize, height: usize, channels: usize, kernel: &[f32]) {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = kernel_size as isize / 2;
    let mut temp = vec![0.0f32; width * height * channels];

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half).clamp(0, width as isize - 1) as usize;
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half).clamp(0, height as isize - 1) as usize;
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kernel_size_for_radius() {
        assert_eq!(kernel_size_for_radius(0), 1);
        assert_eq!(kernel_size_for_radius(10), 21);
        assert_relative_eq!(sigma_for_radius(10), 3.5);
    }

    #[test]
    fn test_kernel_sums_to_one() {
        let k = gaussian_kernel_1d(21);
        let sum: f32 = k.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_kernel_is_symmetric_with_peak_in_centre() {
        let k = gaussian_kernel_1d(7);
        for i in 0..k.len() / 2 {
            assert_relative_eq!(k[i], k[k.len() - 1 - i], epsilon = 1e-7);
            assert!(k[3] > k[i]);
        }
    }

    #[test]
    fn test_uniform_buffer_unchanged() {
        let mut data = vec![128u8; 10 * 10 * 4];
        separable_blur(&mut data, 10, 10, 4, &gaussian_kernel_1d(5));
        assert!(data.iter().all(|&v| v == 128));
    }

    #[test]
    fn test_spreads_a_bright_pixel() {
        let mut data = vec![0u8; 10 * 10 * 4];
        let centre = (5 * 10 + 5) * 4;
        data[centre] = 255;

        separable_blur(&mut data, 10, 10, 4, &gaussian_kernel_1d(5));

        assert!(data[centre] < 255);
        assert!(data[(5 * 10 + 6) * 4] > 0);
        // other channels stay dark
        assert_eq!(data[centre + 1], 0);
    }

    #[test]
    fn test_kernel_size_1_is_identity() {
        let mut data: Vec<u8> = (0..5 * 5 * 4).map(|i| i as u8).collect();
        let original = data.clone();
        separable_blur(&mut data, 5, 5, 4, &gaussian_kernel_1d(1));
        assert_eq!(data, original);
    }

    #[test]
    fn test_single_row_buffer() {
        let mut data = vec![0u8, 0, 0, 255, 255, 255, 255, 255];
        separable_blur(&mut data, 2, 1, 4, &gaussian_kernel_1d(3));
        assert!(data[0] > 0 && data[4] < 255);
    }
}
