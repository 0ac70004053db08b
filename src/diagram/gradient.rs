//! Per-row colour gradients from black to a band's colour

use crate::render::Rgb;

/// One colour per ribbon row, row 0 at the source side
pub(crate) fn build_gradient(rgb: Rgb, height: usize) -> Vec<Rgb> {
    let red = channel_ramp(rgb.r, height);
    let green = channel_ramp(rgb.g, height);
    let blue = channel_ramp(rgb.b, height);
    red.into_iter()
        .zip(green)
        .zip(blue)
        .map(|((r, g), b)| Rgb::new(r, g, b))
        .collect()
}

/// Staircase ramp 0..=level, each step repeated round(height / level) times,
/// then corrected to exactly `height` entries.
fn channel_ramp(level: u8, height: usize) -> Vec<u8> {
    if level == 0 || height == 0 {
        return vec![0; height];
    }

    let repeat = (height as f64 / level as f64).round_ties_even() as usize;
    if repeat == 0 {
        // More levels than rows: sample the plain 0..=level ramp
        let levels: Vec<u8> = (0..=level).collect();
        return resample(&levels, height);
    }
    let mut ramp: Vec<u8> = (0..=level)
        .flat_map(|n| std::iter::repeat_n(n, repeat))
        .collect();

    while ramp.len() != height {
        if ramp.len() > height {
            let excess = ramp.len() - height;
            let stride = (ramp.len() as f64 / excess as f64).round_ties_even() as usize;
            if stride < 2 {
                ramp = resample(&ramp, height);
            } else {
                delete_every(&mut ramp, stride);
            }
        } else {
            let last = ramp[ramp.len() - 1];
            ramp.resize(height, last);
        }
    }
    ramp
}

/// Delete the elements originally at 0, stride, 2*stride, ...
fn delete_every(ramp: &mut Vec<u8>, stride: usize) {
    let mut index = 0;
    ramp.retain(|_| {
        let keep = index % stride != 0;
        index += 1;
        keep
    });
}

/// Evenly spaced samples that keep both endpoints
fn resample(ramp: &[u8], height: usize) -> Vec<u8> {
    if height == 1 {
        return vec![ramp[0]];
    }
    let last = (ramp.len() - 1) as f64;
    (0..height)
        .map(|k| ramp[(k as f64 * last / (height - 1) as f64).round() as usize])
        .collect()
}
