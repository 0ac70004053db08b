//! Fixed colour palette with per-entry reservation

use rand::Rng;

use crate::render::Rgb;

/// Reference palette, 20 visually distinct colours
pub(crate) const DEFAULT_PALETTE: [Rgb; 20] = [
    Rgb::new(230, 25, 75),
    Rgb::new(60, 180, 75),
    Rgb::new(255, 225, 25),
    Rgb::new(0, 130, 200),
    Rgb::new(245, 130, 48),
    Rgb::new(145, 30, 180),
    Rgb::new(70, 240, 240),
    Rgb::new(240, 50, 230),
    Rgb::new(210, 245, 60),
    Rgb::new(250, 190, 212),
    Rgb::new(0, 128, 128),
    Rgb::new(220, 190, 255),
    Rgb::new(170, 110, 40),
    Rgb::new(255, 250, 200),
    Rgb::new(128, 0, 0),
    Rgb::new(170, 255, 195),
    Rgb::new(128, 128, 0),
    Rgb::new(255, 215, 180),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 128, 128),
];

struct PaletteEntry {
    rgb: Rgb,
    used: bool,
}

/// Ordered palette. An entry handed out stays reserved for the palette's lifetime,
/// so each render builds a fresh one.
pub(crate) struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub(crate) fn new(colors: &[Rgb]) -> Self {
        Self {
            entries: colors
                .iter()
                .map(|&rgb| PaletteEntry { rgb, used: false })
                .collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reserve entry `index`. Returns `None` if it is out of range or already taken.
    pub(crate) fn take(&mut self, index: usize) -> Option<Rgb> {
        let entry = self.entries.get_mut(index)?;
        if entry.used {
            return None;
        }
        entry.used = true;
        Some(entry.rgb)
    }

    /// Reserve a uniformly random unused entry
    pub(crate) fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, Rgb)> {
        let unused: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.used)
            .map(|(i, _)| i)
            .collect();
        if unused.is_empty() {
            return None;
        }
        let index = unused[rng.gen_range(0..unused.len())];
        self.entries[index].used = true;
        Some((index, self.entries[index].rgb))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&DEFAULT_PALETTE)
    }
}
