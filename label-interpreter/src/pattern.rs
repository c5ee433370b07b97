//! Seeded bar sequences for placeholder barcodes. The bars only vary with the
//! value; they do not encode it.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-16 code units of `value`.
pub fn fnv1a(value: &str) -> u32 {
    value.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub black: bool,
    pub width: u32,
}

/// Endless xorshift32 driven bar sequence. Cloning or rebuilding with the
/// same seed replays the same bars.
#[derive(Debug, Clone)]
pub struct BarPattern {
    state: u32,
    max_width: u32,
}

impl BarPattern {
    /// `module` is the bar width granularity; bars are 1 to `2 * module` wide.
    pub fn new(seed: u32, module: u32) -> Self {
        // zero is a fixed point of xorshift
        let state = if seed == 0 { FNV_OFFSET_BASIS } else { seed };
        Self {
            state,
            max_width: module.max(1).saturating_mul(2),
        }
    }
}

impl Iterator for BarPattern {
    type Item = Bar;

    fn next(&mut self) -> Option<Bar> {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;

        Some(Bar {
            black: x & 1 == 1,
            width: 1 + (x >> 1) % self.max_width,
        })
    }
}
