use rand::Rng;
use tracing::debug_span;

use crate::base::{GeneratorBase, Parameters};
use crate::chunk::TerrainChunk;
use crate::TerrainGenerator;

pub const HEIGHT: &str = "height";
pub const ROUGHNESS: &str = "roughness";

const DEFAULT_HEIGHT: f64 = 20.0;
const DEFAULT_ROUGHNESS: f64 = 0.5;

// Linear interpolation from `low` (alpha = 0) to `high` (alpha = 1)
#[inline]
fn lerp(low: f64, high: f64, alpha: f64) -> f64 {
    (high - low) * alpha + low
}

// One hill rising from the generator's base height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub x: f64,
    pub y: f64,
    // Steepness of the falloff away from the summit
    pub strength: f64,
    pub height: f64,
    // No influence at or beyond this distance
    pub max_radius: f64,
    // Width of the band near max_radius that blends back down to zero
    pub lip: f64,
    // Radius around the summit that gets creased down a little
    pub tip: f64,
}

impl Peak {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            strength: 1.5,
            height: 40.0,
            max_radius: 32.0,
            lip: 5.0,
            tip: 9.0,
        }
    }

    pub fn distance_squared(&self, other_x: f64, other_y: f64) -> f64 {
        let off_x = self.x - other_x;
        let off_y = self.y - other_y;
        off_x * off_x + off_y * off_y
    }

    // How much this peak raises the ground at (other_x, other_y), measured
    // from `base_height`
    pub fn height_offset_at(&self, base_height: f64, other_x: f64, other_y: f64) -> f64 {
        let max_radius_sq = self.max_radius * self.max_radius;
        let distance_sq = self.distance_squared(other_x, other_y);

        if distance_sq >= max_radius_sq {
            return 0.0;
        }

        let falloff = 1.0 + distance_sq.powf(1.0 / (1.0 + self.strength)).max(0.0);
        let mut val = (self.height - base_height) / falloff;

        let distance = distance_sq.sqrt();
        let edge_distance = max_radius_sq.sqrt() - distance;

        if distance < self.tip {
            let tip_crease = ((self.tip - distance) * 2.0 / self.tip).powf(1.0 + self.strength);
            val -= tip_crease;
        }

        if edge_distance < self.lip {
            let lip_alpha = (self.lip - edge_distance) / self.lip;
            val = lerp(val, 0.0, lip_alpha);
        }

        val
    }
}

// Flat ground at `height` with hand-placed peaks and uniform jitter in
// [-roughness, +roughness]. Peaks are not randomized; only the jitter
// consumes the stream, one unit draw in [-1, 1] per cell scaled by roughness,
// and none when roughness == 0.
#[derive(Debug, Clone)]
pub struct PeakGenerator {
    base: GeneratorBase,
    peaks: Vec<Peak>,
}

impl PeakGenerator {
    pub fn new() -> Self {
        Self {
            base: GeneratorBase::new(Self::default_parameters()),
            peaks: Vec::new(),
        }
    }

    pub fn default_parameters() -> Parameters {
        [(HEIGHT, DEFAULT_HEIGHT), (ROUGHNESS, DEFAULT_ROUGHNESS)]
            .into_iter()
            .collect()
    }

    pub fn with_peak(mut self, peak: Peak) -> Self {
        self.peaks.push(peak);
        self
    }

    pub fn add_peak(&mut self, peak: Peak) {
        self.peaks.push(peak);
    }

    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }
}

impl Default for PeakGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainGenerator for PeakGenerator {
    fn name(&self) -> &'static str {
        "peak"
    }

    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn generate(&mut self, target: &mut TerrainChunk) {
        let height = self.base.params.get_or(HEIGHT, DEFAULT_HEIGHT);
        let roughness = self.base.params.get_or(ROUGHNESS, DEFAULT_ROUGHNESS);

        let _span = debug_span!(
            "generate",
            generator = "peak",
            width = target.width(),
            seed = self.base.seed(),
            peaks = self.peaks.len()
        )
        .entered();

        let spread = roughness.abs();
        let jitter = roughness != 0.0 && spread.is_finite();
        let peaks = &self.peaks;
        let rng = self.base.rng_mut();

        let mut cursor = target.cursor();
        while cursor.next() {
            let mut val = height;

            if jitter {
                val += rng.random_range(-1.0..=1.0) * spread;
            }

            let (x, y) = (cursor.x() as f64, cursor.y() as f64);
            val += peaks
                .iter()
                .map(|peak| peak.height_offset_at(height, x, y))
                .sum::<f64>();

            cursor.add(val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_peak() -> Peak {
        Peak {
            height: 20.0,
            max_radius: 5.0,
            strength: 1.5,
            lip: 1.5,
            tip: 1.5,
            ..Peak::new(5.0, 5.0)
        }
    }

    #[test]
    fn peak_no_influence_outside_radius() {
        let peak = test_peak();
        assert_eq!(peak.height_offset_at(10.0, 0.0, 0.0), 0.0);
        assert_eq!(peak.height_offset_at(10.0, 10.0, 5.0), 0.0);
    }

    #[test]
    fn peak_summit_is_creased() {
        let peak = test_peak();
        // At the summit: full rise (20 - 10) minus the tip crease 2^2.5
        let expected = 10.0 - 2.0f64.powf(2.5);
        assert!((peak.height_offset_at(10.0, 5.0, 5.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn peak_lip_fades_to_zero() {
        let peak = test_peak();
        // Just inside the radius the lip blend pulls the value close to zero
        let near_edge = peak.height_offset_at(10.0, 9.99, 5.0);
        assert!(near_edge.abs() < 0.05, "got {near_edge}");
    }

    #[test]
    fn peak_generator_raises_terrain() {
        let mut chunk = TerrainChunk::new(0, 11, 0.0).unwrap();
        let mut g = PeakGenerator::new().with_peak(test_peak());
        g.set_parameter(HEIGHT, 10.0);
        g.set_parameter(ROUGHNESS, 0.0);
        g.generate(&mut chunk);

        let summit = chunk.get(5, 5).unwrap();
        assert!(summit > 10.0 && summit <= 20.0, "summit {summit}");
        assert_eq!(chunk.get(0, 0).unwrap(), 10.0);
        assert!(chunk.sample(20.0, 5.0) <= chunk.sample(5.0, 5.0));
    }

    #[test]
    fn peak_generator_collects_peaks() {
        let mut g = PeakGenerator::new().with_peak(Peak::new(1.0, 2.0));
        g.add_peak(test_peak());
        assert_eq!(g.peaks(), &[Peak::new(1.0, 2.0), test_peak()]);
    }

    #[test]
    fn peak_smooth_pass_leaves_stream_untouched() {
        let rough_pass = |g: &mut PeakGenerator| {
            let mut chunk = TerrainChunk::new(0, 8, 0.0).unwrap();
            g.generate(&mut chunk);
            chunk
        };

        let mut fresh = PeakGenerator::new();
        fresh.seed(21);
        let rough_first = rough_pass(&mut fresh);

        let mut g = PeakGenerator::new();
        g.seed(21);
        g.set_parameter(ROUGHNESS, 0.0);
        g.generate(&mut TerrainChunk::new(0, 8, 0.0).unwrap());
        g.set_parameter(ROUGHNESS, DEFAULT_ROUGHNESS);

        assert_eq!(rough_pass(&mut g), rough_first);
    }

    #[test]
    fn peak_huge_roughness_stays_finite() {
        let mut chunk = TerrainChunk::new(0, 4, 0.0).unwrap();
        let mut g = PeakGenerator::new();
        g.set_parameter(ROUGHNESS, 1e308);
        g.generate(&mut chunk);
        assert!(chunk.heights().iter().all(|h| h.is_finite()));
    }

    #[test]
    fn peak_generator_jitter_bounded_and_deterministic() {
        let run = || {
            let mut chunk = TerrainChunk::new(0, 8, 0.0).unwrap();
            let mut g = PeakGenerator::new();
            g.seed(99);
            g.generate(&mut chunk);
            chunk
        };
        let a = run();
        assert_eq!(a, run());
        for &h in a.heights() {
            assert!((h - DEFAULT_HEIGHT).abs() <= DEFAULT_ROUGHNESS + 1e-12);
        }
    }
}
