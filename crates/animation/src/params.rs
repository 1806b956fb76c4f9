/// Rate at which all three palette oscillators advance with `t`.
const COLOR_SPEED: f64 = 0.05;

/// Phase offsets that stagger the three palette colors.
const COLOR_OFFSETS: [f64; 3] = [0.0, 1.5, 3.0];

/// Frequency multipliers for the green and blue channels of each color.
const COLOR_FREQUENCIES: [(f64, f64); 3] = [
    (1.05545, 1.4243),
    (1.4545, 1.2343),
    (1.1545, 1.7343),
];

const ORBIT_SPEED: f64 = 0.03;
const ORBIT_RADIUS: f64 = 0.7;
const ORBIT_WOBBLE: f64 = 0.15;
const ORBIT_WOBBLE_SPEED: f64 = 0.01343;

const TRAP_RADIUS: f64 = 1.2;
const TRAP_RADIUS_SWING: f64 = 0.6;
const TRAP_RADIUS_SPEED: f64 = 0.0334534;
const TRAP_BLEND_SPEED: f64 = 0.23453;

/// Linear RGB triple handed to the shader as a `vec3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Samples one palette oscillator. Red follows `sin(phase)`, green and
    /// blue follow `cos` at their own frequency multiplier.
    fn oscillate(phase: f64, (green, blue): (f64, f64)) -> Self {
        Self {
            r: unit_wave(phase.sin()),
            g: unit_wave((phase * green).cos()),
            b: unit_wave((phase * blue).cos()),
        }
    }
}

/// Uniform values for a single frame.
///
/// Computed in `f64` and narrowed to `f32` only at the end, matching what
/// the GL uniform calls accept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Scaled time, uploaded as `time`.
    pub time: f32,
    /// Palette colors, uploaded as `col0`, `col1` and `col2`.
    pub colors: [Rgb; 3],
    /// Julia constant `c`, orbiting the origin.
    pub c: [f32; 2],
    /// Squared trap radius and trap blend factor.
    pub trap: [f32; 2],
}

impl FrameParams {
    /// Evaluates every uniform at scaled time `t`.
    pub fn at(t: f64) -> Self {
        let colors = std::array::from_fn(|index| {
            let phase = t * COLOR_SPEED + COLOR_OFFSETS[index];
            Rgb::oscillate(phase, COLOR_FREQUENCIES[index])
        });

        let radius = orbit_radius(t);
        let angle = t * ORBIT_SPEED;
        let c = [(angle.sin() * radius) as f32, (angle.cos() * radius) as f32];

        let trap_r2 = (TRAP_RADIUS + TRAP_RADIUS_SWING * (t * TRAP_RADIUS_SPEED).sin()).powi(2);
        let trap_blend = 0.5 + 0.5 * (t * TRAP_BLEND_SPEED).sin();

        Self {
            time: t as f32,
            colors,
            c,
            trap: [trap_r2 as f32, trap_blend as f32],
        }
    }
}

fn orbit_radius(t: f64) -> f64 {
    ORBIT_RADIUS + ORBIT_WOBBLE * (t * ORBIT_WOBBLE_SPEED).sin()
}

fn unit_wave(value: f64) -> f32 {
    (0.5 + 0.5 * value) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_times() -> impl Iterator<Item = f64> {
        (0..5_000).map(|step| step as f64 * 0.731)
    }

    fn close(a: f32, b: f64) -> bool {
        (a as f64 - b).abs() < 1e-6
    }

    #[test]
    fn colors_stay_in_unit_range() {
        for t in sample_times() {
            let params = FrameParams::at(t);
            for color in params.colors {
                for channel in color.to_array() {
                    assert!((0.0..=1.0).contains(&channel), "t={t} channel={channel}");
                }
            }
        }
    }

    #[test]
    fn c_orbits_at_wobbling_radius() {
        for t in sample_times() {
            let params = FrameParams::at(t);
            let expected = orbit_radius(t);
            let magnitude = (params.c[0] as f64).hypot(params.c[1] as f64);
            assert!((magnitude - expected).abs() < 1e-5, "t={t}");
            assert!((0.55 - 1e-9..=0.85 + 1e-9).contains(&expected));
        }
    }

    #[test]
    fn trap_parameters_stay_in_range() {
        for t in sample_times() {
            let [radius_sq, blend] = FrameParams::at(t).trap;
            assert!(radius_sq >= 0.36 - 1e-6 && radius_sq <= 3.24 + 1e-6, "t={t}");
            assert!((0.0..=1.0).contains(&blend), "t={t}");
        }
    }

    #[test]
    fn same_time_gives_identical_params() {
        for t in [0.0, 1.0, 17.25, 1234.5678, 9.0e6] {
            let first = FrameParams::at(t);
            let second = FrameParams::at(t);
            assert_eq!(first.time.to_bits(), second.time.to_bits());
            for (a, b) in first.colors.iter().zip(second.colors.iter()) {
                for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
                    assert_eq!(x.to_bits(), y.to_bits());
                }
            }
            assert_eq!(first.c.map(f32::to_bits), second.c.map(f32::to_bits));
            assert_eq!(first.trap.map(f32::to_bits), second.trap.map(f32::to_bits));
        }
    }

    #[test]
    fn values_at_time_zero() {
        let params = FrameParams::at(0.0);
        assert_eq!(params.time, 0.0);
        assert_eq!(params.colors[0].to_array(), [0.5, 1.0, 1.0]);

        let col1 = params.colors[1];
        assert!(close(col1.r, 0.5 + 0.5 * 1.5f64.sin()));
        assert!(close(col1.g, 0.5 + 0.5 * (1.5f64 * 1.4545).cos()));
        assert!(close(col1.b, 0.5 + 0.5 * (1.5f64 * 1.2343).cos()));

        let col2 = params.colors[2];
        assert!(close(col2.r, 0.5 + 0.5 * 3.0f64.sin()));
        assert!(close(col2.g, 0.5 + 0.5 * (3.0f64 * 1.1545).cos()));
        assert!(close(col2.b, 0.5 + 0.5 * (3.0f64 * 1.7343).cos()));

        assert_eq!(params.c[0], 0.0);
        assert!(close(params.c[1], 0.7));
        assert!(close(params.trap[0], 1.44));
        assert!(close(params.trap[1], 0.5));
    }

    #[test]
    fn time_is_passed_through() {
        assert_eq!(FrameParams::at(42.5).time, 42.5);
    }
}
