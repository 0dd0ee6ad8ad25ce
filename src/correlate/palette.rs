use super::Base;
use cellgrid::Color;

const SOFT_RED: Color = Color::new(236, 186, 175, 1.0);
const SOFT_BLUE: Color = Color::new(185, 217, 239, 1.0);
const SOFT_YELLOW: Color = Color::new(243, 233, 166, 1.0);
const SOFT_GREEN: Color = Color::new(181, 216, 206, 1.0);

pub fn base_color(base: Base, alpha: f64) -> Color {
    let color = match base {
        Base::A => SOFT_RED,
        Base::T => SOFT_BLUE,
        Base::C => SOFT_YELLOW,
        Base::G => SOFT_GREEN,
    };
    color.with_alpha(alpha)
}

/// Maps a probability in [0, 1] onto an opacity in [0.1, 1] so that cells
/// with a zero probability stay visible.
pub fn prediction_alpha(probability: f64) -> f64 {
    probability * 0.9 + 0.1
}

/// Percentage with one decimal, e.g. 0.873 -> "87.3". A percentage exactly
/// halfway between two labels rounds up ("12.25" -> "12.3").
pub fn probability_label(probability: f64) -> String {
    let percentage = probability * 100.0;
    // Exact halves of a tenth are x.25 or x.75, i.e. odd multiples of 1/4
    let quarters = percentage.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters < 1e15 && (quarters as u64) % 2 == 1 {
        let tenths = (quarters as u64 * 5 + 1) / 2;
        let sign = if percentage < 0.0 { "-" } else { "" };
        return format!("{}{}.{}", sign, tenths / 10, tenths % 10);
    }
    format!("{:.1}", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_prediction_alpha() {
        assert_close(prediction_alpha(0.0), 0.1);
        assert_close(prediction_alpha(0.8), 0.82);
        assert_close(prediction_alpha(1.0), 1.0);
    }

    #[test]
    fn test_probability_label() {
        assert_eq!(probability_label(0.873), "87.3");
        assert_eq!(probability_label(0.8), "80.0");
        assert_eq!(probability_label(0.0), "0.0");
        assert_eq!(probability_label(1.0), "100.0");
        assert_eq!(probability_label(0.00049), "0.0");
    }

    #[test]
    fn test_probability_label_halves_round_up() {
        assert_eq!(probability_label(0.0025), "0.3");
        assert_eq!(probability_label(0.0125), "1.3");
        assert_eq!(probability_label(0.1225), "12.3");
        // 51.24999... is below the half and rounds down
        assert_eq!(probability_label(0.5125), "51.2");
    }

    #[test]
    fn test_base_color() {
        assert_eq!(base_color(Base::A, 1.0), Color::new(236, 186, 175, 1.0));
        assert_eq!(base_color(Base::T, 1.0), Color::new(185, 217, 239, 1.0));
        assert_eq!(base_color(Base::C, 1.0), Color::new(243, 233, 166, 1.0));
        assert_eq!(base_color(Base::G, 0.5), Color::new(181, 216, 206, 0.5));
    }
}
