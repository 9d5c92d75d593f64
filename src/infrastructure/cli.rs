use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Tick rate, i.e. number of ticks per second (drives the marquee)",
        default_value_t = 8.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "PATH",
        help = "Load testimonials from a JSON file instead of the configuration"
    )]
    pub testimonials: Option<PathBuf>,

    #[arg(long, help = "Enable timer-driven testimonial auto-advance")]
    pub auto_advance: bool,
}

/// Rates become `1 / rate` second intervals, so they must be positive and finite
fn positive_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("`{s}` must be a positive, finite number"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["pamui"]);
        assert_eq!(cli.tick_rate, 8.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.testimonials, None);
        assert!(!cli.auto_advance);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "pamui",
            "--tick-rate",
            "2",
            "--testimonials",
            "quotes.json",
            "--auto-advance",
        ]);
        assert_eq!(cli.tick_rate, 2.0);
        assert_eq!(cli.testimonials, Some(PathBuf::from("quotes.json")));
        assert!(cli.auto_advance);
    }

    #[rstest]
    #[case("--tick-rate", "0")]
    #[case("--tick-rate", "-4")]
    #[case("--frame-rate", "0")]
    #[case("--frame-rate", "inf")]
    #[case("--frame-rate", "NaN")]
    fn test_rejects_unusable_rates(#[case] flag: &str, #[case] value: &str) {
        assert!(Cli::try_parse_from(["pamui", flag, value]).is_err());
    }
}
