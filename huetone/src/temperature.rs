//! Warm/cool analysis of colors: temperature estimates, complements,
//! and analogous sets.
//!
//! The temperature score follows empirical color-science work relating
//! CIE Lab chroma and hue angle to how warm or cool observers rate a
//! color. Complements and analogous sets are then defined in terms of
//! relative temperature rather than raw hue arithmetic, which keeps
//! them perceptually balanced.

use std::sync::OnceLock;

use crate::color::lab_from_argb;
use crate::hct::Hct;
use crate::math::{sanitize_degrees, sanitize_degrees_int};

/// Temperature analysis of one input color.
///
/// Construction is cheap; the tables over all 360 hues at the input's
/// chroma and tone are computed on first use and shared by later calls
/// on the same cache.
#[derive(Debug)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: OnceLock<Vec<Hct>>,
    extremes: OnceLock<(Hct, Hct)>,
    complement: OnceLock<Hct>,
}

impl TemperatureCache {
    /// Creates a cache analyzing `input`.
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            hcts_by_hue: OnceLock::new(),
            extremes: OnceLock::new(),
            complement: OnceLock::new(),
        }
    }

    /// Absolute temperature of a color. Warm colors score positive,
    /// cool colors negative; achromatic colors sit at -0.5.
    ///
    /// Value on sRGB: roughly -1.4 for blue up to 2.4 for red.
    pub fn raw_temperature(color: Hct) -> f64 {
        let lab = lab_from_argb(color.to_argb());
        let hue = sanitize_degrees(lab.b.atan2(lab.a).to_degrees());
        let chroma = lab.a.hypot(lab.b);
        -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
    }

    /// Temperature of `hct` relative to the coldest and warmest colors
    /// reachable at the input's chroma and tone. 0 is coldest, 1 is
    /// warmest, 0.5 when the whole hue ring has one temperature.
    pub fn relative_temperature(&self, hct: Hct) -> f64 {
        let (coldest, warmest) = self.extremes();
        let range = Self::raw_temperature(warmest) - Self::raw_temperature(coldest);
        if range == 0.0 {
            return 0.5;
        }
        (Self::raw_temperature(hct) - Self::raw_temperature(coldest)) / range
    }

    /// Relative temperature of the input color itself.
    pub fn input_relative_temperature(&self) -> f64 {
        self.relative_temperature(self.input)
    }

    /// The color on the opposite side of the temperature ring: as warm
    /// as the input is cool, and vice versa, at the same chroma and
    /// tone.
    pub fn complement(&self) -> Hct {
        *self.complement.get_or_init(|| self.find_complement())
    }

    /// Five analogous colors, the input in the middle, spaced evenly
    /// in temperature over a twelve-division hue ring.
    pub fn analogous_colors(&self) -> Vec<Hct> {
        self.analogous(5, 12)
    }

    /// A set of `count` analogous colors with the input in the middle.
    ///
    /// The hue ring is divided into `divisions` sections of equal
    /// relative temperature, and neighbors are drawn from adjacent
    /// sections. Hues with no analogue at this chroma and tone (black,
    /// white) repeat to fill the ring.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let hcts = self.hcts_by_hue();
        let start_hue = self.input.hue().round() as usize;
        let start_hct = hcts[start_hue];
        let mut last_temp = self.relative_temperature(start_hct);

        let mut all_colors = vec![start_hct];
        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = sanitize_degrees_int(start_hue as i32 + i) as usize;
            let temp = self.relative_temperature(hcts[hue]);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        let mut hue_addend = 1;
        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        last_temp = self.relative_temperature(start_hct);
        while all_colors.len() < divisions {
            let hue = sanitize_degrees_int(start_hue as i32 + hue_addend) as usize;
            let hct = hcts[hue];
            let temp = self.relative_temperature(hct);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired_total_temp_delta = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_temp_delta;
            let mut index_addend = 1;
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired_total_temp_delta = (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_temp_delta;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;
            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let mut answers = vec![self.input];
        let ccw_count = (count as isize - 1) / 2;
        for i in 1..=ccw_count {
            let index = (-i).rem_euclid(all_colors.len() as isize) as usize;
            answers.insert(0, all_colors[index]);
        }
        let cw_count = count as isize - ccw_count - 1;
        for i in 1..=cw_count {
            let index = i.rem_euclid(all_colors.len() as isize) as usize;
            answers.push(all_colors[index]);
        }
        answers
    }

    fn find_complement(&self) -> Hct {
        let (coldest, warmest) = self.extremes();
        let coldest_hue = coldest.hue();
        let coldest_temp = Self::raw_temperature(coldest);
        let warmest_hue = warmest.hue();
        let warmest_temp = Self::raw_temperature(warmest);
        let range = warmest_temp - coldest_temp;
        let start_on_coldest_side = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let start_hue = if start_on_coldest_side {
            warmest_hue
        } else {
            coldest_hue
        };
        let end_hue = if start_on_coldest_side {
            coldest_hue
        } else {
            warmest_hue
        };

        let hcts = self.hcts_by_hue();
        let complement_relative_temp = 1.0 - self.input_relative_temperature();
        let mut smallest_error = 1000.0;
        let mut answer = hcts[self.input.hue().round() as usize];
        // Walk the section of the ring opposite the input and keep the
        // color whose relative temperature is closest to the inverse of
        // the input's.
        for hue_addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + hue_addend as f64);
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let possible = hcts[hue.round() as usize];
            let relative_temp = (Self::raw_temperature(possible) - coldest_temp) / range;
            let error = (complement_relative_temp - relative_temp).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = possible;
            }
        }
        answer
    }

    /// Colors at every integral hue from 0 to 360 at the input's
    /// chroma and tone.
    fn hcts_by_hue(&self) -> &[Hct] {
        self.hcts_by_hue.get_or_init(|| {
            (0..=360)
                .map(|hue| Hct::from(hue as f64, self.input.chroma(), self.input.tone()))
                .collect()
        })
    }

    /// The coldest and warmest colors among the hue ring and the input.
    fn extremes(&self) -> (Hct, Hct) {
        *self.extremes.get_or_init(|| {
            let mut coldest = self.input;
            let mut coldest_temp = Self::raw_temperature(self.input);
            let mut warmest = self.input;
            let mut warmest_temp = coldest_temp;
            for &hct in self.hcts_by_hue() {
                let temp = Self::raw_temperature(hct);
                if temp < coldest_temp {
                    coldest = hct;
                    coldest_temp = temp;
                }
                if temp > warmest_temp {
                    warmest = hct;
                    warmest_temp = temp;
                }
            }
            (coldest, warmest)
        })
    }
}

/// Whether `angle` lies on the arc from `a` to `b`, inclusive, walking
/// clockwise and wrapping through 0 when `a > b`.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_temperature() {
        let blue = TemperatureCache::raw_temperature(Hct::from_argb(0xff0000ff));
        assert!((blue - -1.393).abs() < 0.001);

        let red = TemperatureCache::raw_temperature(Hct::from_argb(0xffff0000));
        assert!((red - 2.351).abs() < 0.001);

        let green = TemperatureCache::raw_temperature(Hct::from_argb(0xff00ff00));
        assert!((green - -0.267).abs() < 0.001);

        let white = TemperatureCache::raw_temperature(Hct::from_argb(0xffffffff));
        assert!((white - -0.5).abs() < 0.001);

        let black = TemperatureCache::raw_temperature(Hct::from_argb(0xff000000));
        assert!((black - -0.5).abs() < 0.001);
    }

    #[test]
    fn test_relative_temperature() {
        let blue = TemperatureCache::new(Hct::from_argb(0xff0000ff));
        assert!((blue.input_relative_temperature() - 0.0).abs() < 0.001);

        let red = TemperatureCache::new(Hct::from_argb(0xffff0000));
        assert!((red.input_relative_temperature() - 1.0).abs() < 0.001);

        let green = TemperatureCache::new(Hct::from_argb(0xff00ff00));
        assert!((green.input_relative_temperature() - 0.467).abs() < 0.001);

        let white = TemperatureCache::new(Hct::from_argb(0xffffffff));
        assert!((white.input_relative_temperature() - 0.5).abs() < 0.001);

        let black = TemperatureCache::new(Hct::from_argb(0xff000000));
        assert!((black.input_relative_temperature() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_complement() {
        let blue = TemperatureCache::new(Hct::from_argb(0xff0000ff));
        assert_eq!(blue.complement().to_argb(), 0xff9d0002);

        let red = TemperatureCache::new(Hct::from_argb(0xffff0000));
        assert_eq!(red.complement().to_argb(), 0xff007bfc);

        let green = TemperatureCache::new(Hct::from_argb(0xff00ff00));
        assert_eq!(green.complement().to_argb(), 0xffffd2c9);

        let white = TemperatureCache::new(Hct::from_argb(0xffffffff));
        assert_eq!(white.complement().to_argb(), 0xffffffff);

        let black = TemperatureCache::new(Hct::from_argb(0xff000000));
        assert_eq!(black.complement().to_argb(), 0xff000000);
    }

    #[test]
    fn test_analogous_blue() {
        let colors: Vec<u32> = TemperatureCache::new(Hct::from_argb(0xff0000ff))
            .analogous_colors()
            .iter()
            .map(|hct| hct.to_argb())
            .collect();
        assert_eq!(
            colors,
            vec![0xff00590c, 0xff00564e, 0xff0000ff, 0xff6700cc, 0xff81009f]
        );
    }

    #[test]
    fn test_analogous_red() {
        let colors: Vec<u32> = TemperatureCache::new(Hct::from_argb(0xffff0000))
            .analogous_colors()
            .iter()
            .map(|hct| hct.to_argb())
            .collect();
        assert_eq!(
            colors,
            vec![0xfff60082, 0xfffc004c, 0xffff0000, 0xffd95500, 0xffaf7200]
        );
    }

    #[test]
    fn test_analogous_green() {
        let colors: Vec<u32> = TemperatureCache::new(Hct::from_argb(0xff00ff00))
            .analogous_colors()
            .iter()
            .map(|hct| hct.to_argb())
            .collect();
        assert_eq!(
            colors,
            vec![0xffcee900, 0xff92f500, 0xff00ff00, 0xff00fd6f, 0xff00fab3]
        );
    }

    #[test]
    fn test_analogous_achromatic_repeats_input() {
        for argb in [0xff000000u32, 0xffffffff] {
            let colors = TemperatureCache::new(Hct::from_argb(argb)).analogous_colors();
            assert_eq!(colors.len(), 5);
            for hct in colors {
                assert_eq!(hct.to_argb(), argb);
            }
        }
    }

    #[test]
    fn test_analogous_custom_count_keeps_input_in_middle() {
        let input = Hct::from(120.0, 40.0, 50.0);
        let colors = TemperatureCache::new(input).analogous(3, 6);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1].to_argb(), input.to_argb());
    }
}
