//! Multi-stop linear color gradients.

use crate::color::Color;

/// A gradient over two or more color stops.
///
/// The characters of a run are split into `stops - 1` regions of equal
/// fractional width. The first character gets the first stop and the last
/// character lands exactly on the last stop, so neighbouring regions share
/// their boundary color.
///
/// # Examples
///
/// ```
/// use legacy_text::{Color, Gradient};
///
/// let gradient = Gradient::new(vec![Color::rgb(0, 0, 255), Color::rgb(255, 0, 0)]).unwrap();
/// let colors = gradient.colors(3);
/// assert_eq!(colors[0], Color::rgb(0, 0, 255));
/// assert_eq!(colors[2], Color::rgb(255, 0, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Create a gradient. Returns `None` with fewer than two stops.
    pub fn new(stops: Vec<Color>) -> Option<Self> {
        (stops.len() >= 2).then_some(Self { stops })
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// One color per character for a run of `length` characters.
    pub fn colors(&self, length: usize) -> Vec<Color> {
        if length == 0 {
            return Vec::new();
        }
        if length == 1 {
            return vec![self.stops[0]];
        }

        let regions = self.stops.len() - 1;
        let per_region = (length - 1) as f32 / regions as f32;

        (0..length)
            .map(|i| {
                if i == length - 1 {
                    return self.stops[regions];
                }
                let i = i as f32;
                let region = (i / per_region).floor() as usize;
                if region >= regions {
                    return self.stops[regions];
                }
                let fraction = (i - per_region * region as f32) / per_region;
                self.stops[region].lerp(&self.stops[region + 1], fraction)
            })
            .collect()
    }
}
