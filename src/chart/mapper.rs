//! Data space to pixel space
//!
//! x maps left to right. y is flipped: data grows upward while pixel rows
//! grow downward. A zero pixel size or a zero data span maps values through
//! unchanged instead of dividing by zero.

use glam::{DVec2, dvec2};

use crate::errors::{Axis, ConfigError};
use crate::log;

/// Map x values into `[shift, shift + width]`
pub fn map_x(values: &[f64], xmin: f64, xmax: f64, width: f64) -> Vec<f64> {
    map_x_with(values, xmin, xmax, width, 1.0, 0.0)
}

/// [`map_x`] with a padding factor applied to `xmax` and a pixel shift
pub fn map_x_with(values: &[f64], xmin: f64, xmax: f64, width: f64, pad: f64, shift: f64) -> Vec<f64> {
    if width == 0.0 {
        log::warn!("zero pixel width; x values left unscaled");
        return values.to_vec();
    }
    let dx = (pad * xmax - xmin) / width;
    if dx == 0.0 {
        log::warn!(xmin, xmax, "zero x span; x values left unscaled");
        return values.to_vec();
    }
    values.iter().map(|v| (v - xmin) / dx + shift).collect()
}

/// Map y values into `[height, 0]`
pub fn map_y(values: &[f64], ymin: f64, ymax: f64, height: f64) -> Vec<f64> {
    map_y_with(values, ymin, ymax, height, 1.0)
}

/// [`map_y`] with a padding factor applied to `ymax`
pub fn map_y_with(values: &[f64], ymin: f64, ymax: f64, height: f64, pad: f64) -> Vec<f64> {
    if height == 0.0 {
        log::warn!("zero pixel height; y values left unscaled");
        return values.to_vec();
    }
    let dy = (pad * ymax - ymin) / height;
    if dy == 0.0 {
        log::warn!(ymin, ymax, "zero y span; y values left unscaled");
        return values.to_vec();
    }
    values.iter().map(|v| height - (v - ymin) / dy).collect()
}

/// The data-space rectangle a plot shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotExtent {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Default for PlotExtent {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        }
    }
}

impl PlotExtent {
    /// Validated extent; each max must exceed its min
    pub fn try_new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ConfigError> {
        check(Axis::X, xmin, xmax)?;
        check(Axis::Y, ymin, ymax)?;
        Ok(Self { xmin, xmax, ymin, ymax })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn contains_x(&self, v: f64) -> bool {
        (self.xmin..=self.xmax).contains(&v)
    }

    pub fn contains_y(&self, v: f64) -> bool {
        (self.ymin..=self.ymax).contains(&v)
    }
}

fn check(axis: Axis, min: f64, max: f64) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::NonFiniteExtent { axis });
    }
    if max <= min {
        return Err(ConfigError::InvalidExtent { axis, min, max });
    }
    Ok(())
}

/// A plot's extent bound to its pixel size.
///
/// Built fresh from the plot on each use, so extent changes are always seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub extent: PlotExtent,
    pub width: f64,
    pub height: f64,
}

impl CoordinateMapper {
    pub fn new(extent: PlotExtent, width: f64, height: f64) -> Self {
        Self { extent, width, height }
    }

    pub fn xs(&self, values: &[f64]) -> Vec<f64> {
        map_x(values, self.extent.xmin, self.extent.xmax, self.width)
    }

    pub fn ys(&self, values: &[f64]) -> Vec<f64> {
        map_y(values, self.extent.ymin, self.extent.ymax, self.height)
    }

    pub fn x(&self, v: f64) -> f64 {
        self.xs(&[v]).first().copied().unwrap_or(v)
    }

    pub fn y(&self, v: f64) -> f64 {
        self.ys(&[v]).first().copied().unwrap_or(v)
    }

    pub fn point(&self, p: DVec2) -> DVec2 {
        dvec2(self.x(p.x), self.y(p.y))
    }

    /// Map parallel coordinate arrays; extra values in the longer one are ignored
    pub fn points(&self, xs: &[f64], ys: &[f64]) -> Vec<DVec2> {
        self.xs(xs)
            .into_iter()
            .zip(self.ys(ys))
            .map(|(x, y)| dvec2(x, y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_point() {
        assert_eq!(map_x(&[5.0], 0.0, 10.0, 500.0), vec![250.0]);
        assert_eq!(map_y(&[50.0], 0.0, 100.0, 200.0), vec![100.0]);
    }

    #[test]
    fn y_is_flipped() {
        assert_eq!(map_y(&[0.0, 100.0], 0.0, 100.0, 200.0), vec![200.0, 0.0]);
    }

    #[test]
    fn zero_size_is_identity() {
        let values = [3.0, -7.5, 1e9];
        assert_eq!(map_x(&values, 0.0, 10.0, 0.0), values.to_vec());
        assert_eq!(map_y(&values, 0.0, 10.0, 0.0), values.to_vec());
    }

    #[test]
    fn zero_span_is_identity() {
        let values = [1.0, 2.0];
        assert_eq!(map_x(&values, 0.0, 0.0, 100.0), values.to_vec());
        assert_eq!(map_y(&values, 4.0, 4.0, 100.0), values.to_vec());
    }

    #[test]
    fn pad_and_shift() {
        assert_eq!(map_x_with(&[10.0], 0.0, 10.0, 100.0, 2.0, 5.0), vec![55.0]);
        assert_eq!(map_y_with(&[10.0], 0.0, 10.0, 100.0, 2.0), vec![50.0]);
    }

    #[test]
    fn extent_rejects_inverted_bounds() {
        assert_eq!(
            PlotExtent::try_new(0.0, 10.0, 5.0, 5.0),
            Err(ConfigError::InvalidExtent { axis: Axis::Y, min: 5.0, max: 5.0 })
        );
        assert_eq!(
            PlotExtent::try_new(f64::NAN, 1.0, 0.0, 1.0),
            Err(ConfigError::NonFiniteExtent { axis: Axis::X })
        );
    }

    #[test]
    fn mapper_sees_current_extent() {
        let mut mapper = CoordinateMapper::new(PlotExtent::default(), 100.0, 100.0);
        assert_eq!(mapper.x(0.5), 50.0);
        mapper.extent = PlotExtent::try_new(0.0, 2.0, 0.0, 1.0).unwrap();
        assert_eq!(mapper.x(0.5), 25.0);
        assert_eq!(mapper.point(dvec2(1.0, 0.25)), dvec2(50.0, 75.0));
    }
}
