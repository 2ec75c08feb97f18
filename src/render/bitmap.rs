use std::fmt::Display;
use std::path::Path;

use log::debug;
use plotters::prelude::*;

use super::layout::{axis_range, segments};
use super::{viewer, ChartSpec, RenderError, Renderer};

const FONT: &str = "sans-serif";
/// matplotlib's first cycle color, so both backends look alike
const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

/// PNG renderer built on `plotters`
#[derive(Debug, Clone, Default)]
pub struct BitmapRenderer {
    _private: (),
}

impl BitmapRenderer {
    /// Create a bitmap renderer
    pub fn new() -> Self {
        Self::default()
    }
}

fn plot_error(e: impl Display) -> RenderError {
    RenderError::PlotError(e.to_string())
}

impl Renderer for BitmapRenderer {
    fn name(&self) -> &'static str {
        "bitmap"
    }

    fn render(
        &self,
        second: &[f64],
        rate_mbps: &[f64],
        chart: &ChartSpec,
        output: &Path,
    ) -> Result<(), RenderError> {
        let lines = segments(second, rate_mbps);
        let x_range = axis_range(lines.iter().flatten().map(|&(x, _)| x));
        let y_range = axis_range(lines.iter().flatten().map(|&(_, y)| y));
        debug!(
            "Drawing {} line segment(s), x {:?}, y {:?}",
            lines.len(),
            x_range,
            y_range
        );

        let root = BitMapBackend::new(output, chart.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT, 24))
            .margin(12)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_error)?;

        ctx.configure_mesh()
            .axis_desc_style((FONT, 15))
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .draw()
            .map_err(plot_error)?;

        for line in lines {
            ctx.draw_series(LineSeries::new(line, LINE_COLOR.stroke_width(2)))
                .map_err(plot_error)?;
        }

        root.present().map_err(plot_error)?;
        Ok(())
    }

    fn present(&self, output: &Path) -> Result<(), RenderError> {
        viewer::open(output)
    }
}
