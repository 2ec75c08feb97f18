use std::path::Path;

use log::debug;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::layout::truncate;
use super::{ChartSpec, RenderError, Renderer};

/// Pixels per inch used to turn [`ChartSpec::size`] into a figure size
const DPI: u32 = 100;

/// Thin wrapper around the `matplotlib.pyplot` module
struct PyPlot<'py> {
    py: Python<'py>,
    plt: Bound<'py, PyModule>,
}

impl<'py> PyPlot<'py> {
    fn new(py: Python<'py>) -> PyResult<Self> {
        let plt = py.import_bound("matplotlib.pyplot")?;
        Ok(Self { py, plt })
    }

    fn figure(&self, (width, height): (u32, u32)) -> PyResult<()> {
        let kwargs = PyDict::new_bound(self.py);
        kwargs.set_item(
            "figsize",
            (
                f64::from(width) / f64::from(DPI),
                f64::from(height) / f64::from(DPI),
            ),
        )?;
        kwargs.set_item("dpi", DPI)?;
        self.plt.call_method("figure", (), Some(&kwargs))?;
        Ok(())
    }

    fn plot(&self, x: Vec<f64>, y: Vec<f64>) -> PyResult<()> {
        self.plt.call_method1("plot", (x, y))?;
        Ok(())
    }

    fn title(&self, title: &str) -> PyResult<()> {
        self.plt.call_method1("title", (title,))?;
        Ok(())
    }

    fn xlabel(&self, label: &str) -> PyResult<()> {
        self.plt.call_method1("xlabel", (label,))?;
        Ok(())
    }

    fn ylabel(&self, label: &str) -> PyResult<()> {
        self.plt.call_method1("ylabel", (label,))?;
        Ok(())
    }

    fn savefig(&self, path: &str) -> PyResult<()> {
        let kwargs = PyDict::new_bound(self.py);
        kwargs.set_item("format", "png")?;
        self.plt.call_method("savefig", (path,), Some(&kwargs))?;
        Ok(())
    }

    fn show(&self) -> PyResult<()> {
        self.plt.call_method0("show")?;
        Ok(())
    }

    fn close_all(&self) -> PyResult<()> {
        self.plt.call_method1("close", ("all",))?;
        Ok(())
    }
}

/// PNG renderer driving matplotlib through an embedded Python interpreter.
///
/// The figure stays open after [`Renderer::render`] so that
/// [`Renderer::present`] can show it; the next render discards it.
#[derive(Debug, Clone, Default)]
pub struct MatplotlibRenderer {
    _private: (),
}

impl MatplotlibRenderer {
    /// Create a matplotlib renderer
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MatplotlibRenderer {
    fn name(&self) -> &'static str {
        "matplotlib"
    }

    fn render(
        &self,
        second: &[f64],
        rate_mbps: &[f64],
        chart: &ChartSpec,
        output: &Path,
    ) -> Result<(), RenderError> {
        let (x, y) = truncate(second, rate_mbps);
        let path = output.to_string_lossy();

        Python::with_gil(|py| -> PyResult<()> {
            let plt = PyPlot::new(py)?;
            plt.close_all()?;
            plt.figure(chart.size)?;
            plt.plot(x.to_vec(), y.to_vec())?;
            plt.xlabel(&chart.x_label)?;
            plt.ylabel(&chart.y_label)?;
            plt.title(&chart.title)?;
            debug!("matplotlib: saving {}", path);
            plt.savefig(&path)
        })?;
        Ok(())
    }

    fn present(&self, _output: &Path) -> Result<(), RenderError> {
        Python::with_gil(|py| -> PyResult<()> {
            let plt = PyPlot::new(py)?;
            plt.show()?;
            plt.close_all()
        })?;
        Ok(())
    }
}
