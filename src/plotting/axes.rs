//! Axes (subplot) implementation.

use crate::plotting::backend::SvgBackend;
use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{AxisConfig, Bounds, GridConfig, Legend, LegendPosition, Text};
use crate::plotting::plot::{LinePlot, Plot};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{
    Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, SeriesStyle, TextAnchor,
    ThemeConfig,
};

/// A single plot area inside a figure.
#[derive(Debug)]
pub struct Axes {
    /// Position within the figure, normalized to `[0, 1]` with y pointing up
    pub position: Bounds,
    pub x_scale: Box<dyn Scale>,
    pub y_scale: Box<dyn Scale>,
    plots: Vec<Box<dyn Plot>>,
    pub title: Option<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub legend: Option<Legend>,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    /// Union of the plots' data bounds
    data_bounds: Option<Bounds>,
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
    color_index: usize,
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create an axes styled after `theme` at the given figure position.
    pub fn new(theme: ThemeConfig, position: Bounds) -> Self {
        Axes {
            position,
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            plots: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            legend: None,
            grid: GridConfig::themed(&theme),
            x_axis: AxisConfig::themed(&theme),
            y_axis: AxisConfig::themed(&theme),
            data_bounds: None,
            x_lim: None,
            y_lim: None,
            color_index: 0,
            theme,
        }
    }

    /// Start a line plot of `y` against `x`.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            linewidth: None,
            linestyle: None,
            marker: None,
            markersize: None,
            markevery: None,
            label: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, self.theme.title_style.clone()));
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, self.theme.label_style.clone()));
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, self.theme.label_style.clone()));
        self
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_lim = Some((min, max));
        self
    }

    /// Enable or disable grid lines at the major ticks.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Show the legend at its current (default top right) position.
    pub fn legend(&mut self) -> &mut Self {
        let theme = &self.theme;
        self.legend
            .get_or_insert_with(|| Legend::themed(theme))
            .visible = true;
        self
    }

    pub fn legend_at(&mut self, position: LegendPosition) -> &mut Self {
        self.legend();
        if let Some(ref mut legend) = self.legend {
            legend.position = position;
        }
        self
    }

    /// Number of plots added so far.
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    pub(crate) fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&plot_bounds),
                None => self.data_bounds = Some(plot_bounds),
            }
        }

        // collect entries even while hidden so a later legend() call sees them
        if let Some(entry) = plot.legend_entry() {
            let theme = &self.theme;
            let legend = self.legend.get_or_insert_with(|| {
                let mut legend = Legend::themed(theme);
                legend.visible = false;
                legend
            });
            legend.add_entry(entry);
        }

        self.plots.push(plot);
    }

    /// Next color of the theme's color cycle.
    pub(crate) fn next_color(&mut self) -> Color {
        let cycle = &self.theme.color_cycle;
        let color = if cycle.is_empty() {
            Color::default()
        } else {
            cycle[self.color_index % cycle.len()].clone()
        };
        self.color_index += 1;
        color
    }

    fn x_range(&self) -> (f64, f64) {
        match (self.x_lim, self.data_bounds) {
            (Some(lim), _) => lim,
            (None, Some(b)) => (b.x_min, b.x_max),
            (None, None) => (0.0, 1.0),
        }
    }

    fn y_range(&self) -> (f64, f64) {
        match (self.y_lim, self.data_bounds) {
            (Some(lim), _) => lim,
            (None, Some(b)) => (b.y_min, b.y_max),
            (None, None) => (0.0, 1.0),
        }
    }

    /// Data bounds used for drawing: explicit limits as given, otherwise
    /// the data extent padded by 5%.
    pub fn view_bounds(&self) -> Bounds {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        let mut bounds = Bounds::new(x_min, x_max, y_min, y_max);

        if bounds.width() == 0.0 {
            bounds.x_min -= 0.5;
            bounds.x_max += 0.5;
        }
        if bounds.height() == 0.0 {
            bounds.y_min -= 0.5;
            bounds.y_max += 0.5;
        }

        let padded = bounds.pad(0.05);
        Bounds::new(
            if self.x_lim.is_some() { bounds.x_min } else { padded.x_min },
            if self.x_lim.is_some() { bounds.x_max } else { padded.x_max },
            if self.y_lim.is_some() { bounds.y_min } else { padded.y_min },
            if self.y_lim.is_some() { bounds.y_max } else { padded.y_max },
        )
    }

    /// Render into `backend`. `clip_id` must be unique within the document.
    pub fn render(&mut self, backend: &mut SvgBackend, clip_id: &str) {
        let (fig_w, fig_h) = (backend.width, backend.height);
        let pixel_bounds = Bounds::new(
            self.position.x_min * fig_w,
            self.position.x_max * fig_w,
            (1.0 - self.position.y_max) * fig_h,
            (1.0 - self.position.y_min) * fig_h,
        );

        let data_bounds = self.view_bounds();
        self.x_scale.set_range(data_bounds.x_min, data_bounds.x_max);
        self.y_scale.set_range(data_bounds.y_min, data_bounds.y_max);

        backend.draw_rect(
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            &FillStyle::new(self.theme.plot_background.clone()),
        );

        if self.grid.visible {
            self.render_grid(backend, &pixel_bounds);
        }

        backend.start_clip(
            clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
        );
        for plot in &self.plots {
            backend.add_content(plot.render_svg(&data_bounds, &pixel_bounds));
        }
        backend.end_clip();

        self.render_axes(backend, &pixel_bounds);
        self.render_labels(backend, &pixel_bounds);

        if let Some(ref legend) = self.legend {
            if legend.visible && !legend.entries.is_empty() {
                render_legend(backend, legend, &pixel_bounds);
            }
        }
    }

    fn x_ticks(&self) -> Vec<f64> {
        self.x_axis
            .tick_positions
            .clone()
            .unwrap_or_else(|| self.x_scale.ticks(self.x_axis.num_ticks))
    }

    fn y_ticks(&self) -> Vec<f64> {
        self.y_axis
            .tick_positions
            .clone()
            .unwrap_or_else(|| self.y_scale.ticks(self.y_axis.num_ticks))
    }

    fn tick_x(&self, tick: f64, pixel: &Bounds) -> f64 {
        pixel.x_min + self.x_scale.transform(tick) * pixel.width()
    }

    fn tick_y(&self, tick: f64, pixel: &Bounds) -> f64 {
        pixel.y_max - self.y_scale.transform(tick) * pixel.height()
    }

    fn render_grid(&self, backend: &mut SvgBackend, pixel: &Bounds) {
        let style = &self.grid.line_style;
        if self.grid.show_x {
            for tick in self.x_ticks() {
                let px = self.tick_x(tick, pixel);
                backend.draw_line((px, pixel.y_min), (px, pixel.y_max), style);
            }
        }
        if self.grid.show_y {
            for tick in self.y_ticks() {
                let py = self.tick_y(tick, pixel);
                backend.draw_line((pixel.x_min, py), (pixel.x_max, py), style);
            }
        }
    }

    fn render_axes(&self, backend: &mut SvgBackend, pixel: &Bounds) {
        if self.x_axis.visible {
            let axis = &self.x_axis;
            backend.draw_line((pixel.x_min, pixel.y_max), (pixel.x_max, pixel.y_max), &axis.line_style);
            // labels hang below the tick, so shift by roughly one cap height
            let label_y = pixel.y_max
                + axis.tick_length
                + axis.tick_padding
                + axis.tick_label_style.font_size * 0.8;
            for tick in self.x_ticks() {
                let px = self.tick_x(tick, pixel);
                backend.draw_line((px, pixel.y_max), (px, pixel.y_max + axis.tick_length), &axis.line_style);
                let label = Text::new(axis.format_tick(tick), axis.tick_label_style.clone());
                backend.draw_text(&label.placed(px, label_y, TextAnchor::Middle));
            }
        }

        if self.y_axis.visible {
            let axis = &self.y_axis;
            backend.draw_line((pixel.x_min, pixel.y_min), (pixel.x_min, pixel.y_max), &axis.line_style);
            let label_x = pixel.x_min - axis.tick_length - axis.tick_padding;
            for tick in self.y_ticks() {
                let py = self.tick_y(tick, pixel);
                backend.draw_line((pixel.x_min - axis.tick_length, py), (pixel.x_min, py), &axis.line_style);
                let label = Text::new(axis.format_tick(tick), axis.tick_label_style.clone());
                let baseline = py + axis.tick_label_style.font_size * 0.35;
                backend.draw_text(&label.placed(label_x, baseline, TextAnchor::End));
            }
        }
    }

    fn render_labels(&self, backend: &mut SvgBackend, pixel: &Bounds) {
        let center_x = (pixel.x_min + pixel.x_max) / 2.0;
        let center_y = (pixel.y_min + pixel.y_max) / 2.0;

        if let Some(ref title) = self.title {
            let y = pixel.y_min - title.style.font_size * 0.6;
            backend.draw_text(&title.placed(center_x, y, TextAnchor::Middle));
        }

        if let Some(ref label) = self.x_label {
            let axis = &self.x_axis;
            let y = pixel.y_max
                + axis.tick_length
                + axis.tick_padding
                + axis.tick_label_style.font_size
                + label.style.font_size * 1.2;
            backend.draw_text(&label.placed(center_x, y, TextAnchor::Middle));
        }

        if let Some(ref label) = self.y_label {
            let axis = &self.y_axis;
            let widest = self
                .y_ticks()
                .iter()
                .map(|t| axis.format_tick(*t).chars().count())
                .max()
                .unwrap_or(1) as f64;
            let x = pixel.x_min
                - axis.tick_length
                - axis.tick_padding
                - widest * axis.tick_label_style.font_size * 0.6
                - label.style.font_size * 0.6;
            let mut placed = label.placed(x, center_y, TextAnchor::Middle);
            placed.style.rotation = -90.0;
            backend.draw_text(&placed);
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new(ThemeConfig::default(), Bounds::new(0.125, 0.9, 0.11, 0.88))
    }
}

fn render_legend(backend: &mut SvgBackend, legend: &Legend, pixel: &Bounds) {
    let (width, height) = legend.frame_size();
    let inset = legend.padding;

    let lx = match legend.position {
        LegendPosition::TopLeft | LegendPosition::BottomLeft => pixel.x_min + inset,
        LegendPosition::TopRight | LegendPosition::BottomRight => pixel.x_max - inset - width,
    };
    let ly = match legend.position {
        LegendPosition::TopLeft | LegendPosition::TopRight => pixel.y_min + inset,
        LegendPosition::BottomLeft | LegendPosition::BottomRight => pixel.y_max - inset - height,
    };

    backend.draw_rect(lx, ly, width, height, &legend.background);

    let row = legend.row_height();
    let x1 = lx + legend.padding;
    let x2 = x1 + legend.line_length;
    for (i, entry) in legend.entries.iter().enumerate() {
        let ey = ly + legend.padding + (i as f64 + 0.5) * row;

        if let Some(ref style) = entry.line_style {
            backend.draw_line((x1, ey), (x2, ey), style);
        }
        if let Some(ref marker) = entry.marker_style {
            backend.add_content(marker.render_at((x1 + x2) / 2.0, ey));
        }

        let label = Text::new(entry.label.clone(), legend.text_style.clone());
        let baseline = ey + legend.text_style.font_size * 0.35;
        backend.draw_text(&label.placed(x2 + legend.label_gap, baseline, TextAnchor::Start));
    }
}

/// Builder for a line plot; finish with [`LinePlotBuilder::build`].
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    linewidth: Option<f64>,
    linestyle: Option<DashPattern>,
    marker: Option<Marker>,
    markersize: Option<f64>,
    markevery: Option<usize>,
    label: Option<String>,
}

impl<'a> LinePlotBuilder<'a> {
    /// Apply a cycled series style: color, marker, dash pattern and
    /// marker stride.
    pub fn style(mut self, style: &SeriesStyle) -> Self {
        self.color = Some(style.color.clone());
        self.marker = Some(style.marker.clone());
        self.linestyle = Some(style.pattern.clone());
        self.markevery = style.stride;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Line width in points.
    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.linestyle = Some(style);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Marker size in points.
    pub fn markersize(mut self, size: f64) -> Self {
        self.markersize = Some(size);
        self
    }

    pub fn markevery(mut self, every: usize) -> Self {
        self.markevery = Some(every);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let axes = self.axes;
        let color = match self.color {
            Some(color) => color,
            None => axes.next_color(),
        };
        let theme = &axes.theme;

        let mut plot = LinePlot::new(self.x, self.y);
        plot.line_style = LineStyle::new()
            .color(color.clone())
            .width(self.linewidth.map_or(theme.line_width, |w| theme.pt(w)))
            .dash(self.linestyle.unwrap_or_default());

        plot.marker_style = self
            .marker
            .filter(|m| *m != Marker::None)
            .map(|marker| MarkerStyle {
                marker,
                size: self.markersize.map_or(theme.marker_size, |s| theme.pt(s)),
                fill: color.clone(),
                edge_color: color,
                edge_width: theme.marker_edge_width,
            });
        plot.markevery = self.markevery;
        plot.label = self.label;

        axes.add_plot(Box::new(plot));
        axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::StyleCycler;

    #[test]
    fn test_unstyled_plots_take_cycle_colors() {
        let mut ax = Axes::default();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.plot(vec![0.0, 1.0], vec![1.0, 0.0]).build();
        assert_eq!(ax.plot_count(), 2);
        assert_eq!(ax.next_color(), Color::named("tab:green"));
    }

    #[test]
    fn test_view_bounds_padding_and_limits() {
        let mut ax = Axes::default();
        ax.plot(vec![0.0, 10.0], vec![-1.0, 1.0]).build();
        let b = ax.view_bounds();
        assert_eq!((b.x_min, b.x_max), (-0.5, 10.5));
        ax.set_xlim(0.0, 5.0);
        let b = ax.view_bounds();
        assert_eq!((b.x_min, b.x_max), (0.0, 5.0));
    }

    #[test]
    fn test_legend_collects_labels_while_hidden() {
        let mut ax = Axes::default();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).label("a").build();
        assert!(!ax.legend.as_ref().unwrap().visible);
        ax.legend_at(LegendPosition::BottomLeft);
        let legend = ax.legend.as_ref().unwrap();
        assert!(legend.visible);
        assert_eq!(legend.entries.len(), 1);
        assert_eq!(legend.position, LegendPosition::BottomLeft);
    }

    #[test]
    fn test_series_style_applied() {
        let mut styles = StyleCycler::new();
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let style = styles.next_style_with(Some(x.len()), 10);

        let mut ax = Axes::default();
        ax.plot(&x, &x).style(&style).label("s").build();
        ax.legend();

        let mut backend = SvgBackend::new(1200.0, 900.0);
        ax.render(&mut backend, "clip0");
        let svg = backend.render();
        // the point marker is a circle: markers at 0, 3, ..., 27 plus one in the legend
        assert_eq!(svg.matches("<circle").count(), 11);
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains(">s</text>"));
    }
}
