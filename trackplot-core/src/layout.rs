use crate::annotation::{place_annotations, Annotation, AnnotationStack};
use crate::axis::{plan_axes, style_axes, AxisDefinition};
use crate::colors::ColorAssignment;
use crate::diagnostics::LayoutDiagnostics;
use crate::domain::{self, TrackDomain};
use crate::error::LayoutError;
use crate::lines::{header_lines, main_lines, Shape};
use crate::settings::{normalize_layout_settings, LayoutSettings};
use definition::{
    validate_tracks, DepthExtent, PlotDefinition, RangeTable, TrackAssignment, TrackRatios,
};
use palette::{ColorSource, PaletteConfig, PaletteFactory};
use serde::Serialize;

/// Everything one layout build reads. Nothing here is modified.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub tracks: &'a TrackAssignment,
    pub ratios: &'a TrackRatios,
    pub ranges: &'a RangeTable,
    pub depth: Option<DepthExtent>,
    pub grid_interval: Option<f64>,
}

impl<'a> LayoutRequest<'a> {
    pub fn new(tracks: &'a TrackAssignment, ratios: &'a TrackRatios, ranges: &'a RangeTable) -> Self {
        Self {
            tracks,
            ratios,
            ranges,
            depth: None,
            grid_interval: None,
        }
    }

    pub fn from_definition(definition: &'a PlotDefinition) -> Self {
        Self::new(&definition.tracks, &definition.ratios, &definition.ranges)
            .with_grid_interval(definition.grid_interval)
    }

    pub fn with_depth(mut self, depth: Option<DepthExtent>) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_grid_interval(mut self, interval: Option<f64>) -> Self {
        self.grid_interval = interval;
        self
    }
}

/// The vertical depth axis shared by every track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthAxis {
    pub id: String,
    pub domain: [f64; 2],
    /// `[max, min]` so depth increases downward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub domains: Vec<TrackDomain>,
    pub axes: Vec<AxisDefinition>,
    pub depth_axis: DepthAxis,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    pub stacks: Vec<AnnotationStack>,
}

impl Layout {
    pub fn axis(&self, id: &str) -> Option<&AxisDefinition> {
        self.axes.iter().find(|a| a.id == id)
    }

    pub fn domain(&self, key: &str) -> Option<&TrackDomain> {
        self.domains.iter().find(|d| d.key == key)
    }

    pub fn stack(&self, key: &str) -> Option<&AnnotationStack> {
        self.stacks.iter().find(|s| s.track == key)
    }

    pub fn overlay_count(&self) -> usize {
        self.axes.iter().filter(|a| a.is_overlay()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOutput {
    pub layout: Layout,
    pub colors: ColorAssignment,
    pub diagnostics: LayoutDiagnostics,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutComposer {
    settings: LayoutSettings,
}

impl LayoutComposer {
    pub fn new(settings: LayoutSettings) -> Result<Self, LayoutError> {
        Ok(Self {
            settings: normalize_layout_settings(settings)?,
        })
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Same as [`compose`](Self::compose) with a color source built from `palette`.
    pub fn compose_with_palette(
        &self,
        request: &LayoutRequest<'_>,
        palette: &PaletteConfig,
    ) -> Result<LayoutOutput, LayoutError> {
        let mut source = PaletteFactory::create(palette)?;
        self.compose(request, source.as_mut())
    }

    /// Builds the full layout. Configuration problems are errors; missing
    /// ranges, unusable log ranges, overfull headers and skipped gridlines
    /// only add diagnostics.
    pub fn compose(
        &self,
        request: &LayoutRequest<'_>,
        source: &mut dyn ColorSource,
    ) -> Result<LayoutOutput, LayoutError> {
        let settings = &self.settings;
        let ratios = validate_tracks(request.tracks, request.ratios)?;
        let domains: Vec<TrackDomain> = domain::compute(&ratios)?
            .into_iter()
            .zip(request.tracks.keys())
            .map(|([start, end], key)| TrackDomain {
                key: key.to_string(),
                start,
                end,
            })
            .collect();

        let colors = ColorAssignment::build(request.tracks, source);
        let slots = plan_axes(request.tracks, &domains, &colors, settings);
        let styled = style_axes(&slots, request.ranges, settings);
        let header = place_annotations(&slots, &domains, request.ranges, settings);

        let mut shapes = header_lines(&domains, settings);
        let mut main = main_lines(&domains, request.depth, request.grid_interval, settings);
        shapes.append(&mut main.shapes);

        let mut diagnostics = LayoutDiagnostics::default();
        diagnostics.extend(styled.diagnostics);
        diagnostics.extend(header.diagnostics);
        diagnostics.extend(main.diagnostics);

        let depth_axis = DepthAxis {
            id: "y1".to_string(),
            domain: [0.0, settings.header_split],
            range: request.depth.map(|extent| [extent.max, extent.min]),
            show_grid: !main.grid_replaced,
        };

        log::debug!(
            "composed layout: {} tracks, {} axes, {} shapes, {} annotations",
            domains.len(),
            styled.axes.len(),
            shapes.len(),
            header.annotations.len()
        );

        Ok(LayoutOutput {
            layout: Layout {
                domains,
                axes: styled.axes,
                depth_axis,
                shapes,
                annotations: header.annotations,
                stacks: header.stacks,
            },
            colors,
            diagnostics,
        })
    }
}
