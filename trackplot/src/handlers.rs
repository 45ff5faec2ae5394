use crate::commands::*;
use crate::output::*;
use definition::{DepthExtent, DepthRow, PlotDefinition};
use palette::{ColorSource, PaletteConfig, PaletteFactory, Rgb};
use serde_json::json;
use std::path::Path;
use trackplot_core::{
    encode, load_layout_settings_file, presets, LayoutComposer, LayoutRequest, LayoutSettings,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn handle_command(command: Commands) -> CliResult {
    match command {
        Commands::Layout(args) => handle_layout(args),
        Commands::Encode { input } => handle_encode(&input),
        Commands::Palette {
            count,
            seed,
            pastel,
        } => handle_palette(count, seed, pastel),
        Commands::Presets { json_query } => handle_presets(json_query),
    }
}

fn load_definition(args: &LayoutArgs) -> Result<PlotDefinition, Box<dyn std::error::Error>> {
    if let Some(path) = &args.definition {
        let definition = PlotDefinition::load_from_file(path).map_err(|e| {
            format!("Failed to load plot definition '{}': {e}", path.display())
        })?;
        return Ok(definition);
    }
    if args.preset.is_empty() {
        return Err("either --definition or --preset is required".into());
    }
    Ok(presets::plot_definition("presets", &args.preset)?)
}

fn load_depth(path: &Path) -> Result<Option<DepthExtent>, Box<dyn std::error::Error>> {
    let data = std::fs::read(path)
        .map_err(|e| format!("Failed to read depth file '{}': {e}", path.display()))?;
    let rows: Vec<DepthRow> = serde_json::from_slice(&data)
        .map_err(|e| format!("Failed to parse depth file '{}': {e}", path.display()))?;
    let extent = DepthExtent::from_rows(&rows);
    log::debug!("{} depth rows, extent {extent:?}", rows.len());
    Ok(extent)
}

fn handle_layout(args: LayoutArgs) -> CliResult {
    let definition = load_definition(&args)?;
    let settings = match &args.settings {
        Some(path) => load_layout_settings_file(path)?,
        None => LayoutSettings::default(),
    };
    let depth = match &args.depth {
        Some(path) => load_depth(path)?,
        None => None,
    };

    let composer = LayoutComposer::new(settings)?;
    let mut request = LayoutRequest::from_definition(&definition).with_depth(depth);
    if args.grid.is_some() {
        request = request.with_grid_interval(args.grid);
    }
    let palette = PaletteConfig {
        seed: args.seed,
        ..PaletteConfig::default()
    };
    let output = composer.compose_with_palette(&request, &palette)?;

    if args.plotly {
        print_json(&output.layout.to_plotly_json())?;
    } else {
        print_json(&serde_json::to_value(&output)?)?;
    }
    Ok(())
}

fn handle_encode(input: &Path) -> CliResult {
    let data = std::fs::read(input)
        .map_err(|e| format!("Failed to read column file '{}': {e}", input.display()))?;
    let column: Vec<Option<String>> = serde_json::from_slice(&data)
        .map_err(|e| format!("Failed to parse column file '{}': {e}", input.display()))?;
    let encoded = encode(&column);
    print_json(&serde_json::to_value(&encoded)?)?;
    Ok(())
}

fn handle_palette(count: usize, seed: Option<u64>, pastel: f64) -> CliResult {
    let config = PaletteConfig {
        pastel_factor: pastel,
        seed,
        ..PaletteConfig::default()
    };
    let mut source = PaletteFactory::create(&config)?;
    let mut colors: Vec<Rgb> = Vec::with_capacity(count);
    for _ in 0..count {
        let color = source.next_color(&colors);
        colors.push(color);
    }
    for color in &colors {
        println!("{}", color.to_hex());
    }
    Ok(())
}

fn handle_presets(json_query: bool) -> CliResult {
    let catalog = presets::presets();
    if !json_query {
        print_preset_list(catalog);
        return Ok(());
    }
    let entries: Vec<serde_json::Value> = catalog
        .iter()
        .map(|preset| {
            json!({
                "key": preset.key,
                "ratio": preset.ratio,
                "log": preset.log,
                "ranges": preset.ranges,
                "curves": preset.curves.iter().map(|c| json!({
                    "name": c.name,
                    "unit": c.unit,
                    "color": c.color,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();
    print_json(&serde_json::Value::Array(entries))?;
    Ok(())
}
