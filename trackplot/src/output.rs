use trackplot_core::presets::Preset;

pub fn print_info(message: &str) {
    eprintln!("[trackplot][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[trackplot][ERROR]: {message}");
}

pub fn print_json(value: &serde_json::Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_preset_list(presets: &[Preset]) {
    if presets.is_empty() {
        print_info("No presets available");
        return;
    }
    print_info("List of preset tracks:");
    for preset in presets {
        let curves: Vec<&str> = preset.curves.iter().map(|c| c.name).collect();
        let scale = if preset.log { "log" } else { "linear" };
        println!(
            "{} (ratio {}, {}) {}",
            preset.key,
            preset.ratio,
            scale,
            curves.join(", ")
        );
    }
}
