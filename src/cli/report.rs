//! Human-readable rendering of parsed records

use colored::*;
use std::fmt;

use crate::app::models::{
    DatasetInfo, GlobalAttributes, GridDescription, NumericArray, ParameterRow, StructuredOutput,
    VariableAttributes, VariableListEntry, ZAxisDescription,
};

/// Values shown before a long array is elided
const ARRAY_PREVIEW: usize = 8;

/// Render a record as an indented, colored summary
pub fn render_human(output: &StructuredOutput) -> String {
    HumanReport(output).to_string()
}

/// Display adapter printing a record as an indented summary
pub struct HumanReport<'a>(pub &'a StructuredOutput);

impl fmt::Display for HumanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.kind().bright_green().bold())?;

        match self.0 {
            StructuredOutput::Grid(grids) => render_grids(f, grids),
            StructuredOutput::ZAxis(zaxes) => render_zaxes(f, zaxes),
            StructuredOutput::Dataset(info) => render_dataset(f, info),
            StructuredOutput::GlobalAttributes(attributes) => render_global(f, attributes),
            StructuredOutput::VariableAttributes(attributes) => {
                render_variable_attributes(f, attributes)
            }
            StructuredOutput::Parameters(rows) => render_parameters(f, rows),
            StructuredOutput::Vct(array) => render_array(f, array),
            StructuredOutput::VariableList(entries) => render_variable_list(f, entries),
        }
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn render_grids(f: &mut fmt::Formatter<'_>, description: &GridDescription) -> fmt::Result {
    for (i, grid) in description.grids.iter().enumerate() {
        let id = grid.grid_id.map_or(i + 1, |id| id as usize);
        writeln!(
            f,
            "  {} {} {}x{} ({} points)",
            format!("grid {}:", id).bright_yellow().bold(),
            or_unknown(grid.gridtype.as_deref()).bright_cyan(),
            or_unknown(grid.xsize),
            or_unknown(grid.ysize),
            or_unknown(grid.gridsize)
        )?;
        if let Some((start, end)) = grid.lon_range() {
            writeln!(f, "    x: {} to {}", start, end)?;
        }
        if let Some((start, end)) = grid.lat_range() {
            writeln!(f, "    y: {} to {}", start, end)?;
        }
    }
    Ok(())
}

fn render_zaxes(f: &mut fmt::Formatter<'_>, description: &ZAxisDescription) -> fmt::Result {
    for (i, zaxis) in description.zaxes.iter().enumerate() {
        let id = zaxis.zaxis_id.map_or(i + 1, |id| id as usize);
        writeln!(
            f,
            "  {} {} with {} levels {}",
            format!("zaxis {}:", id).bright_yellow().bold(),
            or_unknown(zaxis.zaxistype.as_deref()).bright_cyan(),
            or_unknown(zaxis.size),
            or_unknown(zaxis.units.as_deref()).bright_black()
        )?;
        if let Some((min, max)) = zaxis.level_range() {
            writeln!(f, "    levels: {} to {}", min, max)?;
        }
    }
    Ok(())
}

fn render_dataset(f: &mut fmt::Formatter<'_>, info: &DatasetInfo) -> fmt::Result {
    writeln!(f, "  format: {}", or_unknown(info.metadata.format.as_deref()))?;
    writeln!(
        f,
        "  {} {}",
        format!("{} variables:", info.nvar()).bright_yellow().bold(),
        info.var_names().join(", ").bright_cyan()
    )?;

    if !info.grid.is_empty() {
        writeln!(
            f,
            "  grid: {} ({} points)",
            or_unknown(info.grid.gridtype.as_deref()),
            or_unknown(info.grid.points)
        )?;
        for axis in [&info.grid.x, &info.grid.y].into_iter().flatten() {
            let step = axis
                .resolution
                .map(|resolution| format!(" by {}", resolution))
                .unwrap_or_default();
            writeln!(
                f,
                "    {}: {} to {}{} {}",
                axis.name,
                axis.start,
                axis.end,
                step,
                axis.units.as_deref().unwrap_or_default().bright_black()
            )?;
        }
    }

    if !info.vertical.is_empty() {
        writeln!(
            f,
            "  vertical: {} ({} levels)",
            or_unknown(info.vertical.zaxistype.as_deref()),
            or_unknown(info.vertical.levels)
        )?;
    }

    if !info.time.is_empty() {
        writeln!(f, "  time: {} steps", or_unknown(info.time.steps))?;
        if let Some((first, last)) = info.time_range() {
            writeln!(f, "    {} .. {}", first, last)?;
        }
        if let Some(resolution) = &info.time.time_resolution {
            writeln!(f, "    every {}", resolution.label.bright_cyan())?;
        }
    }
    Ok(())
}

fn render_global(f: &mut fmt::Formatter<'_>, attributes: &GlobalAttributes) -> fmt::Result {
    for (key, value) in attributes {
        writeln!(f, "  {} = {}", key.bright_cyan(), value)?;
    }
    Ok(())
}

fn render_variable_attributes(
    f: &mut fmt::Formatter<'_>,
    attributes: &VariableAttributes,
) -> fmt::Result {
    for (variable, group) in attributes {
        writeln!(f, "  {}", variable.bright_yellow().bold())?;
        for (key, value) in group {
            writeln!(f, "    {} = {}", key.bright_cyan(), value)?;
        }
    }
    Ok(())
}

fn render_parameters(f: &mut fmt::Formatter<'_>, rows: &[ParameterRow]) -> fmt::Result {
    for row in rows {
        writeln!(
            f,
            "  {} {} {} {}",
            row.code.bright_yellow(),
            row.name.as_deref().unwrap_or_default().bright_cyan(),
            row.units.as_deref().unwrap_or_default(),
            row.description.as_deref().unwrap_or_default().bright_black()
        )?;
    }
    Ok(())
}

fn render_array(f: &mut fmt::Formatter<'_>, array: &NumericArray) -> fmt::Result {
    let preview: Vec<String> = array
        .values
        .iter()
        .take(ARRAY_PREVIEW)
        .map(f64::to_string)
        .collect();
    let ellipsis = if array.values.len() > ARRAY_PREVIEW { " ..." } else { "" };
    writeln!(
        f,
        "  {} ({} values): {}{}",
        array.name.bright_cyan(),
        array.values.len(),
        preview.join(" "),
        ellipsis
    )
}

fn render_variable_list(f: &mut fmt::Formatter<'_>, entries: &[VariableListEntry]) -> fmt::Result {
    for entry in entries {
        writeln!(f, "  {}", entry.raw)?;
    }
    Ok(())
}
