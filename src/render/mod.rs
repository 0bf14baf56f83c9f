use std::io::{self, Write};

use crate::domain::Location;

pub const NO_RESULTS: &str = "no results found";

/// How search results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every match, numbered, with name and coordinates
    #[default]
    Full,
    /// Only `<lat> <lon>` of the first match
    Concise,
}

impl OutputMode {
    pub fn from_concise(concise: bool) -> Self {
        if concise {
            OutputMode::Concise
        } else {
            OutputMode::Full
        }
    }
}

/// Write `locations` to `out` in the given mode.
///
/// Full mode layout, per match:
/// ```text
/// 1. Enfield, IE
///    Lat: 53.4161821, Lon: -6.8341687
///
/// ```
pub fn render<W: Write>(locations: &[Location], mode: OutputMode, out: &mut W) -> io::Result<()> {
    let Some(first) = locations.first() else {
        return writeln!(out, "{}", NO_RESULTS);
    };

    match mode {
        OutputMode::Concise => writeln!(out, "{} {}", first.lat, first.lon),
        OutputMode::Full => {
            for (i, loc) in locations.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, loc.display_name)?;
                writeln!(out, "   Lat: {}, Lon: {}", loc.lat, loc.lon)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Render and flush to `out`. A reader that went away early (`| head`)
/// is not an error.
pub fn print_results<W: Write>(
    locations: &[Location],
    mode: OutputMode,
    out: &mut W,
) -> io::Result<()> {
    match render(locations, mode, out).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Convenience wrapper returning the rendered text
pub fn render_to_string(locations: &[Location], mode: OutputMode) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec cannot fail
    let _ = render(locations, mode, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
