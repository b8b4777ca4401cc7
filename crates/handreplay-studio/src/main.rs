use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use handreplay_engine::logging::{init_logging, LoggingConfig};
use handreplay_engine::render::PixmapSurface;
use handreplay_engine::text::FontSystem;
use handreplay_table::{CardCode, CardOrientation, Table, TableConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a hand-replay table to a PNG", long_about = None)]
struct Args {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Number of seats around the table.
    #[arg(long, default_value_t = 6)]
    seats: usize,
    /// Angle of seat 0 in radians; 0 is the right end of the table.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_angle: f32,
    /// TrueType/OpenType font for card text. Falls back to common system fonts.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Hole cards for one seat, e.g. `0:Ah,Kd`. Repeat per seat.
    #[arg(long = "hand", value_name = "SEAT:CARDS")]
    hands: Vec<String>,
    #[arg(long, value_enum, default_value_t = Orientation::Upright)]
    orientation: Orientation,
    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
    #[arg(long, short, default_value = "table.png")]
    output: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Upright,
    FacingCenter,
}

impl From<Orientation> for CardOrientation {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Upright => CardOrientation::Upright,
            Orientation::FacingCenter => CardOrientation::FacingCenter,
        }
    }
}

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let config = TableConfig::default()
        .with_canvas(args.width as f32, args.height as f32)
        .with_seats(args.seats, args.start_angle)
        .with_orientation(args.orientation.into());
    let table = Table::new(config).context("invalid table configuration")?;
    let holdings = parse_hands(&args.hands, args.seats)?;

    let mut surface = PixmapSurface::new(args.width, args.height)
        .context("cannot allocate canvas")?
        .with_fonts(load_fonts(args.font.as_deref())?);

    table.init(&mut surface, &holdings).context("rendering table")?;
    surface
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let dealt: usize = holdings.iter().map(Vec::len).sum();
    log::info!(
        "wrote {} ({}x{}, {} seats, {} cards dealt)",
        args.output.display(),
        args.width,
        args.height,
        args.seats,
        dealt
    );
    Ok(())
}

/// Loads `path` if given, else the first readable system font. Text is
/// skipped at draw time when no font is available.
fn load_fonts(path: Option<&std::path::Path>) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    let bytes = match path {
        Some(p) => Some(std::fs::read(p).with_context(|| format!("reading font {}", p.display()))?),
        None => SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok()),
    };
    match bytes {
        Some(bytes) => {
            fonts.load_font("serif", &bytes).context("parsing font")?;
        }
        None => log::warn!("no font found; card text will not be drawn"),
    }
    Ok(fonts)
}

/// Parses `SEAT:CARD,CARD` entries into one hand per seat.
fn parse_hands(entries: &[String], seats: usize) -> Result<Vec<Vec<CardCode>>> {
    let mut holdings = vec![Vec::new(); seats];
    for entry in entries {
        let Some((seat, cards)) = entry.split_once(':') else {
            bail!("hand `{entry}` must look like SEAT:CARD,CARD");
        };
        let seat: usize = seat.trim().parse().with_context(|| format!("bad seat number in `{entry}`"))?;
        if seat >= seats {
            bail!("seat {seat} out of range for a {seats}-seat table");
        }
        for code in cards.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let card = CardCode::parse(code).with_context(|| format!("in hand `{entry}`"))?;
            holdings[seat].push(card);
        }
    }
    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[test]
    fn hands_land_on_their_seats() {
        let holdings = parse_hands(&entries(&["0:Ah,Kd", "3: 10s , 9s"]), 6).unwrap();
        assert_eq!(holdings.len(), 6);
        assert_eq!(holdings[0], vec![CardCode::parse("Ah").unwrap(), CardCode::parse("Kd").unwrap()]);
        assert_eq!(holdings[3].len(), 2);
        assert!(holdings[1].is_empty());
    }

    #[test]
    fn bad_hands_are_rejected() {
        assert!(parse_hands(&entries(&["Ah,Kd"]), 6).is_err());
        assert!(parse_hands(&entries(&["6:Ah"]), 6).is_err());
        assert!(parse_hands(&entries(&["x:Ah"]), 6).is_err());
        assert!(parse_hands(&entries(&["1:Ax"]), 6).is_err());
    }

    // ── args ──────────────────────────────────────────────────────────────

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["handreplay-studio"]).unwrap();
        assert_eq!((args.width, args.height, args.seats), (800, 600, 6));
        assert_eq!(args.orientation, Orientation::Upright);
        assert_eq!(args.output, PathBuf::from("table.png"));
    }

    #[test]
    fn args_accept_repeated_hands() {
        let args = Args::try_parse_from([
            "handreplay-studio",
            "--hand",
            "0:Ah,Kd",
            "--hand",
            "2:7c,7d",
            "--orientation",
            "facing-center",
        ])
        .unwrap();
        assert_eq!(args.hands.len(), 2);
        assert_eq!(CardOrientation::from(args.orientation), CardOrientation::FacingCenter);
    }
}
