// Preview the theme derived from a wallpaper description, e.g.
//
//     {
//       all_colors: { "#d06020": 800, "#2040a0": 200 }
//       main_colors: [ "#d06020" ]
//     }
//
// written as Hjson.  Writes an HTML page with the seed candidates and
// the five shade ladders.

use std::{fs::File,
          io::{BufWriter, prelude::*},
          path::PathBuf,
          error::Error};
use clap::Parser;
use serde_hjson::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;
use monet_shades::{Argb, Family, Monet, WallpaperColors, TONES};

type Err = Box<dyn Error>;

#[derive(Debug, Parser)]
#[command(about = "HTML preview of the Monet shades of a wallpaper")]
struct Args {
    /// Hjson file with `all_colors` and `main_colors`.
    input: PathBuf,
    /// Where to write the preview.
    #[arg(short, long, default_value = "monet.html")]
    output: PathBuf,
}

fn weight_of_value(color: &str, v: &Value) -> Result<u32, Err> {
    let w = match v {
        Value::I64(w) => u32::try_from(*w).ok(),
        Value::U64(w) => u32::try_from(*w).ok(),
        Value::F64(w) if *w >= 0. && *w <= u32::MAX as f64 => Some(*w as u32),
        _ => None,
    };
    w.ok_or_else(|| format!("{color}: weight {v:?} is not a non-negative \
                             32 bits integer").into())
}

fn wallpaper_of_json(json: Value) -> Result<WallpaperColors, Err> {
    let Value::Object(m) = json else {
        return Err("the wallpaper description must be an object".into())
    };
    let mut colors = WallpaperColors::default();
    match m.get("all_colors") {
        Some(Value::Object(all)) => {
            for (c, w) in all.iter() {
                let argb: Argb = c.parse()?;
                colors.all_colors.insert(argb, weight_of_value(c, w)?);
            }
        }
        None => (),
        Some(v) => return Err(format!("all_colors: not an object: {v:?}").into()),
    }
    match m.get("main_colors") {
        Some(Value::Array(main)) => {
            for c in main {
                match c {
                    Value::String(c) => colors.main_colors.push(c.parse()?),
                    _ => return Err(format!("main_colors: {c:?} is not a \
                                             color string").into()),
                }
            }
        }
        None => (),
        Some(v) => return Err(format!("main_colors: not an array: {v:?}").into()),
    }
    Ok(colors)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Argb],
                   comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: 40px; height: 30px; \
                      background-color: {c}\" title=\"{c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let json: Value = serde_hjson::from_reader(File::open(&args.input)?)?;
    let wallpaper = wallpaper_of_json(json)?;
    info!(colors = wallpaper.all_colors.len(),
          population = wallpaper.population(),
          main_colors = wallpaper.main_colors.len(), "wallpaper loaded");
    let candidates = wallpaper.seed_candidates();
    let monet = Monet::new(candidates[0]);

    let mut fh = BufWriter::new(File::create(&args.output)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Monet shades of {}</title>\n\
                  </head>\n\
                  <body>", args.input.display())?;
    writeln!(fh, "<h3>Seed candidates</h3>")?;
    table_of_colors(&mut fh, &candidates, "best first")?;
    writeln!(fh, "<h3>Shades of {}</h3>", monet.seed())?;
    let tones: Vec<_> = TONES.iter().map(|t| t.to_string()).collect();
    writeln!(fh, "<p>Tones: {}</p>", tones.join(", "))?;
    for family in Family::ALL {
        let ladder = monet.shades(family);
        table_of_colors(&mut fh, ladder.as_slice(),
                        &format!("{family:?} (hue {:.1}, chroma {:.1})",
                                 ladder.hue(), ladder.chroma()))?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    info!(output = %args.output.display(), "preview written");
    Ok(())
}
