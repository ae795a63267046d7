use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use monet_shades::{Argb, Family, Monet, WallpaperColors, TONES};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[Argb],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn theme(fh: &mut impl Write, title: &str, monet: &Monet) -> Result<(), Err> {
    writeln!(fh, "<h3>{title} (seed {})</h3>", monet.seed())?;
    for family in Family::ALL {
        let ladder = monet.shades(family);
        let comment = format!("{family:?}: hue {:.1}, chroma {:.1}",
                              ladder.hue(), ladder.chroma());
        table_of_colors(fh, ladder.as_slice(), 40, &comment)?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("shades.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Monet shades: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    let tones: Vec<String> = TONES.iter().map(|t| t.to_string()).collect();
    writeln!(fh, "<p>Tones: {}</p>", tones.join(", "))?;

    for (title, seed) in [("Google blue", "#4285f4"),
                          ("Transparent", "#00000000"),
                          ("Red", "#d32f2f"),
                          ("Forest", "#2e7d32"),
                          ("Sand", "#c2b280"),
                          ("Gray", "#808080")] {
        theme(&mut fh, title, &Monet::new(seed.parse()?))?;
    }

    writeln!(fh, "<h3>Live wallpaper without usable colors</h3>")?;
    let live = WallpaperColors::from_main_colors(
        vec![Argb(0xFF_10_10_10), Argb(0xFF_F0_F0_F0)]);
    theme(&mut fh, "Fallback", &Monet::from_wallpaper(&live))?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
