use crate::Point;
use anyhow::{bail, ensure, Context, Result};

/// Parses a pattern in Game of Life RLE format into live-cell coordinates,
/// with the pattern's top-left corner at the origin.
///
/// Recognizes `#` comment lines, the `x = W, y = H[, rule = ...]` header,
/// `b`/`o` runs, `$` row terminators and the `!` end marker. The rule, if
/// present, is ignored; the engine always plays B3/S23.
pub fn parse_rle(data: &[u8]) -> Result<Vec<Point>> {
    let text = std::str::from_utf8(data).context("pattern is not valid utf-8")?;
    let mut lines = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'));

    let header = lines.next().context("pattern is missing the header line")?;
    let (width, height) = parse_header(header)?;

    let mut cells = Vec::new();
    let (mut x, mut y) = (0_i64, 0_i64);
    let mut run: Option<i64> = None;

    for line in lines {
        for c in line.chars() {
            match c {
                '0'..='9' => {
                    let digit = i64::from(c as u8 - b'0');
                    run = Some(run.unwrap_or(0) * 10 + digit);
                }
                'b' => {
                    x += run.take().unwrap_or(1);
                    ensure!(x <= width, "dead run overflows the declared width");
                }
                'o' => {
                    for _ in 0..run.take().unwrap_or(1) {
                        cells.push(Point::new(x, y));
                        x += 1;
                    }
                    ensure!(x <= width, "live run overflows the declared width");
                }
                '$' => {
                    y += run.take().unwrap_or(1);
                    x = 0;
                    ensure!(y <= height, "row count overflows the declared height");
                }
                '!' => return Ok(cells),
                c if c.is_whitespace() => {}
                c => bail!("unexpected symbol {c:?} in the pattern body"),
            }
        }
    }

    bail!("pattern body is not terminated with '!'")
}

fn parse_header(line: &str) -> Result<(i64, i64)> {
    let mut numbers = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty());
    let width = numbers
        .next()
        .context("header is missing the width")?
        .parse::<i64>()?;
    let height = numbers
        .next()
        .context("header is missing the height")?
        .parse::<i64>()?;
    Ok((width, height))
}
