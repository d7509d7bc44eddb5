use std::path::Path;

use palette::{tint, Color, Theme};
use raqote::{DrawOptions, DrawTarget, Path as FillPath, PathBuilder, SolidSource, Source};

use crate::error::{Error, Result};

/// Sheet geometry for the rendered palette.
pub struct Sheet {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

const SHEET_BACKGROUND: SolidSource = SolidSource {
    r: 0xfa,
    g: 0xfa,
    b: 0xfa,
    a: 0xff,
};

/// Render the palette sheet and write it as PNG.
pub fn write(theme: &Theme, path: impl AsRef<Path>, sheet: &Sheet) -> Result<()> {
    let target = render(theme, sheet);
    target
        .write_png(path)
        .map_err(|err| Error::Png(err.to_string()))
}

/// Draw the eight theme colors as rounded swatches, light row on top,
/// dark row below. Every swatch carries a bar in its own tint so the
/// legibility of the derived pair is visible at a glance.
pub fn render(theme: &Theme, sheet: &Sheet) -> DrawTarget {
    let mut target = DrawTarget::new(sheet.width as i32, sheet.height as i32);
    target.clear(SHEET_BACKGROUND);

    let radius = sheet.radius as f32;
    let gap = radius;
    let cell_w = (sheet.width as f32 - gap * 5.0) / 4.0;
    let cell_h = (sheet.height as f32 - gap * 3.0) / 2.0;

    let rows = [theme.light_colors(), theme.dark_colors()];
    for (row, colors) in rows.iter().enumerate() {
        for (col, &color) in colors.iter().enumerate() {
            let x = gap + col as f32 * (cell_w + gap);
            let y = gap + row as f32 * (cell_h + gap);

            let swatch = rounded_rect(x, y, cell_w, cell_h, radius);
            target.fill(&swatch, &solid(color), &DrawOptions::default());

            let bar = rounded_rect(
                x + cell_w * 0.15,
                y + cell_h * 0.4,
                cell_w * 0.7,
                cell_h * 0.2,
                radius * 0.5,
            );
            target.fill(&bar, &solid(tint(color)), &DrawOptions::default());
        }
    }

    target
}

fn solid(color: Color) -> Source<'static> {
    Source::Solid(SolidSource::from_unpremultiplied_argb(
        color.alpha(),
        color.red(),
        color.green(),
        color.blue(),
    ))
}

fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> FillPath {
    let r = radius.min(width / 2.0).min(height / 2.0);
    let mut pb = PathBuilder::new();

    pb.move_to(x + r, y);
    pb.line_to(x + width - r, y);
    pb.cubic_to(
        x + width - r / 2.0,
        y,
        x + width,
        y + r / 2.0,
        x + width,
        y + r,
    );

    pb.line_to(x + width, y + height - r);
    pb.cubic_to(
        x + width,
        y + height - r / 2.0,
        x + width - r / 2.0,
        y + height,
        x + width - r,
        y + height,
    );

    pb.line_to(x + r, y + height);
    pb.cubic_to(
        x + r / 2.0,
        y + height,
        x,
        y + height - r / 2.0,
        x,
        y + height - r,
    );

    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r / 2.0, x + r / 2.0, y, x + r, y);

    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use palette::{ThemeSources, DEFAULT_PRIMARY};

    use super::*;

    fn pixel(target: &DrawTarget, x: usize, y: usize) -> u32 {
        target.get_data()[y * target.width() as usize + x]
    }

    #[test]
    fn sheet_has_the_requested_size() {
        let theme = Theme::new(ThemeSources::default());
        let sheet = Sheet {
            width: 840,
            height: 420,
            radius: 18,
        };
        let target = render(&theme, &sheet);
        assert_eq!((target.width(), target.height()), (840, 420));
    }

    #[test]
    fn swatches_carry_base_and_tint_colors() {
        let theme = Theme::new(ThemeSources::default());
        let sheet = Sheet {
            width: 840,
            height: 420,
            radius: 18,
        };
        let target = render(&theme, &sheet);

        // Margin pixels keep the sheet background.
        assert_eq!(pixel(&target, 2, 2), 0xfffa_fafa);
        // Inside the first swatch, above its tint bar: the primary color.
        assert_eq!(pixel(&target, 60, 60), DEFAULT_PRIMARY.to_u32());
        // Inside the tint bar of the first swatch.
        assert_eq!(
            pixel(&target, 60, 110),
            tint(DEFAULT_PRIMARY).to_u32()
        );
    }
}
