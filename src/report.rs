use palette::{
    accent_with, contrast, darkness, is_dark, luma, tint, Color, ColorRole, DeltaMode, Theme,
};

/// Print the resolved palette, one role per line.
pub fn palette(theme: &Theme) {
    for role in ColorRole::ALL {
        let color = theme.color(role);
        println!(
            "{role:<18} {color:>9}  darkness {:.3}  luma {:.3}  {}",
            darkness(color),
            luma(color),
            shade(color),
        );
    }
    println!("suggested-accent   {:>9}", theme.suggested_accent());
}

/// Print the derived metrics of a single color.
pub fn inspect(color: Color, delta: DeltaMode) {
    let tinted = tint(color);
    println!("color     {color}");
    println!("darkness  {:.3} ({})", darkness(color), shade(color));
    println!("luma      {:.3}", luma(color));
    println!("tint      {tinted}  contrast {:.3}", contrast(color, tinted));
    println!("accent    {}", accent_with(color, delta));
}

fn shade(color: Color) -> &'static str {
    if is_dark(color) {
        "dark"
    } else {
        "light"
    }
}
