//! Markdown terminal formatting using termimad

use termimad::{gray, MadSkin};

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    // Plain markdown when colors are off
    if should_use_colors() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Wall skin: a bold mood heading, soft caption, dim footer
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Mood heading: Bold magenta
    skin.headers[0].set_fg(Magenta);
    skin.headers[0].add_attr(Attribute::Bold);

    // Caption: White
    skin.paragraph.set_fg(White);

    // "Updated ..." footer: Dim gray italic
    skin.italic.set_fg(gray(14));
    skin.italic.add_attr(Attribute::Italic);

    // Background URL: Cyan
    skin.inline_code.set_fg(Cyan);
}
