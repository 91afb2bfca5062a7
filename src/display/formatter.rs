//! Markdown terminal formatting using termimad

use termimad::MadSkin;

/// Render markdown for the terminal, styled or as plain text
pub fn format_markdown(markdown: &str, styled: bool) -> String {
    if styled {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.term_text(markdown).to_string()
    } else {
        format_plain(markdown)
    }
}

/// Customize termimad skin for command help
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);

    // Command names
    skin.inline_code.set_fg(Yellow);

    skin.table.set_fg(White);
    skin.bold.add_attr(Attribute::Bold);
    skin.bullet.set_fg(Cyan);
}

fn format_plain(markdown: &str) -> String {
    let mut output = markdown.trim_end().to_string();
    output.push('\n');
    output
}
