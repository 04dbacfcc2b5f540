use console::{style, Term, Key};
use tui_banner::{Align, Banner, ColorMode, Fill, Gradient, GradientDirection, Palette};

const BRAND: u8 = 44;       // teal
const BRAND_DIM: u8 = 30;   // dark cyan
const DIM: u8 = 240;        // dim text

/// The separator character (horizontal ellipsis).
const SEP_CHAR: char = '\u{2026}';

const TAGLINE: &str = "True or false, from what you already know";

/// Show the full-screen splash banner.
/// Waits for Enter, then clears and returns.
pub fn show_splash(entries: usize) {
    let term = Term::stdout();
    let _ = term.clear_screen();

    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");

    let (_, term_cols) = term.size();
    let term_w = term_cols as usize;

    let center = |text_w: usize| -> String {
        if term_w > text_w + 4 {
            " ".repeat((term_w - text_w) / 2)
        } else {
            "  ".to_string()
        }
    };

    let palette = Palette::from_hex(&[
        "#AFFFFF",
        "#5FD7D7",
        "#00AFAF",
        "#005F87",
    ]);
    let gradient = Gradient::new(palette.colors().to_vec(), GradientDirection::Diagonal);

    let banner_text = match Banner::new("QUIZ") {
        Ok(b) => b
            .gradient(gradient)
            .fill(Fill::Keep)
            .align(Align::Center)
            .trim_vertical(true)
            .edge_shade(0.35, '\u{2591}')
            .color_mode(ColorMode::TrueColor)
            .width(term_w)
            .render(),
        Err(_) => {
            // Fallback if FIGlet font fails
            let p = center(10);
            format!("{}{}\n", p, style("QUIZSOLVER").color256(BRAND).bold())
        }
    };

    println!();
    print!("{}", banner_text);

    {
        let version_str = format!("v{} ({})", version, git_hash);
        let p = center(version_str.len());
        println!("{}{}", p, style(version_str).color256(DIM));
    }

    let scene_w = term_w.clamp(40, 76);
    let pad = center(scene_w);
    let separator = style(SEP_CHAR.to_string().repeat(scene_w)).color256(BRAND_DIM);
    println!("{}{}", pad, separator);
    {
        let p = center(TAGLINE.len());
        println!("{}{}", p, style(TAGLINE).white().bold());
    }
    println!("{}{}", pad, separator);
    println!();

    {
        let msg = format!("{} questions loaded", entries);
        let p = center(msg.len() + 4);
        println!("{}  {} {}", p, style("\u{2714}").green().bold(), style(msg).green());
    }
    println!();

    let guide: &[(&str, &str)] = &[
        ("<question>",      "Look up the recorded answer"),
        ("/threshold [N]",  "Show or set the minimum confidence"),
        ("/top",            "Rank candidates for the last question"),
        ("/help",           "List all commands"),
    ];
    {
        let p = center(56);
        println!("{}  {}", p, style("Quick Start:").white().bold());
        println!();
        for (cmd, desc) in guide {
            println!("{}    {:<18} {}", p, style(cmd).color256(BRAND), style(desc).dim());
        }
    }
    println!();

    {
        let p = center(24);
        println!("{}  Press {} to continue", p, style("Enter").white().bold());
    }

    loop {
        match term.read_key() {
            Ok(Key::Enter) => break,
            Ok(Key::Escape) => break,
            Err(_) => break,
            _ => {}
        }
    }

    let _ = term.clear_screen();
    println!(
        "  {} {}  {}",
        style("quizsolver").color256(BRAND).bold(),
        style(format!("v{}", version)).dim(),
        style("\u{2714} ready").green().dim(),
    );
    println!("  {} {}", style("Type").dim(), style("/help").white().bold());
    println!();
}
