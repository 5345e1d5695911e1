//! Print every supported tag, its codes, and a colored sample.
//!
//! ```text
//! cargo run --example list-tags -- [--light-bg | --dark-bg] [--no-colors]
//! ```

use colortag::{
    disable_all_colors, list_tags, set_dark_background, set_light_background, ColorStr, Mode,
};

fn main() {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--light-bg" => set_light_background(),
            "--dark-bg" => set_dark_background(),
            "--no-colors" => disable_all_colors(),
            other => {
                eprintln!("unknown option: {other}");
                eprintln!("usage: list-tags [--light-bg | --dark-bg] [--no-colors]");
                std::process::exit(2);
            }
        }
    }

    for entry in list_tags(Mode::current()) {
        if entry.open.is_empty() {
            // Standalone reset tags have no opening counterpart.
            let code = entry.close_code.map_or_else(String::new, |c| c.to_string());
            println!("{:>24}  {:>3}", format!("{{{}}}", entry.close), code);
            continue;
        }
        let sample = ColorStr::new(&format!(
            "{{{open}}}{open}{{{close}}}",
            open = entry.open,
            close = entry.close
        ));
        let codes = format!(
            "{}/{}",
            entry.open_code.map_or_else(String::new, |c| c.to_string()),
            entry.close_code.map_or_else(String::new, |c| c.to_string())
        );
        println!("{:>24}  {:>7}  {}", format!("{{{}}}", entry.open), codes, sample);
    }
}
