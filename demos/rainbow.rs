//! Render a line of text in every foreground and background color.
//!
//! ```text
//! cargo run --example rainbow -- "some text"
//! ```

use colortag::ColorStr;

const COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| "Rust".to_string());

    for color in COLORS {
        let fg = ColorStr::new(&format!("{{{color}}}{text}{{/{color}}}"));
        let hi = ColorStr::new(&format!("{{hi{color}}}{text}{{/hi{color}}}"));
        let auto = ColorStr::new(&format!("{{auto{color}}}{text}{{/auto{color}}}"));
        let bg = ColorStr::new(&format!("{{bg{color}}}{text}{{/bg{color}}}"));
        println!("{:>8}  {fg}  {hi}  {auto}  {bg}", color);
    }
}
