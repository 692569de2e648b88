//! Re-encode Sinhala Unicode arguments into FM Abhaya glyph order.
//!
//! ```text
//! cargo run --example legacy -- කොහොමද
//! ```
//! The output only renders correctly in the FM Abhaya font.

use sinscript::unicode_to_legacy_glyphs;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        "ආයුබෝවන්".to_owned()
    } else {
        args.join(" ")
    };
    println!("{}", unicode_to_legacy_glyphs(&input));
}
