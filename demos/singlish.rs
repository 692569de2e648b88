//! Convert Singlish command-line arguments to Sinhala Unicode.
//!
//! ```text
//! cargo run --example singlish -- mama gedara yanawaa
//! ```

use sinscript::singlish_to_unicode;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        "ayubowan".to_owned()
    } else {
        args.join(" ")
    };
    println!("{}", singlish_to_unicode(&input));
}
