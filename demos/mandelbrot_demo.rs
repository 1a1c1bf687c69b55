use complexkit::prelude::*;
use std::env;

const PALETTE: &[u8] = b" .:-=+*#%@";

fn main() {
    let max_iterations = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u32>().ok())
        .unwrap_or(64);

    let view = match ViewportBuilder::new().width(96).height(40).build() {
        Ok(view) => view,
        Err(err) => {
            eprintln!("invalid viewport: {}", err);
            return;
        }
    };

    println!(
        "Mandelbrot set over [{}] .. [{}], {} iterations",
        view.min(),
        view.max(),
        max_iterations
    );

    for y in 0..view.height() {
        let row: String = (0..view.width())
            .map(|x| match view.escape_time_at(x, y, max_iterations) {
                None => '@',
                Some(n) => {
                    let idx = (n as usize * (PALETTE.len() - 1)) / max_iterations as usize;
                    PALETTE[idx.min(PALETTE.len() - 2)] as char
                }
            })
            .collect();
        println!("{}", row);
    }
}
