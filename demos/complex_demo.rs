use complexkit::prelude::*;
use num_complex::Complex64;

fn complex_operations(z1: Complex, z2: Complex) -> (Complex, f64, f64) {
    let sum = z1 + z2;
    let (magnitude, phase) = z1.to_polar();

    println!("z1 = {}", z1);
    println!("z2 = {}", z2);
    println!("z1 + z2 = {}", sum);
    println!("z1 * z2 = {}", *z1.copy().times(z2));
    println!("z1 / z2 = {}", *z1.copy().divide(z2));
    println!("|z1| = {}", magnitude);
    println!("|z1|^2 = {}", z1.length_sq());
    println!("arg(z1) = {}", phase);
    println!("z1* = {}", *z1.copy().conj());
    println!("z1^3 = {}", *z1.copy().power(3));
    println!("exp(z1) = {}", *z1.copy().exp());
    println!("ln(z1) = {}", *z1.copy().log());
    println!("sin(z1) = {}", *z1.copy().sin());
    println!("cos(z1) = {}", *z1.copy().cos());

    (sum, magnitude, phase)
}

fn main() {
    println!("=== Chained operations ===");
    let z1 = Complex::new(3.0, 4.0);
    let z2 = Complex::new(1.0, 2.0);
    complex_operations(z1, z2);

    println!("\n=== Interop with num_complex ===");
    let c: Complex64 = z1.into();
    println!("num_complex exp(z1) = {}", c.exp());

    println!("\n=== Singular inputs ===");
    println!("z1 / 0 = {}", *z1.copy().divide(Complex::ZERO));
    println!("ln(0) = {}", *Complex::ZERO.copy().log());
    match z1.copy().checked_divide(Complex::ZERO) {
        Ok(z) => println!("checked z1 / 0 = {}", z),
        Err(err) => println!("checked z1 / 0 failed: {}", err),
    }

    println!("\n=== Parsing ===");
    for text in ["3 + 4i", "-2.5 - i", "7i", "not a number"] {
        match text.parse::<Complex>() {
            Ok(z) => println!("{:?} -> {}", text, z),
            Err(err) => println!("{:?} -> error: {}", text, err),
        }
    }
}
