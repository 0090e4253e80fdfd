//! P-256 Scalar Multiplication Binary
//!
//! Computes [k]·G on the NIST P-256 curve.
//!
//! Usage:
//!   nistp256 <scalar_hex>
//!   nistp256 --file <operands> <results>
//!   nistp256 --demo

use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;

use nistp256::bigint::U256;
use nistp256::p256::{
    scalar_mul_ltr, scalar_mul_ltr_window, scalar_mul_rtl, scalar_mul_rtl_precomp, window_table,
    bit_table, AffinePoint,
};
use nistp256::vectors;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "--demo" => run_demo(),
        "--file" => {
            if args.len() < 4 {
                eprintln!("Error: --file needs an operand file and a result file");
                print_usage();
                process::exit(1);
            }
            run_file(&args[2], &args[3]);
        }
        "--help" | "-h" => print_usage(),
        scalar_hex => run_scalar(scalar_hex),
    }
}

fn print_usage() {
    println!("nistp256 v{}", nistp256::VERSION);
    println!();
    println!("Usage:");
    println!("  nistp256 <scalar_hex>                 Compute [k]G for a 64-digit hex scalar");
    println!("  nistp256 --file <operands> <results>  [k]G for every scalar in an operand file");
    println!("  nistp256 --demo                       Run all four multipliers on a sample scalar");
    println!("  nistp256 --help                       Show this help");
}

fn run_scalar(scalar_hex: &str) {
    let scalar = match U256::from_be_hex(scalar_hex) {
        Some(scalar) => scalar,
        None => {
            eprintln!("Error: scalar must be exactly 64 hex digits");
            process::exit(1);
        }
    };

    let point = scalar_mul_ltr(&AffinePoint::generator(), &scalar);
    print_point(&point);
}

fn run_file(operand_path: &str, result_path: &str) {
    let scalars = match vectors::read_operands(Path::new(operand_path)) {
        Ok(scalars) => scalars,
        Err(e) => {
            eprintln!("Error reading {}: {}", operand_path, e);
            process::exit(1);
        }
    };

    let g = AffinePoint::generator();
    let mut results = Vec::with_capacity(scalars.len() * 2);
    for scalar in &scalars {
        let point = scalar_mul_ltr(&g, scalar);
        results.push(point.x.limbs());
        results.push(point.y.limbs());
    }

    if let Err(e) = vectors::write_results(Path::new(result_path), &results) {
        eprintln!("Error writing {}: {}", result_path, e);
        process::exit(1);
    }
    println!("{} scalars -> {}", scalars.len(), result_path);
}

fn run_demo() {
    let scalar = U256::from_be_hex(
        "ddb7f11471afc9f6b6d14865b568a7a2ba08ee995e4d9e0a18671bca3933224b",
    )
    .unwrap();
    let g = AffinePoint::generator();

    println!("k = {}", scalar);
    println!();

    let start = Instant::now();
    let ltr = scalar_mul_ltr(&g, &scalar);
    println!("left-to-right       {:?}", start.elapsed());

    let start = Instant::now();
    let rtl = scalar_mul_rtl(&g, &scalar);
    println!("right-to-left       {:?}", start.elapsed());

    let window = window_table();
    let start = Instant::now();
    let windowed = scalar_mul_ltr_window(window, &scalar);
    println!("8-bit window        {:?}", start.elapsed());

    let bits = bit_table();
    let start = Instant::now();
    let precomp = scalar_mul_rtl_precomp(bits, &scalar);
    println!("per-bit precomputed {:?}", start.elapsed());

    assert_eq!(ltr, rtl);
    assert_eq!(ltr, windowed);
    assert_eq!(ltr, precomp);

    println!();
    print_point(&ltr);
}

fn print_point(point: &AffinePoint) {
    if point.is_infinity() {
        println!("point at infinity");
        return;
    }
    println!("x = {}", point.x);
    println!("y = {}", point.y);
}
