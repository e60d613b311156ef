//! How the zero-run pass shrinks encoded doubles, and how malformed input
//! is reported.
//!
//! Run with: cargo run --example zero_runs

use safeson::{decode, rle, Encoder, Error, Value};

fn main() -> Result<(), Error> {
    let numbers = Value::Array((0..8).map(|i| Value::from(i * 1000)).collect());

    let mut encoder = Encoder::new();
    encoder.write_value(&numbers);
    let flat = encoder.into_inner();
    let packed = rle::encode(&flat);

    println!("Tagged encoding: {} bytes", flat.len());
    println!("After zero runs: {} bytes", packed.len());
    println!("{:02x?}\n", packed);

    assert_eq!(rle::decode(&packed)?, flat);
    assert_eq!(decode(&packed)?, numbers);

    let mut zeros = vec![0u8; 1000];
    zeros.push(1);
    println!("1000 zeros and a one: {:?}\n", rle::encode(&zeros));

    let cases: [&[u8]; 6] = [&[], &[0], &[3, 0], &[3, 0, 0], &[9], &[3, 0, 9]];
    for bad in cases {
        match decode(bad) {
            Ok(value) => println!("{:?} -> {}", bad, value),
            Err(e) => println!("{:?} -> {}", bad, e),
        }
    }

    Ok(())
}
