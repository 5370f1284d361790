/// Number of outputs predicted for each pair of bits.
pub const OUTPUT_COUNT: usize = 3;

/// Returns the bitwise XOR, AND and OR of `a` and `b`,
/// as network targets.
pub fn targets(a: u8, b: u8) -> [f32; OUTPUT_COUNT] {
    [(a ^ b) as f32, (a & b) as f32, (a | b) as f32]
}

/// Returns every combination of two input bits,
/// paired with its XOR/AND/OR targets.
pub fn bitwise_examples() -> Vec<([f32; 2], [f32; OUTPUT_COUNT])> {
    let mut examples = Vec::with_capacity(4);
    for a in 0..2u8 {
        for b in 0..2u8 {
            examples.push(([a as f32, b as f32], targets(a, b)));
        }
    }
    examples
}
