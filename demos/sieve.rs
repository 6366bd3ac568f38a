use light_bitfield::{BitField, BitFieldError};

/// Marks composites in `0..=limit` and returns the field of primes.
fn sieve(limit: usize) -> Result<BitField, BitFieldError> {
    let mut primes = BitField::new(limit + 1);
    primes.flip();
    primes.set(0, 0)?;
    if limit >= 1 {
        primes.set(1, 0)?;
    }

    let mut candidate = 2;
    while candidate * candidate <= limit {
        if primes.get(candidate)? == Some(1) {
            let mut multiple = candidate * candidate;
            while multiple <= limit {
                primes.set(multiple, 0)?;
                multiple += candidate;
            }
        }
        candidate += 1;
    }
    Ok(primes)
}

fn main() -> Result<(), BitFieldError> {
    const LIMIT: usize = 50;
    let primes = sieve(LIMIT)?;

    let mut found = Vec::new();
    primes.each_index(|idx| {
        if primes.get(idx) == Ok(Some(1)) {
            found.push(idx);
        }
    });

    println!("{} primes up to {LIMIT}: {found:?}", primes.count());
    println!("{primes}");
    Ok(())
}
