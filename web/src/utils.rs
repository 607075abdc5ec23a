/// Seed for the bomb layout, built from two `Math.random` draws of 32 bits each.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let draw = || (random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

/// Three character counter display, clamped to what fits.
pub(crate) fn format_for_counter(value: i32) -> String {
    match value {
        ..=-100 => "-99".to_string(),
        -99..=-1 => format!("-{:02}", -value),
        0..=999 => format!("{:03}", value),
        _ => "999".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(7), "007");
        assert_eq!(format_for_counter(99), "099");
        assert_eq!(format_for_counter(999), "999");
    }

    #[test]
    fn counter_clamps_and_keeps_sign() {
        assert_eq!(format_for_counter(-3), "-03");
        assert_eq!(format_for_counter(-99), "-99");
        assert_eq!(format_for_counter(-250), "-99");
        assert_eq!(format_for_counter(1000), "999");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn random_seeds_vary() {
        let seeds: Vec<_> = (0..4).map(|_| js_random_seed()).collect();
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
